//! Ordering and filtering of listed elements.

pub mod filter;
