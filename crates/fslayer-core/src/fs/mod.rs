//! Filesystem access.
//!
//! [`entry`] resolves paths into [`entry::PathElement`] snapshots,
//! [`ops`] and [`files`] wrap directory and file primitives with
//! precondition checks, and [`listing`] builds classified, sorted
//! directory listings.

pub mod entry;
pub mod files;
pub mod listing;
pub mod ops;
