//! Configuration management.
//!
//! Listing defaults and JSON output settings ([`settings::Config`]) are
//! stored as a TOML file.

pub mod settings;
