//! Configuration module for stored badge preferences
//!
//! Provides types and parsing for `badge.toml`.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
