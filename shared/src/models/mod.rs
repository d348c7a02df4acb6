//! Data models
//!
//! Read-only records supplied by menu storage and zone storage.

pub mod delivery_zone;
pub mod dish;

// Re-exports
pub use delivery_zone::*;
pub use dish::*;
