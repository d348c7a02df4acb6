//! Shared types for the order pricing workspace
//!
//! Plain records exchanged with the external collaborators (menu storage,
//! zone storage, geocoding, order storage) and the unified error system.

pub mod error;
pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
