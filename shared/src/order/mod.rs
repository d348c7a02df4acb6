//! Order Module
//!
//! - Types: composed order items, selections, fulfillment type
//! - Snapshot: the priced order record emitted to order storage

pub mod snapshot;
pub mod types;

// Re-exports
pub use snapshot::{PricedOrder, PricedOrderItem};
pub use types::*;
