//! Orders Module
//!
//! - merge: content-addressed line identity
//! - totals: order-level aggregation (subtotal + delivery fee)
//! - draft: in-progress order with invalidation on every mutation

mod draft;
mod merge;
mod totals;

pub use draft::{OrderDraft, OrderLine};
pub use merge::{MergeKey, SelectionKey, generate_instance_id, merge_key};
pub use totals::{OrderTotals, PricingSettings, calculate_order_totals};
