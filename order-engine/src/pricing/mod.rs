//! Item Pricing Module
//!
//! Reduces composed order items (single dish or half-half) to money amounts.

mod error;
mod half_half;
mod item_calculator;
pub mod money;
pub mod policy;

pub use error::PricingError;
pub use half_half::price_half_half_item;
pub use item_calculator::*;
pub use policy::{HalfHalfPolicy, HalfHalfSizePricing, PolicyStore};
