//! Priced order record - what the pricing core hands to order storage
//!
//! Values are persisted exactly as computed; storage must not re-derive or
//! re-round them.

use super::types::{ItemComposition, OrderType};
use crate::models::{LatLng, Size};
use serde::{Deserialize, Serialize};

/// Priced order line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricedOrderItem {
    /// Instance ID (content-addressed hash of the merge key)
    pub instance_id: String,
    pub name: String,
    pub quantity: i32,
    /// Unit price in major currency units (at least 0.01)
    pub price: f64,
    pub line_total: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_size: Option<Size>,
    /// Addon / ingredient / half-half sub-structures
    pub composition: ItemComposition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Priced order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricedOrder {
    pub order_type: OrderType,
    /// Delivery coordinate (only for delivery orders that were geocoded)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<LatLng>,
    /// Resolved delivery zone ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
    /// Resolved delivery zone name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_name: Option<String>,
    pub items: Vec<PricedOrderItem>,
    /// Items-only subtotal
    pub subtotal: f64,
    #[serde(default)]
    pub delivery_fee: f64,
    pub total: f64,
    /// Amount still missing to reach the resolved zone's minimum order
    /// value; informational, already excluded from `delivery_fee`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_order_shortfall: Option<f64>,
    /// Flat VAT rate, copied through unchanged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_rate: Option<f64>,
    /// Creation timestamp (ms)
    pub created_at: i64,
}
