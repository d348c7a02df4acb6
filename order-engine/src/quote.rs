//! Order quotes
//!
//! A quote request is a self-contained order: items, fulfillment channel,
//! geocoded coordinate and the zone set as stored (minor units). It is priced
//! through an [`OrderDraft`] exactly as an interactive order would be.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};
use shared::models::{DeliveryZoneRecord, LatLng};
use shared::order::{ComposedOrderItem, OrderType, PricedOrder};
use std::path::Path;
use tracing::info;

use crate::delivery::load_zones;
use crate::orders::{OrderDraft, PricingSettings};
use crate::pricing::HalfHalfPolicy;

/// Order to be priced
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteRequest {
    #[serde(default)]
    pub order_type: OrderType,
    #[serde(default)]
    pub coordinate: Option<LatLng>,
    pub items: Vec<ComposedOrderItem>,
    /// Zones in first-match order, as stored
    #[serde(default)]
    pub zones: Vec<DeliveryZoneRecord>,
    /// Replaces the configured half-half policy when present
    #[serde(default)]
    pub half_half: Option<HalfHalfPolicy>,
    #[serde(default)]
    pub vat_rate: Option<f64>,
}

/// Read a quote request from a JSON file
pub fn load_quote_request(path: impl AsRef<Path>) -> anyhow::Result<QuoteRequest> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read quote file {}", path.display()))?;
    let request = serde_json::from_str(&content)
        .with_context(|| format!("Invalid quote request in {}", path.display()))?;
    Ok(request)
}

/// Price a quote request
///
/// The first item that cannot be priced aborts the quote; its position is
/// reported as the `item_index` detail.
pub fn price_quote(
    request: QuoteRequest,
    settings: &PricingSettings,
) -> AppResult<PricedOrder> {
    let mut settings = settings.clone();
    if let Some(policy) = request.half_half {
        settings.half_half = policy;
    }

    let mut draft = OrderDraft::new(request.order_type, settings);
    draft.set_zones(load_zones(request.zones));
    draft.set_coordinate(request.coordinate);
    draft.set_vat_rate(request.vat_rate);

    for (index, item) in request.items.into_iter().enumerate() {
        draft
            .add_item(item)
            .map_err(|e| AppError::from(e).with_detail("item_index", index))?;
    }

    let order = draft.to_priced_order()?;

    info!(
        order_type = ?order.order_type,
        lines = order.items.len(),
        zone_id = ?order.zone_id,
        total = order.total,
        minimum_order_shortfall = ?order.minimum_order_shortfall,
        "Quote priced"
    );

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_parse_minimal_request() {
        let request: QuoteRequest = serde_json::from_str(
            r#"{"items":[{"composition":{"kind":"simple","dish":{"id":"d1","name":"Soup",
                "category_id":"soups","base_price":8.5,"ingredients":[],"addon_groups":[]}},
                "quantity":2}]}"#,
        )
        .unwrap();
        assert_eq!(request.order_type, OrderType::DineIn);
        assert!(request.zones.is_empty());

        let order = price_quote(request, &PricingSettings::default()).unwrap();
        assert_eq!(order.total, 17.0);
    }

    #[test]
    fn test_empty_request_rejected() {
        let request = QuoteRequest {
            order_type: OrderType::Takeaway,
            coordinate: None,
            items: vec![],
            zones: vec![],
            half_half: None,
            vat_rate: None,
        };
        let err = price_quote(request, &PricingSettings::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderEmpty);
    }
}
