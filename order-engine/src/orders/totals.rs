//! Order-Level Totals
//!
//! ```text
//! subtotal     = Σ line_total
//! delivery_fee = zone fee (DELIVERY orders only, waived at free_delivery_from)
//! total        = subtotal + delivery_fee
//! ```
//!
//! Non-delivery order types never carry a delivery fee, whatever zone was
//! resolved earlier. A missing or non-finite coordinate means "not geocoded
//! yet": no zone, no fee, no error.

use rust_decimal::prelude::*;
use shared::models::{DeliveryZone, LatLng};
use shared::order::OrderType;
use tracing::debug;

use crate::delivery::{
    OutsideZonePolicy, compute_delivery_fee, minimum_order_shortfall, resolve_zone,
};
use crate::pricing::money::round_money;
use crate::pricing::{HalfHalfPolicy, PricingError};

use super::draft::OrderLine;

/// Pricing knobs shared by every order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PricingSettings {
    pub half_half: HalfHalfPolicy,
    pub outside_zone: OutsideZonePolicy,
}

/// Result of order totals calculation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderTotals {
    /// Items-only subtotal
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub total: Decimal,
    pub zone_id: Option<String>,
    pub zone_name: Option<String>,
    /// Amount missing to reach the resolved zone's minimum order value
    pub minimum_order_shortfall: Option<Decimal>,
}

/// Calculate order totals from priced lines
pub fn calculate_order_totals(
    order_type: OrderType,
    lines: &[OrderLine],
    coordinate: Option<LatLng>,
    zones: &[DeliveryZone],
    outside_zone: OutsideZonePolicy,
) -> Result<OrderTotals, PricingError> {
    let subtotal = lines
        .iter()
        .try_fold(Decimal::ZERO, |total, l| total.checked_add(l.line_total))
        .map(round_money)
        .ok_or_else(|| PricingError::out_of_range("order subtotal"))?;

    if !order_type.is_delivery() {
        return Ok(OrderTotals {
            subtotal,
            total: subtotal,
            ..Default::default()
        });
    }

    let coordinate = coordinate.filter(LatLng::is_valid);
    let zone = coordinate.and_then(|c| resolve_zone(c, zones));

    if zone.is_none() && coordinate.is_some() && outside_zone == OutsideZonePolicy::Reject {
        return Err(PricingError::OutsideDeliveryArea);
    }

    let delivery_fee = round_money(compute_delivery_fee(subtotal, zone));
    let total = subtotal
        .checked_add(delivery_fee)
        .ok_or_else(|| PricingError::out_of_range("order total"))?;

    debug!(
        %subtotal,
        %delivery_fee,
        %total,
        zone_id = ?zone.map(|z| &z.id),
        "[Pricing] Order totals calculated"
    );

    Ok(OrderTotals {
        subtotal,
        delivery_fee,
        total,
        zone_id: zone.map(|z| z.id.clone()),
        zone_name: zone.map(|z| z.name.clone()),
        minimum_order_shortfall: zone.and_then(|z| minimum_order_shortfall(subtotal, z)),
    })
}
