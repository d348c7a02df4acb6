//! Delivery Zone Resolver
//!
//! First-match-wins over the zones in their given order: when active zones
//! overlap, the earliest one containing the point is returned.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::{DeliveryZone, LatLng};
use std::str::FromStr;
use tracing::trace;

use super::geometry::point_in_polygon;
use crate::pricing::money::to_decimal;

/// What to do with a delivery coordinate outside every active zone
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutsideZonePolicy {
    /// Charge no delivery fee
    #[default]
    NoFee,
    /// Refuse to total the order
    Reject,
}

impl FromStr for OutsideZonePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "no_fee" => Ok(Self::NoFee),
            "reject" => Ok(Self::Reject),
            other => Err(format!("unknown outside-zone policy: {}", other)),
        }
    }
}

/// Find the zone containing `coordinate`
///
/// Inactive zones and zones with fewer than 3 vertices are skipped. A
/// coordinate with non-finite components never matches.
pub fn resolve_zone(coordinate: LatLng, zones: &[DeliveryZone]) -> Option<&DeliveryZone> {
    if !coordinate.is_valid() {
        return None;
    }

    zones
        .iter()
        .filter(|z| z.is_active && z.polygon.len() >= 3)
        .find(|z| {
            let hit = point_in_polygon(coordinate, &z.polygon);
            trace!(zone_id = %z.id, hit, "[Resolver] Tested zone");
            hit
        })
}

/// Delivery fee for an order whose items-only subtotal is `items_subtotal`
///
/// - no zone: 0
/// - zone with `free_delivery_from` reached: 0
/// - otherwise the zone's delivery price
///
/// `min_order_value` never changes the fee.
pub fn compute_delivery_fee(items_subtotal: Decimal, zone: Option<&DeliveryZone>) -> Decimal {
    let Some(zone) = zone else {
        return Decimal::ZERO;
    };

    if let Some(threshold) = zone.free_delivery_from
        && items_subtotal >= to_decimal(threshold)
    {
        return Decimal::ZERO;
    }

    to_decimal(zone.delivery_price).max(Decimal::ZERO)
}

/// Amount still missing to reach the zone's minimum order value
///
/// `None` when the zone has no minimum or it is already met.
pub fn minimum_order_shortfall(items_subtotal: Decimal, zone: &DeliveryZone) -> Option<Decimal> {
    let minimum = to_decimal(zone.min_order_value?);
    (items_subtotal < minimum).then(|| minimum - items_subtotal)
}
