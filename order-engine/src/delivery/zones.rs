//! Zone storage boundary
//!
//! Converts stored zones (minor units, `[lat, lng]` arrays) into the
//! major-unit [`DeliveryZone`] the resolver reads, computing the area.

use shared::models::{DeliveryZone, DeliveryZoneRecord, LatLng};
use tracing::warn;

use super::geometry::{mean_latitude, polygon_area};
use crate::pricing::money::{from_minor_units, to_f64};

/// Convert one stored zone
pub fn zone_from_record(record: DeliveryZoneRecord) -> DeliveryZone {
    let polygon: Vec<LatLng> = record.polygon.into_iter().map(LatLng::from).collect();
    let area = polygon_area(&polygon, mean_latitude(&polygon));
    let major = |cents: i64| to_f64(from_minor_units(cents));

    DeliveryZone {
        id: record.id,
        name: record.name,
        polygon,
        is_active: record.is_active,
        delivery_price: major(record.delivery_price),
        min_order_value: record.min_order_value.map(major),
        free_delivery_from: record.free_delivery_from.map(major),
        courier_rate: record.courier_rate.map(major),
        area,
    }
}

/// Convert stored zones, keeping their order
///
/// Zones with fewer than 3 vertices are kept (they simply never match) but
/// reported as a data-quality issue.
pub fn load_zones(records: Vec<DeliveryZoneRecord>) -> Vec<DeliveryZone> {
    records
        .into_iter()
        .map(|record| {
            if record.polygon.len() < 3 {
                warn!(
                    zone_id = %record.id,
                    zone_name = %record.name,
                    vertices = record.polygon.len(),
                    "Delivery zone polygon has fewer than 3 vertices; it will never match"
                );
            }
            zone_from_record(record)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> DeliveryZoneRecord {
        DeliveryZoneRecord {
            id: "z1".to_string(),
            name: "Centre".to_string(),
            polygon: vec![[0.0, 0.0], [0.0, 0.1], [0.1, 0.1], [0.1, 0.0]],
            is_active: true,
            delivery_price: 700,
            min_order_value: Some(4000),
            free_delivery_from: Some(12000),
            courier_rate: Some(450),
        }
    }

    #[test]
    fn test_minor_units_converted() {
        let zone = zone_from_record(record());
        assert_eq!(zone.delivery_price, 7.0);
        assert_eq!(zone.min_order_value, Some(40.0));
        assert_eq!(zone.free_delivery_from, Some(120.0));
        assert_eq!(zone.courier_rate, Some(4.5));
    }

    #[test]
    fn test_polygon_axis_order_and_area() {
        let zone = zone_from_record(record());
        assert_eq!(zone.polygon[1], LatLng::new(0.0, 0.1));
        // reference latitude 0.05° -> cos ≈ 1
        assert_eq!(zone.area, 123.21);
    }

    #[test]
    fn test_load_keeps_order_and_malformed() {
        let mut bad = record();
        bad.id = "bad".to_string();
        bad.polygon.truncate(2);

        let zones = load_zones(vec![bad, record()]);
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].id, "bad");
        assert_eq!(zones[0].area, 0.0);
        assert_eq!(zones[1].id, "z1");
    }
}
