//! Delivery Zone Model

use serde::{Deserialize, Serialize};

/// Geographic coordinate
///
/// Polygons and query points both use (latitude, longitude) as (x, y);
/// callers must never swap the axes between the two.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Non-finite components are treated as "not geocoded"
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(p: LatLng) -> Self {
        [p.latitude, p.longitude]
    }
}

/// Delivery zone as stored by zone storage
///
/// Prices are integer minor currency units (cents). The polygon is a list of
/// `[latitude, longitude]` pairs, implicitly closed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryZoneRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub polygon: Vec<[f64; 2]>,
    pub is_active: bool,
    /// Delivery fee in cents
    pub delivery_price: i64,
    /// Minimum order value in cents
    #[serde(default)]
    pub min_order_value: Option<i64>,
    /// Free delivery threshold in cents
    #[serde(default)]
    pub free_delivery_from: Option<i64>,
    /// Courier payout per delivery in cents
    #[serde(default)]
    pub courier_rate: Option<i64>,
}

/// Delivery zone in major currency units, as read by the pricing core
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryZone {
    pub id: String,
    pub name: String,
    pub polygon: Vec<LatLng>,
    pub is_active: bool,
    pub delivery_price: f64,
    pub min_order_value: Option<f64>,
    pub free_delivery_from: Option<f64>,
    pub courier_rate: Option<f64>,
    /// Approximate area in km² (computed)
    pub area: f64,
}
