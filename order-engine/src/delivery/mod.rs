//! Delivery Module
//!
//! - geometry: point-in-polygon and area estimate
//! - resolver: zone lookup, delivery fee, minimum order check
//! - zones: zone storage boundary conversion

pub mod geometry;
mod resolver;
mod zones;

pub use geometry::{mean_latitude, point_in_polygon, polygon_area};
pub use resolver::*;
pub use zones::*;
