//! Geometries in geographic coordinates (latitude and longitude) (see [`GeoPoint`]) and
//! projections of those onto the map plane (see [`Projection`]).

mod point;
mod projection;
pub mod projections;

pub use point::{GeoPoint, GeoPoint2d, NewGeoPoint};
pub use projection::{project_all, Projection};
