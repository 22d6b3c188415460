//! Implementations of the supported map projections.

mod flip_y;
mod identity;
mod mercator;
mod winkel_tripel;

pub use flip_y::FlipYProjection;
pub use identity::IdentityProjection;
pub use mercator::MercatorProjection;
pub use winkel_tripel::WinkelTripelProjection;

use crate::cartesian::NewCartesianPoint2d;
use crate::geo::point::NewGeoPoint;
use crate::geo::projection::Projection;
use serde::{Deserialize, Serialize};

/// The projection a map view lays its geography out with.
///
/// A view selects one of these when it is configured and uses the same
/// projection for every point it displays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum MapProjection {
    /// Longitude and latitude are taken as planar coordinates directly.
    #[default]
    None,
    /// Like [`MapProjection::None`], but with the vertical axis mirrored.
    FlipY,
    /// Spherical Mercator, clamped near the poles.
    Mercator,
    /// Winkel Tripel.
    WinkelTripel,
}

impl MapProjection {
    /// Returns the projection implementation for this variant.
    pub fn projection<In, Out>(&self) -> Box<dyn Projection<InPoint = In, OutPoint = Out>>
    where
        In: NewGeoPoint + 'static,
        Out: NewCartesianPoint2d + 'static,
    {
        match self {
            MapProjection::None => Box::new(IdentityProjection::new()),
            MapProjection::FlipY => Box::new(FlipYProjection::new()),
            MapProjection::Mercator => Box::new(MercatorProjection::new()),
            MapProjection::WinkelTripel => Box::new(WinkelTripelProjection::new()),
        }
    }
}
