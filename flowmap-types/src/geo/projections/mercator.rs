use crate::cartesian::{CartesianPoint2d, NewCartesianPoint2d};
use crate::geo::point::{GeoPoint, NewGeoPoint};
use crate::geo::projection::Projection;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use std::marker::PhantomData;

// If the scale is smaller than 100 short edges will not be visible.
const SCALE: f64 = 100.0;

// Latitudes closer to the poles map to the clamp value to avoid divergence
// of the Mercator formula.
const MAX_LAT: f64 = 85.0;

/// Spherical Mercator projection scaled to `x ∈ [-100, 100]`.
///
/// The vertical axis is inverted so that north is up in screen coordinates
/// (which grow downwards). Latitudes beyond ±85° are clamped to the top and
/// bottom edge of the map.
#[derive(Debug, Copy, Clone, Default)]
pub struct MercatorProjection<In, Out> {
    phantom_in: PhantomData<In>,
    phantom_out: PhantomData<Out>,
}

impl<In, Out> MercatorProjection<In, Out> {
    /// Creates a new instance.
    pub fn new() -> Self {
        Self {
            phantom_in: Default::default(),
            phantom_out: Default::default(),
        }
    }
}

impl<In: NewGeoPoint<f64>, Out: NewCartesianPoint2d<f64>> Projection
    for MercatorProjection<In, Out>
{
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        let x = SCALE * input.lon() / 180.0;
        let y_unit = if input.lat() >= MAX_LAT {
            1.0
        } else if input.lat() <= -MAX_LAT {
            -1.0
        } else {
            (FRAC_PI_4 + input.lat_rad() / 2.0).tan().ln() / PI
        };
        let y = -SCALE * y_unit;

        if x.is_finite() && y.is_finite() {
            Some(Out::new(x, y))
        } else {
            None
        }
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        let lon = input.x() * 180.0 / SCALE;
        let lat = (2.0 * (-input.y() * PI / SCALE).exp().atan() - FRAC_PI_2).to_degrees();

        if lon.is_finite() && lat.is_finite() {
            Some(In::lonlat(lon, lat))
        } else {
            None
        }
    }
}
