use crate::cartesian::{CartesianPoint2d, NewCartesianPoint2d};
use crate::geo::point::{GeoPoint, NewGeoPoint};
use crate::geo::projection::Projection;
use std::marker::PhantomData;

/// Projection that takes longitude and latitude as planar coordinates as they
/// are.
#[derive(Debug, Copy, Clone, Default)]
pub struct IdentityProjection<In, Out> {
    phantom_in: PhantomData<In>,
    phantom_out: PhantomData<Out>,
}

impl<In, Out> IdentityProjection<In, Out> {
    /// Creates a new instance.
    pub fn new() -> Self {
        Self {
            phantom_in: Default::default(),
            phantom_out: Default::default(),
        }
    }
}

impl<In: NewGeoPoint<f64>, Out: NewCartesianPoint2d<f64>> Projection
    for IdentityProjection<In, Out>
{
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        Some(Out::new(input.lon(), input.lat()))
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        Some(In::lonlat(input.x(), input.y()))
    }
}
