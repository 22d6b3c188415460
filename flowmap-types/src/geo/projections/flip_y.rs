use crate::cartesian::{CartesianPoint2d, NewCartesianPoint2d};
use crate::geo::point::{GeoPoint, NewGeoPoint};
use crate::geo::projection::Projection;
use std::marker::PhantomData;

/// Projection that takes longitude and latitude as planar coordinates with
/// the vertical axis mirrored.
///
/// Screen coordinates grow downwards, so mirroring the latitude keeps north
/// at the top of the map.
#[derive(Debug, Copy, Clone, Default)]
pub struct FlipYProjection<In, Out> {
    phantom_in: PhantomData<In>,
    phantom_out: PhantomData<Out>,
}

impl<In, Out> FlipYProjection<In, Out> {
    /// Creates a new instance.
    pub fn new() -> Self {
        Self {
            phantom_in: Default::default(),
            phantom_out: Default::default(),
        }
    }
}

impl<In: NewGeoPoint<f64>, Out: NewCartesianPoint2d<f64>> Projection for FlipYProjection<In, Out> {
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        Some(Out::new(input.lon(), -input.lat()))
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        Some(In::lonlat(input.x(), -input.y()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2d;
    use crate::geo::GeoPoint2d;
    use crate::latlon;

    #[test]
    fn mirrors_latitude() {
        let projection = FlipYProjection::<GeoPoint2d, Point2d>::new();
        assert_eq!(
            projection.project(&latlon!(38.0, 52.0)),
            Some(Point2d::new(52.0, -38.0))
        );
        assert_eq!(
            projection.project(&latlon!(-38.0, 52.0)),
            Some(Point2d::new(52.0, 38.0))
        );
        assert_eq!(
            projection.project(&latlon!(0.0, 0.0)),
            Some(Point2d::new(0.0, 0.0))
        );
    }

    #[test]
    fn round_trip() {
        let projection = FlipYProjection::<GeoPoint2d, Point2d>::new();
        let point = latlon!(-45.0, 137.5);
        let projected = projection.project(&point).expect("projected point");
        assert_eq!(projection.unproject(&projected), Some(point));
    }
}
