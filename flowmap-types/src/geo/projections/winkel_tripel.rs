use crate::cartesian::NewCartesianPoint2d;
use crate::geo::point::{GeoPoint, NewGeoPoint};
use crate::geo::projection::Projection;
use std::f64::consts::PI;
use std::marker::PhantomData;

// Cosine of the standard parallel φ₁ = acos(2/π).
const COS_PHI1: f64 = 2.0 / PI;

/// Winkel Tripel projection.
///
/// The arithmetic mean of the Aitoff projection and the equirectangular
/// projection with the standard parallel at `acos(2/π)`. The vertical axis is
/// inverted so that north is up in screen coordinates.
///
/// The inverse has no closed form, so [`Projection::unproject`] always
/// returns `None`.
#[derive(Debug, Copy, Clone, Default)]
pub struct WinkelTripelProjection<In, Out> {
    phantom_in: PhantomData<In>,
    phantom_out: PhantomData<Out>,
}

impl<In, Out> WinkelTripelProjection<In, Out> {
    /// Creates a new instance.
    pub fn new() -> Self {
        Self {
            phantom_in: Default::default(),
            phantom_out: Default::default(),
        }
    }
}

impl<In: NewGeoPoint<f64>, Out: NewCartesianPoint2d<f64>> Projection
    for WinkelTripelProjection<In, Out>
{
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        let lambda = input.lon_rad();
        let phi = input.lat_rad();

        let c = 0.5 * lambda;
        let cos_phi = phi.cos();
        let alpha = (cos_phi * c.cos()).acos();

        // sinc(α) has a removable singularity at α = 0, where both Aitoff
        // terms vanish.
        let (aitoff_x, aitoff_y) = if alpha != 0.0 {
            let sinc_alpha = alpha.sin() / alpha;
            (2.0 * cos_phi * c.sin() / sinc_alpha, phi.sin() / sinc_alpha)
        } else {
            (0.0, 0.0)
        };

        let x = (aitoff_x + lambda * COS_PHI1) * 0.5;
        let y = -(aitoff_y + phi) * 0.5;

        if x.is_finite() && y.is_finite() {
            Some(Out::new(x, y))
        } else {
            None
        }
    }

    fn unproject(&self, _input: &Self::OutPoint) -> Option<Self::InPoint> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2d;
    use crate::geo::GeoPoint2d;
    use crate::latlon;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn projection() -> WinkelTripelProjection<GeoPoint2d, Point2d> {
        WinkelTripelProjection::new()
    }

    #[test]
    fn origin_is_fixed() {
        assert_eq!(
            projection().project(&latlon!(0.0, 0.0)),
            Some(Point2d::new(0.0, 0.0))
        );
    }

    #[test]
    fn equator_scales_linearly() {
        // On the equator the Aitoff term reduces to λ, so x = λ(1 + cos φ₁)/2.
        for lon in [-180.0_f64, -90.0, 30.0, 90.0, 180.0] {
            let projected = projection().project(&latlon!(0.0, lon)).expect("projected point");
            assert_relative_eq!(
                projected.x,
                lon.to_radians() * (1.0 + COS_PHI1) / 2.0,
                epsilon = 1e-12
            );
            assert_abs_diff_eq!(projected.y, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn central_meridian_keeps_latitude() {
        // On the central meridian both terms reduce to φ, inverted for screen
        // coordinates.
        for lat in [-90.0_f64, -60.0, 10.0, 45.0, 90.0] {
            let projected = projection().project(&latlon!(lat, 0.0)).expect("projected point");
            assert_abs_diff_eq!(projected.x, 0.0, epsilon = 1e-12);
            assert_relative_eq!(projected.y, -lat.to_radians(), epsilon = 1e-12);
        }
    }

    #[test]
    fn northern_latitudes_map_upwards() {
        let projected = projection().project(&latlon!(50.0, 20.0)).expect("projected point");
        assert!(projected.y < 0.0);
        let mirrored = projection().project(&latlon!(-50.0, 20.0)).expect("projected point");
        assert_relative_eq!(projected.y, -mirrored.y, epsilon = 1e-12);
        assert_relative_eq!(projected.x, mirrored.x, epsilon = 1e-12);
    }

    #[test]
    fn no_inverse() {
        assert_eq!(projection().unproject(&Point2d::new(0.0, 0.0)), None);
    }
}
