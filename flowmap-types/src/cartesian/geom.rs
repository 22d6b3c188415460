use crate::cartesian::point::CartesianPoint2d;
use nalgebra::{Point2, Scalar};
use num_traits::{Float, FromPrimitive};

/// Arithmetic mean of a sequence of points.
///
/// Returns `None` on an empty sequence.
pub fn centroid<N, P>(points: impl IntoIterator<Item = P>) -> Option<Point2<N>>
where
    N: Float + Scalar + FromPrimitive,
    P: CartesianPoint2d<Num = N>,
{
    let mut x = N::zero();
    let mut y = N::zero();
    let mut count = 0usize;

    for point in points {
        x = x + point.x();
        y = y + point.y();
        count += 1;
    }

    let count = N::from_usize(count)?;
    if count.is_zero() {
        return None;
    }

    Some(Point2::new(x / count, y / count))
}
