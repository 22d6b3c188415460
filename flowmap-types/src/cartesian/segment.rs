use crate::cartesian::point::{CartesianPoint2d, CartesianPoint2dFloat};
use nalgebra::{Point2, Scalar};
use num_traits::Float;

/// A straight line segment between two points.
///
/// In a flow map a segment is usually a flow edge: the first point is the
/// origin of the flow, the second one its destination.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

impl<N: Float + Scalar, P: CartesianPoint2d<Num = N>> Segment<'_, P> {
    /// Returns true if the endpoints of the segment coincide.
    pub fn is_degenerate(&self) -> bool {
        self.0.equal(self.1)
    }

    /// Returns true if the segment is an edge that starts and ends at the same
    /// location.
    pub fn is_self_loop(&self) -> bool {
        self.is_degenerate()
    }

    /// Euclidian length of the segment.
    pub fn length(&self) -> N {
        self.0.distance(self.1)
    }

    /// Orthogonal projection of `point` onto the infinite line through the
    /// endpoints of the segment.
    ///
    /// The projected point is not clipped to the segment. Returns `None` if
    /// the endpoints coincide, as no single line passes through them.
    ///
    /// See <http://www.exaflop.org/docs/cgafaq/cga1.html>
    pub fn project_point<Point: CartesianPoint2d<Num = N>>(
        &self,
        point: &Point,
    ) -> Option<Point2<N>> {
        if self.is_degenerate() {
            return None;
        }

        let (x1, y1) = (self.0.x(), self.0.y());
        let (x2, y2) = (self.1.x(), self.1.y());
        let l_sq = self.0.distance_sq(self.1);
        let r = ((y1 - point.y()) * (y1 - y2) - (x1 - point.x()) * (x2 - x1)) / l_sq;

        Some(Point2::new(x1 + r * (x2 - x1), y1 + r * (y2 - y1)))
    }
}
