pub use nalgebra::Point2;
use nalgebra::{Scalar, Vector2};
use num_traits::{Bounded, Float, FromPrimitive, Num};

/// 2d point in planar map coordinates.
pub type Point2d = Point2<f64>;
/// 2d vector in planar map coordinates.
pub type Vector2d = Vector2<f64>;

/// Generic 2d point in cartesian coordinate space.
pub trait CartesianPoint2d {
    /// Numeric type used to represent coordinates.
    type Num: Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive;

    /// X coordinate.
    fn x(&self) -> Self::Num;
    /// Y coordinate.
    fn y(&self) -> Self::Num;

    /// Returns true if both coordinates of the points are equal.
    fn equal(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        self.x() == other.x() && self.y() == other.y()
    }

    /// Vector pointing from `other` to `self`.
    fn sub(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Vector2<Self::Num> {
        Vector2::new(self.x() - other.x(), self.y() - other.y())
    }

    /// Squared euclidian distance between the points.
    fn distance_sq(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Self::Num {
        let v = self.sub(other);
        v.x * v.x + v.y * v.y
    }
}

/// A point that can be constructed from a pair of coordinates.
pub trait NewCartesianPoint2d<Num = f64>: CartesianPoint2d<Num = Num> {
    /// Creates a new point with the given coordinates.
    fn new(x: Num, y: Num) -> Self;
}

/// Operations on cartesian points defined only for floating point coordinates.
pub trait CartesianPoint2dFloat<N: Float + Scalar = f64>: CartesianPoint2d<Num = N> {
    /// Euclidian distance between the points.
    fn distance(&self, other: &impl CartesianPoint2d<Num = N>) -> N {
        self.distance_sq(other).sqrt()
    }

    /// Point at the parametric position `alpha` on the line from `self` to `other`.
    ///
    /// `alpha == 0.0` gives `self`, `alpha == 1.0` gives `other`. Values outside
    /// of `[0.0, 1.0]` extrapolate along the same line and are not rejected.
    fn between(&self, other: &impl CartesianPoint2d<Num = N>, alpha: N) -> Point2<N> {
        Point2::new(
            self.x() + (other.x() - self.x()) * alpha,
            self.y() + (other.y() - self.y()) * alpha,
        )
    }

    /// Point halfway between `self` and `other`.
    fn midpoint(&self, other: &impl CartesianPoint2d<Num = N>) -> Point2<N> {
        self.between(other, (N::one() + N::one()).recip())
    }
}

impl<N: Float + Scalar, T: CartesianPoint2d<Num = N>> CartesianPoint2dFloat<N> for T {}

impl<Num: num_traits::Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive> CartesianPoint2d
    for Point2<Num>
{
    type Num = Num;

    fn x(&self) -> Num {
        self.x
    }
    fn y(&self) -> Num {
        self.y
    }
}

impl<Num: num_traits::Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive>
    NewCartesianPoint2d<Num> for Point2<Num>
{
    fn new(x: Num, y: Num) -> Self {
        Point2::new(x, y)
    }
}
