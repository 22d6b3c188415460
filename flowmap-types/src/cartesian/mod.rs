//! Types and functions on geometries in cartesian coordinates.

mod geom;
mod point;
mod segment;

pub use geom::centroid;
pub use point::{
    CartesianPoint2d, CartesianPoint2dFloat, NewCartesianPoint2d, Point2, Point2d, Vector2d,
};
pub use segment::Segment;
