/// Conversion between two coordinate systems.
///
/// A projection is stateless and deterministic: it is chosen once per map
/// view and then reused for every point that view displays.
pub trait Projection {
    /// Type of the input points.
    type InPoint;
    /// Type of the output points.
    type OutPoint;

    /// Converts a point from the input coordinate system into the output one.
    ///
    /// Returns `None` if the projection is not defined for the input point.
    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;

    /// Converts a point from the output coordinate system back into the input
    /// one.
    ///
    /// Returns `None` if the inverse is not defined for the input point.
    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint>;
}

/// Lazily projects every point of a sequence.
///
/// The returned iterator yields exactly one item per input point, in the
/// input order, with `None` standing in for points the projection is not
/// defined for. Points are projected one by one as the iterator is advanced,
/// so arbitrarily large (even unbounded) inputs can be streamed through.
pub fn project_all<'a, P, I>(
    points: I,
    projection: &'a P,
) -> impl Iterator<Item = Option<P::OutPoint>> + 'a
where
    P: Projection + ?Sized,
    I: IntoIterator<Item = P::InPoint>,
    I::IntoIter: 'a,
{
    points.into_iter().map(move |point| projection.project(&point))
}
