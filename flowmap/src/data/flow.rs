use crate::data::seq_stat::SeqStat;
use flowmap_types::cartesian::{CartesianPoint2dFloat, Point2d};
use flowmap_types::geo::{GeoPoint2d, Projection};
use serde::{Deserialize, Serialize};

/// A weighted flow between two geographic locations.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Flow {
    /// Location the flow originates from.
    pub origin: GeoPoint2d,
    /// Location the flow goes to.
    pub dest: GeoPoint2d,
    /// Magnitude of the flow.
    pub weight: f64,
}

impl Flow {
    /// Creates a new flow.
    pub fn new(origin: GeoPoint2d, dest: GeoPoint2d, weight: f64) -> Self {
        Self {
            origin,
            dest,
            weight,
        }
    }

    /// Returns true if the flow starts and ends at the same location.
    pub fn is_self_loop(&self) -> bool {
        self.origin == self.dest
    }
}

/// Statistics over the weights of a set of flows.
pub fn weight_stats<'a>(flows: impl IntoIterator<Item = &'a Flow>) -> SeqStat {
    SeqStat::create_for(flows.into_iter().map(|flow| flow.weight))
}

/// Statistics over the projected lengths of a set of flows.
///
/// Each flow's endpoints are projected with the given projection and the
/// euclidian distance between them is measured on the map plane. Flows with
/// an endpoint the projection is not defined for are skipped.
pub fn length_stats<'a, P>(flows: impl IntoIterator<Item = &'a Flow>, projection: &P) -> SeqStat
where
    P: Projection<InPoint = GeoPoint2d, OutPoint = Point2d> + ?Sized,
{
    SeqStat::create_for(flows.into_iter().filter_map(|flow| {
        let origin = projection.project(&flow.origin)?;
        let dest = projection.project(&flow.dest)?;
        Some(origin.distance(&dest))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowmap_types::geo::projections::MapProjection;
    use flowmap_types::latlon;
    use approx::assert_relative_eq;

    #[test]
    fn self_loop() {
        let basel = latlon!(47.56, 7.59);
        let berlin = latlon!(52.52, 13.40);
        assert!(Flow::new(basel, basel, 10.0).is_self_loop());
        assert!(!Flow::new(basel, berlin, 10.0).is_self_loop());
    }

    #[test]
    fn weight_stats_over_flows() {
        let a = latlon!(0.0, 0.0);
        let b = latlon!(10.0, 10.0);
        let flows = vec![
            Flow::new(a, b, 100.0),
            Flow::new(b, a, 250.0),
            Flow::new(a, a, 10.0),
        ];

        let stats = weight_stats(&flows);
        assert_eq!(stats.min(), 10.0);
        assert_eq!(stats.max(), 250.0);
        assert_eq!(stats.count(), 3);
        assert_relative_eq!(stats.avg(), 120.0);
    }

    #[test]
    fn length_stats_on_identity_projection() {
        let flows = vec![
            Flow::new(latlon!(0.0, 0.0), latlon!(4.0, 3.0), 1.0),
            Flow::new(latlon!(1.0, 1.0), latlon!(1.0, 1.0), 1.0),
        ];

        let projection = MapProjection::None.projection::<GeoPoint2d, Point2d>();
        let stats = length_stats(&flows, &*projection);
        assert_eq!(stats.min(), 0.0);
        assert_eq!(stats.max(), 5.0);
        assert_eq!(stats.count(), 2);
    }
}
