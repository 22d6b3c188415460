//! Geometries and map projections for flow maps.
//!
//! Flow data connects geographic locations, but a map is drawn in planar
//! coordinates. This crate provides the types for both sides and the
//! conversions between them:
//!
//! * [`cartesian`] — points and segments in planar coordinates, and the
//!   geometric operations flow layout needs (interpolation, centroids,
//!   projecting a point onto a line);
//! * [`geo`] — points in geographic coordinates (latitude and longitude) and
//!   the [`Projection`](geo::Projection) implementations that lay them out
//!   on a flat map.
//!
//! All types here are plain values: nothing is mutated in place, and every
//! operation is a pure function of its inputs, so values can be freely shared
//! between threads.

pub mod cartesian;
pub mod geo;
