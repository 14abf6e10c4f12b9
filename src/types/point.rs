//! Data structures for oriented samples in 2D.
use crate::types::RealScalar;

/// A 2D oriented sample described by a Cartesian coordinate, a unit normal derived
/// from the local image gradient at a detected keypoint, and a unique global index.
/// Samples are produced by an external detector; the quadtree refers to them by
/// global index rather than copying them.
#[derive(Clone, Copy, Debug, Default)]
pub struct Point<T>
where
    T: RealScalar,
{
    /// Physical coordinate in Cartesian space.
    pub coordinate: [T; 2],

    /// Unit normal associated with the sample.
    pub normal: [T; 2],

    /// Global unique index.
    pub global_idx: usize,
}

/// Container of **Points**.
pub type Points<T> = Vec<Point<T>>;
