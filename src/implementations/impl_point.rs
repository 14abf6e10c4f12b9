//! Constructors for oriented samples.
use num::Float;

use crate::types::point::Point;
use crate::types::RealScalar;

impl<T: RealScalar> Point<T> {
    /// Create a sample from a coordinate and an unnormalised gradient direction; the
    /// direction is scaled to unit length. A zero direction is kept as-is.
    pub fn new(coordinate: [T; 2], direction: [T; 2], global_idx: usize) -> Self {
        let norm = Float::sqrt(direction[0] * direction[0] + direction[1] * direction[1]);
        let normal = if norm > T::zero() {
            [direction[0] / norm, direction[1] / norm]
        } else {
            direction
        };
        Point {
            coordinate,
            normal,
            global_idx,
        }
    }
}
