//! Constructors and geometric queries on rectangular domains.
use num::Float;

use crate::types::domain::Domain;
use crate::types::RealScalar;

impl<T: RealScalar> Domain<T> {
    /// Construct a domain from a user specified origin and diameter.
    pub fn new(origin: [T; 2], diameter: [T; 2]) -> Self {
        Domain { origin, diameter }
    }

    /// Compute the domain defined by a set of points. A small threshold is added so
    /// that no point lies on the actual edge of the domain.
    pub fn from_local_points(coordinates: &[[T; 2]]) -> Domain<T> {
        let err = T::from(1e-5).unwrap();
        let two = T::from(2.0).unwrap();

        let mut origin = [T::zero(); 2];
        let mut diameter = [T::zero(); 2];
        for axis in 0..2 {
            let min = coordinates
                .iter()
                .map(|c| c[axis])
                .min_by(|a, b| a.partial_cmp(b).unwrap())
                .unwrap_or_else(T::zero);
            let max = coordinates
                .iter()
                .map(|c| c[axis])
                .max_by(|a, b| a.partial_cmp(b).unwrap())
                .unwrap_or_else(T::zero);
            origin[axis] = min - err;
            diameter[axis] = (max - min) + two * err;
        }

        Domain { origin, diameter }
    }

    /// Midpoint of the domain.
    pub fn midpoint(&self) -> [T; 2] {
        let two = T::from(2.0).unwrap();
        [
            self.origin[0] + self.diameter[0] / two,
            self.origin[1] + self.diameter[1] / two,
        ]
    }

    /// The equal quadrant of this domain addressed by one bit per axis, `true`
    /// selecting the high side of the midpoint.
    pub fn quadrant(&self, index: [bool; 2]) -> Domain<T> {
        let two = T::from(2.0).unwrap();
        let half = [self.diameter[0] / two, self.diameter[1] / two];
        let mut origin = self.origin;
        for axis in 0..2 {
            if index[axis] {
                origin[axis] = origin[axis] + half[axis];
            }
        }
        Domain {
            origin,
            diameter: half,
        }
    }

    /// Check whether a point lies inside the half-open extent of the domain.
    pub fn contains(&self, point: &[T; 2]) -> bool {
        (0..2).all(|axis| {
            point[axis] >= self.origin[axis]
                && point[axis] < self.origin[axis] + self.diameter[axis]
        })
    }

    /// Check whether two domains touch or overlap along both axes.
    pub fn touches(&self, other: &Domain<T>) -> bool {
        (0..2).all(|axis| {
            self.origin[axis] <= other.origin[axis] + other.diameter[axis]
                && other.origin[axis] <= self.origin[axis] + self.diameter[axis]
        })
    }
}
