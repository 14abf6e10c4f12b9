//! Type declarations for quadrants, oriented samples, domains, quadtrees and dense
//! gradient fields.
pub mod domain;
pub mod error;
pub mod field;
pub mod node;
pub mod point;
pub mod quadrant;

use rlst::RlstScalar;

/// Scalar types usable as coordinate and field values.
pub trait RealScalar: num::Float + RlstScalar<Real = Self> {}

impl<T: num::Float + RlstScalar<Real = T>> RealScalar for T {}
