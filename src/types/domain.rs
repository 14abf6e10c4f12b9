//! Data structures for defining the computational domain.
use crate::types::RealScalar;

/// A rectangular domain defined by an origin coordinate and its diameter along both
/// Cartesian axes.
#[derive(Clone, Copy, Debug, Default)]
pub struct Domain<T>
where
    T: RealScalar,
{
    /// The lower left corner of the domain.
    pub origin: [T; 2],

    /// The diameter of the domain along the [x, y] axes respectively.
    pub diameter: [T; 2],
}
