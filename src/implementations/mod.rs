//! Implementations of quadrant addressing, domain geometry, quadtree construction and
//! the dense reconstruction path.
pub mod helpers;
pub mod impl_domain;
pub mod impl_field;
pub mod impl_node;
pub mod impl_point;
pub mod impl_quadrant;
