//! Trait for the tree surface consumed by downstream renderers and field samplers.
use crate::types::domain::Domain;
use crate::types::RealScalar;

/// Read access to a spatial tree over a rectangular domain.
pub trait Tree {
    /// Scalar type of the tree's coordinates.
    type Precision: RealScalar;

    /// Handle type used to refer to tree nodes.
    type NodeIndex;

    /// Get the maximum splitting depth.
    fn get_depth(&self) -> u64;

    /// Get the domain spanned by the tree.
    fn get_domain(&self) -> &Domain<Self::Precision>;

    /// Get handles of all leaves.
    fn get_leaves(&self) -> Vec<Self::NodeIndex>;

    /// Get the leaf containing a given point, if it lies inside the domain.
    fn map_point_to_leaf(&self, point: &[Self::Precision; 2]) -> Option<Self::NodeIndex>;
}
