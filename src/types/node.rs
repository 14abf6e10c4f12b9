//! Types for handling nodes of an adaptive quadtree.
use crate::types::domain::Domain;
use crate::types::point::Point;
use crate::types::quadrant::Quadrant;
use crate::types::RealScalar;

/// Handle of a node inside the arena of a [QuadTree].
pub type NodeIndex = usize;

/// A node of an adaptive quadtree covering an axis-aligned rectangle of the domain.
/// A node either holds samples directly (leaf) or owns four live children (internal);
/// a split is permanent.
#[derive(Clone, Debug)]
pub struct QuadNode<T>
where
    T: RealScalar,
{
    /// Bounds of the rectangle covered by this node.
    pub bounds: Domain<T>,

    /// Handle of the parent node, `None` for the root.
    pub parent: Option<NodeIndex>,

    /// Position of this node relative to its parent, one direction bit per axis,
    /// `true` selecting the high side of the parent's midpoint.
    pub position: [bool; 2],

    /// Child handles when this node is internal, `None` while it is a leaf.
    pub children: Option<Quadrant<NodeIndex, 2>>,

    /// Global indices of the samples held by this leaf.
    pub samples: Vec<usize>,

    /// Aggregated gradient of the leaf, valid after a
    /// [compute_gradients](crate::types::node::QuadTree::compute_gradients) pass.
    pub gradient: [T; 2],

    /// Same-depth neighbor handles addressed by `[axis bit, direction bit]`, valid
    /// after a [compute_neighbors](crate::types::node::QuadTree::compute_neighbors)
    /// pass.
    pub neighbors: Quadrant<Vec<NodeIndex>, 2>,
}

/// An adaptive quadtree over borrowed oriented samples. Nodes live in an arena and
/// refer to each other by [NodeIndex] handles; the sample list outlives the tree.
#[derive(Debug)]
pub struct QuadTree<'a, T>
where
    T: RealScalar,
{
    /// Domain spanned by the tree.
    pub domain: Domain<T>,

    /// All samples, borrowed from the caller; nodes refer to entries by global index.
    pub points: &'a [Point<T>],

    /// Arena of nodes; the root lives in slot 0.
    pub nodes: Vec<QuadNode<T>>,

    /// Maximum splitting depth used during insertion.
    pub depth: u64,
}
