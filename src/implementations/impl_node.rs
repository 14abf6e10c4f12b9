//! Construction, gradient aggregation and neighbor discovery on adaptive quadtrees.
use itertools::Itertools;
use log::{debug, warn};

use crate::traits::Tree;
use crate::types::domain::Domain;
use crate::types::node::{NodeIndex, QuadNode, QuadTree};
use crate::types::point::Point;
use crate::types::quadrant::Quadrant;
use crate::types::RealScalar;

/// Handle of the root node in the arena.
pub const ROOT: NodeIndex = 0;

impl<T: RealScalar> QuadNode<T> {
    fn new(bounds: Domain<T>, parent: Option<NodeIndex>, position: [bool; 2]) -> Self {
        QuadNode {
            bounds,
            parent,
            position,
            children: None,
            samples: Vec::new(),
            gradient: [T::zero(); 2],
            neighbors: Quadrant::new(),
        }
    }

    /// Whether this node holds samples directly rather than children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

impl<'a, T: RealScalar> QuadTree<'a, T> {
    /// Create a tree holding only an empty root leaf over the given domain.
    pub fn new(points: &'a [Point<T>], domain: Domain<T>, depth: u64) -> Self {
        let root = QuadNode::new(domain, None, [false, false]);
        QuadTree {
            domain,
            points,
            nodes: vec![root],
            depth,
        }
    }

    /// Build a tree from an entire detector output. Samples outside the domain are
    /// discarded with a warning.
    pub fn from_points(points: &'a [Point<T>], domain: Domain<T>, depth: u64) -> Self {
        let mut tree = Self::new(points, domain, depth);
        for point in points.iter() {
            if !domain.contains(&point.coordinate) {
                warn!("discarding out-of-domain sample {}", point.global_idx);
                continue;
            }
            tree.insert(ROOT, point.global_idx, depth);
        }
        debug!(
            "built quadtree with {} nodes over {} points",
            tree.nodes.len(),
            points.len()
        );
        tree
    }

    /// Insert one sample into the subtree rooted at `node`, with `depth_left` splits
    /// remaining below it. A leaf absorbs its first sample unconditionally; a second
    /// arrival forces a split into four equal quadrants and a re-insertion of every
    /// held sample, unless the depth budget is exhausted, in which case the leaf
    /// accumulates.
    pub fn insert(&mut self, node: NodeIndex, point_idx: usize, depth_left: u64) {
        if depth_left == 0 || (self.nodes[node].is_leaf() && self.nodes[node].samples.is_empty())
        {
            self.nodes[node].samples.push(point_idx);
            return;
        }

        if self.nodes[node].is_leaf() {
            self.split(node);
        }

        self.nodes[node].samples.push(point_idx);
        let held = std::mem::take(&mut self.nodes[node].samples);
        let midpoint = self.nodes[node].bounds.midpoint();
        for idx in held {
            let c = self.points[idx].coordinate;
            // samples exactly on a midpoint resolve to the high-side child
            let key = [c[0] >= midpoint[0], c[1] >= midpoint[1]];
            let child = *self.nodes[node].children.as_ref().unwrap().get(&key);
            self.insert(child, idx, depth_left - 1);
        }
    }

    fn split(&mut self, node: NodeIndex) {
        let bounds = self.nodes[node].bounds;
        let mut handles = Vec::with_capacity(4);
        for position in [[false, false], [true, false], [false, true], [true, true]] {
            handles.push(self.nodes.len());
            self.nodes
                .push(QuadNode::new(bounds.quadrant(position), Some(node), position));
        }
        self.nodes[node].children = Some(Quadrant { values: handles });
    }

    /// Aggregate each leaf's gradient as the sum of its member normals divided by
    /// cell area and sample count, so that sparse, large leaves do not dominate.
    /// Empty leaves and internal nodes carry the zero vector.
    pub fn compute_gradients(&mut self) {
        let points = self.points;
        for node in self.nodes.iter_mut() {
            if !node.is_leaf() || node.samples.is_empty() {
                node.gradient = [T::zero(); 2];
                continue;
            }
            let mut gradient = [T::zero(); 2];
            for &idx in node.samples.iter() {
                gradient[0] = gradient[0] + points[idx].normal[0];
                gradient[1] = gradient[1] + points[idx].normal[1];
            }
            let count = T::from(node.samples.len()).unwrap();
            let factor = node.bounds.diameter[0] * node.bounds.diameter[1] * count;
            node.gradient = [gradient[0] / factor, gradient[1] / factor];
        }
    }

    /// Same-depth neighbors of `node` across its face on `axis` (0 for x, 1 for y) in
    /// `direction` (`true` toward increasing coordinates). Found by ancestor
    /// retracing: ascend while the node sits on the side of its parent facing the
    /// query, recording the path, then descend the sibling subtree mirroring that
    /// path. Returns the empty set at the tree boundary.
    pub fn neighbors(&self, node: NodeIndex, axis: usize, direction: bool) -> Vec<NodeIndex> {
        let mut path: Vec<[bool; 2]> = Vec::new();
        let mut current = node;
        loop {
            let parent = match self.nodes[current].parent {
                Some(parent) => parent,
                // border of the tree, no neighbors
                None => return Vec::new(),
            };
            let position = self.nodes[current].position;
            if position[axis] == direction {
                // facing a wall of the parent, go up
                path.push(position);
                current = parent;
            } else {
                let mut target = position;
                target[axis] = direction;
                let sibling = *self.nodes[parent].children.as_ref().unwrap().get(&target);
                return self.collect_boundary_leaves(sibling, axis, !direction, &mut path);
            }
        }
    }

    /// Collect the leaves on the `direction` face of `axis` within the subtree rooted
    /// at `node`. A non-empty path retraces an ascent, so the returned leaves are
    /// depth matched to the original query rather than the whole opposing face.
    fn collect_boundary_leaves(
        &self,
        node: NodeIndex,
        axis: usize,
        direction: bool,
        path: &mut Vec<[bool; 2]>,
    ) -> Vec<NodeIndex> {
        let children = match self.nodes[node].children.as_ref() {
            Some(children) => children,
            None => return vec![node],
        };
        match path.pop() {
            None => {
                // whole boundary face: both children on the query side, the other
                // axis varying freely
                let mut low = [false; 2];
                low[axis] = direction;
                let mut high = [true; 2];
                high[axis] = direction;
                let mut leaves =
                    self.collect_boundary_leaves(*children.get(&low), axis, direction, path);
                leaves.extend(self.collect_boundary_leaves(
                    *children.get(&high),
                    axis,
                    direction,
                    path,
                ));
                leaves
            }
            Some(mut step) => {
                step[axis] = direction;
                self.collect_boundary_leaves(*children.get(&step), axis, direction, path)
            }
        }
    }

    /// Fill every leaf's four directional neighbor sets.
    pub fn compute_neighbors(&mut self) {
        for leaf in self.leaves() {
            for axis in 0..2 {
                for direction in [false, true] {
                    let found = self.neighbors(leaf, axis, direction);
                    self.nodes[leaf].neighbors.set(&[axis == 1, direction], found);
                }
            }
        }
    }

    /// Handles of all leaves in the tree.
    pub fn leaves(&self) -> Vec<NodeIndex> {
        (0..self.nodes.len())
            .filter(|&node| self.nodes[node].is_leaf())
            .collect_vec()
    }

    /// Handles of all leaves currently holding at least one sample.
    pub fn nonempty_leaves(&self) -> Vec<NodeIndex> {
        self.leaves()
            .into_iter()
            .filter(|&node| !self.nodes[node].samples.is_empty())
            .collect_vec()
    }
}

impl<'a, T: RealScalar> Tree for QuadTree<'a, T> {
    type Precision = T;
    type NodeIndex = NodeIndex;

    fn get_depth(&self) -> u64 {
        self.depth
    }

    fn get_domain(&self) -> &Domain<T> {
        &self.domain
    }

    fn get_leaves(&self) -> Vec<NodeIndex> {
        self.leaves()
    }

    fn map_point_to_leaf(&self, point: &[T; 2]) -> Option<NodeIndex> {
        if !self.domain.contains(point) {
            return None;
        }
        let mut current = ROOT;
        while let Some(children) = self.nodes[current].children.as_ref() {
            let midpoint = self.nodes[current].bounds.midpoint();
            let key = [point[0] >= midpoint[0], point[1] >= midpoint[1]];
            current = *children.get(&key);
        }
        Some(current)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::implementations::helpers::points_fixture;

    fn unit_domain() -> Domain<f64> {
        Domain::new([0.0, 0.0], [1.0, 1.0])
    }

    #[test]
    fn test_first_sample_is_absorbed() {
        let points = points_fixture::<f64>(1, None, None);
        let mut tree = QuadTree::new(&points, unit_domain(), 5);
        tree.insert(ROOT, 0, 5);
        assert!(tree.nodes[ROOT].is_leaf());
        assert_eq!(tree.nodes[ROOT].samples.len(), 1);
    }

    #[test]
    fn test_second_sample_forces_split() {
        let points = vec![
            Point::new([0.25, 0.25], [1.0, 0.0], 0),
            Point::new([0.75, 0.75], [0.0, 1.0], 1),
        ];
        let mut tree = QuadTree::new(&points, unit_domain(), 5);
        tree.insert(ROOT, 0, 5);
        tree.insert(ROOT, 1, 5);
        assert!(!tree.nodes[ROOT].is_leaf());
        assert!(tree.nodes[ROOT].samples.is_empty());
        assert_eq!(tree.nodes.len(), 5);
    }

    #[test]
    fn test_exhausted_budget_never_splits() {
        let points = points_fixture::<f64>(50, None, None);
        let tree = QuadTree::from_points(&points, unit_domain(), 0);
        assert_eq!(tree.nodes.len(), 1);
        assert!(tree.nodes[ROOT].is_leaf());
        assert_eq!(tree.nodes[ROOT].samples.len(), 50);
    }

    #[test]
    fn test_every_sample_reaches_exactly_one_leaf() {
        let npoints = 200;
        let points = points_fixture::<f64>(npoints, None, None);
        let tree = QuadTree::from_points(&points, unit_domain(), 5);

        let mut seen = vec![0usize; npoints];
        for node in tree.nodes.iter() {
            if node.is_leaf() {
                for &idx in node.samples.iter() {
                    seen[idx] += 1;
                }
            } else {
                assert!(node.samples.is_empty());
            }
        }
        assert!(seen.iter().all(|&count| count == 1));
    }

    #[test]
    fn test_leaf_bounds_contain_their_samples() {
        let points = points_fixture::<f64>(100, Some(0.0), Some(1.0));
        let tree = QuadTree::from_points(&points, unit_domain(), 4);
        for &leaf in tree.nonempty_leaves().iter() {
            for &idx in tree.nodes[leaf].samples.iter() {
                assert!(tree.nodes[leaf].bounds.contains(&points[idx].coordinate));
            }
        }
    }

    #[test]
    fn test_midpoint_sample_goes_to_high_side() {
        let points = vec![
            Point::new([0.5, 0.5], [1.0, 0.0], 0),
            Point::new([0.1, 0.1], [1.0, 0.0], 1),
        ];
        let tree = QuadTree::from_points(&points, unit_domain(), 3);
        let leaf = tree.map_point_to_leaf(&[0.5, 0.5]).unwrap();
        assert!(tree.nodes[leaf].samples.contains(&0));
        assert!(tree.nodes[leaf].bounds.origin[0] >= 0.5);
        assert!(tree.nodes[leaf].bounds.origin[1] >= 0.5);
    }

    #[test]
    fn test_empty_point_set_and_zero_domain() {
        let points: Vec<Point<f64>> = Vec::new();
        let tree = QuadTree::from_points(&points, Domain::new([0.0, 0.0], [0.0, 0.0]), 5);
        assert_eq!(tree.nonempty_leaves().len(), 0);
    }

    #[test]
    fn test_root_has_no_neighbors() {
        let points = points_fixture::<f64>(1, None, None);
        let tree = QuadTree::from_points(&points, unit_domain(), 5);
        for axis in 0..2 {
            for direction in [false, true] {
                assert!(tree.neighbors(ROOT, axis, direction).is_empty());
            }
        }
    }

    #[test]
    fn test_sibling_leaves_are_mutual_neighbors() {
        let points = vec![
            Point::new([0.25, 0.25], [1.0, 0.0], 0),
            Point::new([0.75, 0.25], [1.0, 0.0], 1),
        ];
        let tree = QuadTree::from_points(&points, unit_domain(), 1);
        let left = tree.map_point_to_leaf(&[0.25, 0.25]).unwrap();
        let right = tree.map_point_to_leaf(&[0.75, 0.25]).unwrap();
        assert_ne!(left, right);
        assert!(tree.neighbors(left, 0, true).contains(&right));
        assert!(tree.neighbors(right, 0, false).contains(&left));
    }

    #[test]
    fn test_boundary_leaf_outward_query_is_empty() {
        let points = vec![
            Point::new([0.25, 0.25], [1.0, 0.0], 0),
            Point::new([0.75, 0.75], [1.0, 0.0], 1),
        ];
        let tree = QuadTree::from_points(&points, unit_domain(), 1);
        let lower_left = tree.map_point_to_leaf(&[0.25, 0.25]).unwrap();
        assert!(tree.neighbors(lower_left, 0, false).is_empty());
        assert!(tree.neighbors(lower_left, 1, false).is_empty());
    }

    #[test]
    fn test_neighbors_are_adjacent_leaves() {
        let points = points_fixture::<f64>(60, Some(0.0), Some(1.0));
        let mut tree = QuadTree::from_points(&points, unit_domain(), 5);
        tree.compute_neighbors();

        for &leaf in tree.leaves().iter() {
            for axis in 0..2 {
                for direction in [false, true] {
                    let found = tree.nodes[leaf].neighbors.get(&[axis == 1, direction]);
                    for &other in found.iter() {
                        assert!(tree.nodes[other].is_leaf());
                        assert!(tree.nodes[leaf].bounds.touches(&tree.nodes[other].bounds));
                    }
                    // no duplicates
                    let unique = found.iter().unique().count();
                    assert_eq!(unique, found.len());
                }
            }
        }
    }

    #[test]
    fn test_gradient_aggregation_normalises_by_area_and_count() {
        let points = vec![
            Point::new([0.25, 0.25], [1.0, 0.0], 0),
            Point::new([0.75, 0.75], [0.0, 1.0], 1),
        ];
        let mut tree = QuadTree::from_points(&points, unit_domain(), 1);
        tree.compute_gradients();

        let leaf = tree.map_point_to_leaf(&[0.25, 0.25]).unwrap();
        let area = 0.25;
        assert!((tree.nodes[leaf].gradient[0] - 1.0 / area).abs() < 1e-12);
        assert!((tree.nodes[leaf].gradient[1]).abs() < 1e-12);

        // empty leaves aggregate to zero
        let empty = tree.map_point_to_leaf(&[0.75, 0.25]).unwrap();
        assert_eq!(tree.nodes[empty].gradient, [0.0, 0.0]);
    }
}
