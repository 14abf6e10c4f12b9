//! # 2D Poisson Field Reconstruction
//!
//! Reconstructs a continuous 2D vector/scalar field from a sparse set of oriented
//! point samples, as produced by a keypoint detector on image gradients. Two paths
//! solve the same problem at different resolution/performance tradeoffs: an adaptive
//! quadtree that aggregates samples at variable resolution and answers same-depth
//! neighbor queries without stored adjacency pointers, and a dense path that splats
//! samples into a pixel grid and recovers a scalar potential by iterative relaxation
//! of a Poisson-type equation.
//!
//! ## References
//! \[1\] Kazhdan, Michael, Matthew Bolitho, and Hugues Hoppe. "Poisson surface
//! reconstruction." Proceedings of the fourth Eurographics symposium on Geometry
//! processing (2006).
//!
//! \[2\] Samet, Hanan. "Neighbor finding techniques for images represented by
//! quadtrees." Computer Graphics and Image Processing 18.1 (1982): 37-57.
#![cfg_attr(feature = "strict", deny(warnings))]
#![warn(missing_docs)]

pub mod constants;
pub mod implementations;
pub mod traits;
pub mod types;
