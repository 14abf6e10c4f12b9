//! Crate level constants.

/// Default maximum splitting depth of an adaptive quadtree.
pub const DEFAULT_DEPTH: u64 = 5;

/// Number of relaxation iterations run by the Poisson solver.
pub const RELAXATION_ITERATIONS: usize = 1000;

/// Width in pixels of the Gaussian window used during relaxation.
pub const BLUR_WIDTH: usize = 7;

/// Standard deviation of the Gaussian window used during relaxation.
pub const BLUR_SIGMA: f64 = 3.0;

/// Value imposed on every border pixel after each relaxation step.
pub const BOUNDARY_VALUE: f64 = 1.0;
