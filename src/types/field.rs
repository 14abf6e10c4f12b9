//! Dense gradient fields on a pixel grid.
use rlst::DynamicArray;

use crate::types::RealScalar;

/// A dense 2D vector field stored as two equal-size scalar grids, one per Cartesian
/// component, addressed by `[[row, col]]`. The grids act as accumulation buffers
/// during splatting and are read only thereafter.
pub struct GradientField<T>
where
    T: RealScalar,
{
    /// Number of pixel columns.
    pub width: usize,

    /// Number of pixel rows.
    pub height: usize,

    /// x component of the field.
    pub x: DynamicArray<T, 2>,

    /// y component of the field.
    pub y: DynamicArray<T, 2>,
}
