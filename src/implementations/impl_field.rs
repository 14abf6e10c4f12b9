//! Dense splat reconstruction, divergence and Poisson relaxation.
use itertools::Itertools;
use log::debug;
use num::Float;
use rlst::{rlst_dynamic_array2, DynamicArray, RandomAccessMut, Shape};

use crate::constants::{BLUR_SIGMA, BLUR_WIDTH, BOUNDARY_VALUE, RELAXATION_ITERATIONS};
use crate::types::error::{Error, Result};
use crate::types::field::GradientField;
use crate::types::point::Point;
use crate::types::RealScalar;

/// Reflect an out-of-range index back into `[0, len)` without repeating the border
/// sample (OpenCV's reflect-101 rule).
fn mirror(index: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let len = len as isize;
    let mut i = index;
    while i < 0 || i >= len {
        if i < 0 {
            i = -i;
        }
        if i >= len {
            i = 2 * (len - 1) - i;
        }
    }
    i as usize
}

/// Apply a 3x3 Sobel derivative along `axis` (0 for x, 1 for y) with reflect-101
/// borders, accumulating into `dst`.
fn sobel_into<T: RealScalar>(src: &DynamicArray<T, 2>, axis: usize, dst: &mut DynamicArray<T, 2>) {
    let [height, width] = src.shape();
    let two = T::from(2.0).unwrap();
    let smooth = [T::one(), two, T::one()];
    let deriv = [-T::one(), T::zero(), T::one()];
    for row in 0..height {
        for col in 0..width {
            let mut value = T::zero();
            for (dr, &wr) in (-1isize..=1).zip(if axis == 1 { &deriv } else { &smooth }) {
                for (dc, &wc) in (-1isize..=1).zip(if axis == 0 { &deriv } else { &smooth }) {
                    let r = mirror(row as isize + dr, height);
                    let c = mirror(col as isize + dc, width);
                    value += wr * wc * src[[r, c]];
                }
            }
            *dst.get_mut([row, col]).unwrap() += value;
        }
    }
}

/// Normalised 1D Gaussian taps for a window of `width` samples.
fn gaussian_kernel<T: RealScalar>(width: usize, sigma: T) -> Vec<T> {
    let two = T::from(2.0).unwrap();
    let center = T::from((width - 1) as f64 / 2.0).unwrap();
    let mut taps = (0..width)
        .map(|i| {
            let d = T::from(i).unwrap() - center;
            Float::exp(-(d * d) / (two * sigma * sigma))
        })
        .collect_vec();
    let total = taps.iter().fold(T::zero(), |acc, &tap| acc + tap);
    for tap in taps.iter_mut() {
        *tap /= total;
    }
    taps
}

/// Separable Gaussian blur with reflect-101 borders.
fn gaussian_blur<T: RealScalar>(
    src: &DynamicArray<T, 2>,
    width: usize,
    sigma: T,
) -> DynamicArray<T, 2> {
    let [rows, cols] = src.shape();
    let taps = gaussian_kernel(width, sigma);
    let offset = (width / 2) as isize;

    let mut horizontal = rlst_dynamic_array2!(T, [rows, cols]);
    for row in 0..rows {
        for col in 0..cols {
            let mut value = T::zero();
            for (k, &tap) in taps.iter().enumerate() {
                let c = mirror(col as isize + k as isize - offset, cols);
                value += tap * src[[row, c]];
            }
            *horizontal.get_mut([row, col]).unwrap() = value;
        }
    }

    let mut dst = rlst_dynamic_array2!(T, [rows, cols]);
    for row in 0..rows {
        for col in 0..cols {
            let mut value = T::zero();
            for (k, &tap) in taps.iter().enumerate() {
                let r = mirror(row as isize + k as isize - offset, rows);
                value += tap * horizontal[[r, col]];
            }
            *dst.get_mut([row, col]).unwrap() = value;
        }
    }
    dst
}

impl<T: RealScalar> GradientField<T> {
    /// Create a zero-initialised field of the given pixel size.
    pub fn new(width: usize, height: usize) -> Self {
        GradientField {
            width,
            height,
            x: rlst_dynamic_array2!(T, [height, width]),
            y: rlst_dynamic_array2!(T, [height, width]),
        }
    }

    /// Wrap two existing component grids of matching shape.
    pub fn from_arrays(x: DynamicArray<T, 2>, y: DynamicArray<T, 2>) -> Result<Self> {
        if x.shape() != y.shape() {
            return Err(Error::ShapeMismatch {
                expected: x.shape(),
                actual: y.shape(),
            });
        }
        let [height, width] = x.shape();
        Ok(GradientField {
            width,
            height,
            x,
            y,
        })
    }

    /// Splat oriented samples into a dense field. Each sample deposits its normal over
    /// the pixels within an adaptive radius, set to the distance to its nearest other
    /// sample; contributions from overlapping samples sum. The falloff weight is
    /// `(1/radius) * exp(-(d2*d2) / (2*radius^2))` for squared pixel distance `d2`,
    /// with pixels at `d2 >= radius` skipped; note that both the cutoff and the
    /// exponent compare against the unsquared radius. Fails on fewer than two
    /// samples, where no nearest-neighbor radius exists.
    pub fn from_points(points: &[Point<T>], width: usize, height: usize) -> Result<Self> {
        let mut field = Self::new(width, height);
        let two = T::from(2.0).unwrap();
        let right = T::from(width.saturating_sub(1)).unwrap();
        let bottom = T::from(height.saturating_sub(1)).unwrap();

        for (f, point) in points.iter().enumerate() {
            let c = point.coordinate;
            let mut radius = T::infinity();
            for (f2, other) in points.iter().enumerate() {
                if f == f2 {
                    continue;
                }
                let dx = other.coordinate[0] - c[0];
                let dy = other.coordinate[1] - c[1];
                let dist = dx * dx + dy * dy;
                if dist < radius {
                    radius = dist;
                }
            }
            if !radius.is_finite() {
                return Err(Error::InsufficientSamples(
                    "splatting requires at least two samples".to_string(),
                ));
            }
            let radius = Float::sqrt(radius);

            // bounding box clipped to the image; the upper bounds stay in float so
            // the pixel at the truncated bound is kept while its coordinate still
            // lies below the bound
            let col0 = Float::max(c[0] - radius, T::zero()).to_usize().unwrap_or(0);
            let row0 = Float::max(c[1] - radius, T::zero()).to_usize().unwrap_or(0);
            let col_end = Float::min(c[0] + radius, right);
            let row_end = Float::min(c[1] + radius, bottom);

            let mut col = col0;
            while T::from(col).unwrap() < col_end {
                let px = T::from(col).unwrap();
                let mut row = row0;
                while T::from(row).unwrap() < row_end {
                    let py = T::from(row).unwrap();
                    let d2 = (c[0] - px) * (c[0] - px) + (c[1] - py) * (c[1] - py);
                    if d2 < radius {
                        let factor = (T::one() / radius)
                            * Float::exp(-(d2 * d2) / (two * radius * radius));
                        *field.x.get_mut([row, col]).unwrap() += point.normal[0] * factor;
                        *field.y.get_mut([row, col]).unwrap() += point.normal[1] * factor;
                    }
                    row += 1;
                }
                col += 1;
            }
        }
        Ok(field)
    }

    /// Discrete divergence of the field: the Sobel x derivative of the x component
    /// plus the Sobel y derivative of the y component.
    pub fn divergence(&self) -> DynamicArray<T, 2> {
        let mut div = rlst_dynamic_array2!(T, [self.height, self.width]);
        sobel_into(&self.x, 0, &mut div);
        sobel_into(&self.y, 1, &mut div);
        div
    }

    /// Recover a scalar potential whose divergence approximately matches the field's,
    /// using the default iteration count.
    pub fn integrate(&self) -> DynamicArray<T, 2> {
        self.integrate_with(RELAXATION_ITERATIONS)
    }

    /// Fixed-iteration relaxation of the Poisson equation: repeatedly blur the current
    /// potential with a small Gaussian, subtract the target divergence, and clamp
    /// every border pixel to a fixed value. No convergence check; the iteration count
    /// is the sole termination condition.
    pub fn integrate_with(&self, iterations: usize) -> DynamicArray<T, 2> {
        let mut dst = rlst_dynamic_array2!(T, [self.height, self.width]);
        if self.width == 0 || self.height == 0 {
            return dst;
        }
        let target = self.divergence();
        let sigma = T::from(BLUR_SIGMA).unwrap();
        let border = T::from(BOUNDARY_VALUE).unwrap();

        for iteration in 0..iterations {
            let blurred = gaussian_blur(&dst, BLUR_WIDTH, sigma);
            for row in 0..self.height {
                for col in 0..self.width {
                    *dst.get_mut([row, col]).unwrap() = blurred[[row, col]] - target[[row, col]];
                }
            }
            // border constraints
            for col in 0..self.width {
                *dst.get_mut([0, col]).unwrap() = border;
                *dst.get_mut([self.height - 1, col]).unwrap() = border;
            }
            for row in 0..self.height {
                *dst.get_mut([row, 0]).unwrap() = border;
                *dst.get_mut([row, self.width - 1]).unwrap() = border;
            }
            if iteration % 100 == 0 {
                debug!("relaxation iteration {}", iteration);
            }
        }
        dst
    }
}
