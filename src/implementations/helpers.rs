//! Helper functions for creating sample fixtures.
use rand::prelude::*;
use rand::SeedableRng;

use crate::types::point::{Point, Points};
use crate::types::RealScalar;

/// Fixture of oriented samples for testing. Coordinates are uniformly sampled per
/// axis from `min` to `max` (default `[0, 1)`), normals uniformly distributed on the
/// unit circle; the generator is seeded for reproducibility.
pub fn points_fixture<T: RealScalar>(
    npoints: usize,
    min: Option<f64>,
    max: Option<f64>,
) -> Points<T> {
    let mut range = StdRng::seed_from_u64(0);

    let between;
    if let (Some(min), Some(max)) = (min, max) {
        between = rand::distributions::Uniform::from(min..max);
    } else {
        between = rand::distributions::Uniform::from(0.0_f64..1.0_f64);
    }
    let angles = rand::distributions::Uniform::from(0.0_f64..std::f64::consts::TAU);

    (0..npoints)
        .map(|i| {
            let theta = angles.sample(&mut range);
            Point {
                coordinate: [
                    T::from(between.sample(&mut range)).unwrap(),
                    T::from(between.sample(&mut range)).unwrap(),
                ],
                normal: [
                    T::from(theta.cos()).unwrap(),
                    T::from(theta.sin()).unwrap(),
                ],
                global_idx: i,
            }
        })
        .collect()
}
