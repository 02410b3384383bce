//! Lp (Minkowski) distances.
//!
//! Order 1 is taxicab distance, order 2 is Euclidean. The batched form is
//! the hot path of the clustering scan: one reference point against the
//! whole fitted set.

use crate::error::{Error, Result};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Distance of order `p` between two points: `(Σ|aᵢ − bᵢ|^p)^(1/p)`.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if `a` and `b` differ in length.
#[inline]
pub fn minkowski(a: &[f32], b: &[f32], order: u32) -> Result<f32> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok(minkowski_unchecked(a, b, order))
}

/// As [`minkowski`], but the caller guarantees equal dimensions.
#[inline]
pub(crate) fn minkowski_unchecked(a: &[f32], b: &[f32], order: u32) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    match order {
        1 => a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum(),
        2 => a
            .iter()
            .zip(b.iter())
            .map(|(x, y)| {
                let d = x - y;
                d * d
            })
            .sum::<f32>()
            .sqrt(),
        p => {
            let sum: f32 = a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| (x - y).abs().powi(p as i32))
                .sum();
            sum.powf(1.0 / p as f32)
        }
    }
}

/// Distances from `point` to every row of `points`, in row order.
///
/// Pure read over the point set; with the `parallel` feature the rows are
/// evaluated on the rayon pool.
pub(crate) fn distances_to_all(point: &[f32], points: &[Vec<f32>], order: u32) -> Vec<f32> {
    #[cfg(feature = "parallel")]
    {
        points
            .par_iter()
            .map(|q| minkowski_unchecked(point, q, order))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        points
            .iter()
            .map(|q| minkowski_unchecked(point, q, order))
            .collect()
    }
}
