//! Mean silhouette coefficient for a clustering.
//!
//! For each point, `a(i)` is the mean distance to the rest of its own
//! cluster and `b(i)` the smallest mean distance to any other cluster;
//! `s(i) = (b − a) / max(a, b)` lies in `[-1, 1]`, higher meaning better
//! cohesion and separation. O(n²) distance evaluations, no stored matrix.
//!
//! Reference: Rousseeuw (1987). "Silhouettes: a graphical aid to the
//! interpretation and validation of cluster analysis."

use crate::cluster::labels::Label;
use crate::cluster::metric;

/// Mean silhouette over non-noise points, using the Lp metric of the given
/// order.
///
/// Returns `NaN` when fewer than two clusters exist; the score is
/// undefined there, and callers treat it as a documented degradation
/// rather than an error.
pub fn silhouette(points: &[Vec<f32>], labels: &[Label], order: u32) -> f32 {
    let n = points.len();
    debug_assert_eq!(labels.len(), n);

    let n_clusters = labels
        .iter()
        .filter_map(|l| match l {
            Label::Cluster(k) => Some(k + 1),
            Label::Noise => None,
        })
        .max()
        .unwrap_or(0);

    if n_clusters < 2 {
        return f32::NAN;
    }

    let mut total = 0.0f32;
    let mut counted = 0usize;

    for i in 0..n {
        let Label::Cluster(own) = labels[i] else {
            continue;
        };

        let dists = metric::distances_to_all(&points[i], points, order);

        let mut same_sum = 0.0f32;
        let mut same_count = 0usize;
        let mut other_sums = vec![0.0f32; n_clusters];
        let mut other_counts = vec![0usize; n_clusters];

        for j in 0..n {
            if j == i {
                continue;
            }
            let Label::Cluster(c) = labels[j] else {
                continue;
            };
            if c == own {
                same_sum += dists[j];
                same_count += 1;
            } else {
                other_sums[c] += dists[j];
                other_counts[c] += 1;
            }
        }

        // Singleton cluster: s(i) is defined as 0, so it drops out of the mean.
        if same_count == 0 {
            continue;
        }
        let a_i = same_sum / same_count as f32;

        let mut b_i = f32::INFINITY;
        for c in 0..n_clusters {
            if c != own && other_counts[c] > 0 {
                b_i = b_i.min(other_sums[c] / other_counts[c] as f32);
            }
        }
        if b_i.is_infinite() {
            continue;
        }

        total += (b_i - a_i) / a_i.max(b_i);
        counted += 1;
    }

    if counted == 0 {
        f32::NAN
    } else {
        total / counted as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_separated_clusters_score_high() {
        let points = vec![
            vec![0.0, 0.0],
            vec![0.1, 0.1],
            vec![10.0, 10.0],
            vec![10.1, 10.1],
        ];
        let labels = vec![
            Label::Cluster(0),
            Label::Cluster(0),
            Label::Cluster(1),
            Label::Cluster(1),
        ];
        let score = silhouette(&points, &labels, 2);
        assert!(score > 0.9);
    }

    #[test]
    fn test_single_cluster_is_nan() {
        let points = vec![vec![0.0], vec![0.1], vec![0.2]];
        let labels = vec![Label::Cluster(0); 3];
        assert!(silhouette(&points, &labels, 2).is_nan());
    }

    #[test]
    fn test_all_noise_is_nan() {
        let points = vec![vec![0.0], vec![10.0]];
        let labels = vec![Label::Noise, Label::Noise];
        assert!(silhouette(&points, &labels, 2).is_nan());
    }

    #[test]
    fn test_noise_points_are_excluded() {
        // Same two clusters, with and without a distant noise point.
        let base = vec![
            vec![0.0, 0.0],
            vec![0.1, 0.1],
            vec![10.0, 10.0],
            vec![10.1, 10.1],
        ];
        let base_labels = vec![
            Label::Cluster(0),
            Label::Cluster(0),
            Label::Cluster(1),
            Label::Cluster(1),
        ];
        let with_noise: Vec<Vec<f32>> = base
            .iter()
            .cloned()
            .chain(std::iter::once(vec![500.0, 500.0]))
            .collect();
        let noise_labels: Vec<Label> = base_labels
            .iter()
            .copied()
            .chain(std::iter::once(Label::Noise))
            .collect();

        let a = silhouette(&base, &base_labels, 2);
        let b = silhouette(&with_noise, &noise_labels, 2);
        assert!((a - b).abs() < 1e-6);
    }

    #[test]
    fn test_bad_partition_scores_low() {
        // Labels split each tight pair across clusters.
        let points = vec![
            vec![0.0, 0.0],
            vec![0.1, 0.1],
            vec![10.0, 10.0],
            vec![10.1, 10.1],
        ];
        let labels = vec![
            Label::Cluster(0),
            Label::Cluster(1),
            Label::Cluster(0),
            Label::Cluster(1),
        ];
        let score = silhouette(&points, &labels, 2);
        assert!(score < 0.0);
    }
}
