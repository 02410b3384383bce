//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN groups points by neighborhood density. Unlike k-means, it:
//!
//! - Discovers clusters of arbitrary shape
//! - Automatically determines the number of clusters
//! - Identifies noise points (outliers)
//!
//! ## Core Concepts
//!
//! - **Epsilon (ε)**: Maximum distance between two points to be neighbors.
//! - **MinPoints**: Minimum neighborhood size (self included) for a point
//!   to be "core".
//! - **Core point**: Has at least MinPoints neighbors within ε.
//! - **Border point**: Within ε of a core point but not core itself.
//! - **Noise point**: Neither core nor border.
//!
//! ## Memory Profile
//!
//! This implementation never materializes the pairwise distance matrix.
//! Each point's neighborhood is evaluated on demand against the full set
//! and at most once per fit, trading memory for time: O(n) working space
//! beyond the points themselves, O(n²) distance evaluations.
//!
//! ## Algorithm Steps
//!
//! 1. For each unclassified point P, in input order:
//!    - Find neighbors within ε (strict `<`, self included)
//!    - If |neighbors| < MinPoints, mark as noise (may be promoted later)
//!    - Else P is core: seed a new cluster and expand through its frontier
//!
//! 2. Expansion: process a worklist of candidate members. A candidate that
//!    is unclassified or noise joins the cluster; if it is itself core,
//!    its neighbors enter the worklist. Already-explored points are
//!    skipped, so each neighborhood is computed once and the loop
//!    terminates.
//!
//! ## Limitations
//!
//! - Struggles with varying densities
//! - ε is sensitive and dataset-dependent
//!
//! ## References
//!
//! Ester et al. (1996). "A Density-Based Algorithm for Discovering Clusters
//! in Large Spatial Databases with Noise." KDD-96.

use crate::cluster::labels::{Label, LabelTable, Slot};
use crate::cluster::metric;
use crate::cluster::silhouette::silhouette;
use crate::error::{Error, Result};

/// DBSCAN clustering engine.
///
/// Configure with the builder methods, then call [`fit`](Dbscan::fit) or
/// [`fit_predict`](Dbscan::fit_predict). After a successful fit the engine
/// holds the labeling and answers [`predict`](Dbscan::predict),
/// [`labels`](Dbscan::labels), [`n_clusters`](Dbscan::n_clusters) and
/// [`score`](Dbscan::score); a later fit replaces that state wholesale.
///
/// ```
/// use denscan::{Dbscan, Label};
///
/// let data = vec![
///     vec![0.0, 0.0],
///     vec![0.0, 1.0],
///     vec![1.0, 0.0],
///     vec![10.0, 10.0],
/// ];
///
/// let mut dbscan = Dbscan::new(1.5, 3);
/// let labels = dbscan.fit_predict(&data).unwrap();
/// assert_eq!(labels[0], Label::Cluster(0));
/// assert_eq!(labels[3], Label::Noise);
/// assert_eq!(dbscan.n_clusters().unwrap(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Dbscan {
    /// Epsilon: maximum distance for neighborhood membership.
    epsilon: f32,
    /// Minimum neighborhood size (self included) for a core point.
    min_points: usize,
    /// Lp metric order. 1 = taxicab, 2 = Euclidean.
    order: u32,
    /// Result of the most recent successful fit.
    state: Option<FitState>,
}

/// Everything a fit produces. Immutable once stored.
#[derive(Debug, Clone)]
struct FitState {
    points: Vec<Vec<f32>>,
    dimension: usize,
    labels: Vec<Label>,
    n_clusters: usize,
    silhouette: f32,
}

impl Default for Dbscan {
    /// Epsilon 0.5, min_points 5, Euclidean metric.
    fn default() -> Self {
        Self::new(0.5, 5)
    }
}

impl Dbscan {
    /// Create a new DBSCAN engine with the Euclidean metric.
    ///
    /// # Arguments
    ///
    /// * `epsilon` - Maximum distance between two points to be neighbors.
    /// * `min_points` - Minimum neighborhood size, counting the point
    ///   itself, to qualify as a core point.
    pub fn new(epsilon: f32, min_points: usize) -> Self {
        Self {
            epsilon,
            min_points,
            order: 2,
            state: None,
        }
    }

    /// Set epsilon (neighborhood radius).
    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the minimum neighborhood size for core classification.
    pub fn with_min_points(mut self, min_points: usize) -> Self {
        self.min_points = min_points;
        self
    }

    /// Set the Lp metric order (1 = taxicab, 2 = Euclidean).
    pub fn with_order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }

    fn check_params(&self) -> Result<()> {
        // Checked at fit entry so a misconfigured engine fails before any
        // label is touched.
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "epsilon",
                message: "must be positive and finite",
            });
        }
        if self.min_points == 0 {
            return Err(Error::InvalidParameter {
                name: "min_points",
                message: "must be at least 1",
            });
        }
        if self.order == 0 {
            return Err(Error::InvalidParameter {
                name: "order",
                message: "must be at least 1",
            });
        }
        Ok(())
    }

    fn check_points(data: &[Vec<f32>]) -> Result<usize> {
        let dimension = data[0].len();
        for (row, point) in data.iter().enumerate() {
            if point.len() != dimension {
                return Err(Error::DimensionMismatch {
                    expected: dimension,
                    found: point.len(),
                });
            }
            if point.iter().any(|v| !v.is_finite()) {
                return Err(Error::NonFiniteValue { row });
            }
        }
        Ok(dimension)
    }

    /// Indices within `epsilon` of point `i`, including `i` itself
    /// (self-distance is 0 and the comparison is strict `<`).
    fn region_query(&self, data: &[Vec<f32>], i: usize) -> Vec<usize> {
        metric::distances_to_all(&data[i], data, self.order)
            .into_iter()
            .enumerate()
            .filter(|&(_, d)| d < self.epsilon)
            .map(|(j, _)| j)
            .collect()
    }

    /// Grow cluster `cluster_id` outward from a seed's neighborhood.
    ///
    /// `visited` marks points whose neighborhood has already been explored;
    /// each neighborhood is computed at most once per fit, which bounds the
    /// work and guarantees termination.
    fn expand_cluster(
        &self,
        data: &[Vec<f32>],
        seed_neighbors: Vec<usize>,
        cluster_id: usize,
        table: &mut LabelTable,
        visited: &mut [bool],
    ) {
        let mut frontier = seed_neighbors;

        while let Some(q) = frontier.pop() {
            // A point marked noise earlier becomes a border point of this
            // cluster, so promote it before the visited check. A point
            // already holding a cluster id is never relabeled.
            match table.get(q) {
                Slot::Unclassified | Slot::Noise => table.set(q, Slot::Cluster(cluster_id)),
                Slot::Cluster(_) => {}
            }

            if visited[q] {
                continue;
            }
            visited[q] = true;

            let reachable = self.region_query(data, q);
            if reachable.len() >= self.min_points {
                for r in reachable {
                    if !visited[r] {
                        frontier.push(r);
                    }
                }
            }
        }
    }

    /// Fit the engine to a point set.
    ///
    /// Every point ends up with exactly one label in
    /// {noise, cluster 0..n_clusters}. Parameters and input are validated
    /// before any labeling happens; on error the previous fit (if any) is
    /// left intact.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParameter`] for epsilon ≤ 0, min_points < 1 or
    ///   order < 1
    /// - [`Error::EmptyInput`] for an empty point set
    /// - [`Error::DimensionMismatch`] for rows of unequal length
    /// - [`Error::NonFiniteValue`] for NaN/infinite coordinates
    pub fn fit(&mut self, data: &[Vec<f32>]) -> Result<()> {
        self.check_params()?;
        let n = data.len();
        if n == 0 {
            return Err(Error::EmptyInput);
        }
        let dimension = Self::check_points(data)?;

        let mut table = LabelTable::new(n);
        let mut visited = vec![false; n];
        let mut next_cluster = 0usize;

        for i in 0..n {
            if table.is_classified(i) {
                continue;
            }
            visited[i] = true;

            let neighbors = self.region_query(data, i);

            if neighbors.len() < self.min_points {
                // Not enough neighbors: noise for now, possibly a border
                // point of a later cluster.
                table.set(i, Slot::Noise);
                continue;
            }

            table.set(i, Slot::Cluster(next_cluster));
            self.expand_cluster(data, neighbors, next_cluster, &mut table, &mut visited);
            next_cluster += 1;
        }

        let labels = table.finish();
        let silhouette = silhouette(data, &labels, self.order);

        self.state = Some(FitState {
            points: data.to_vec(),
            dimension,
            labels,
            n_clusters: next_cluster,
            silhouette,
        });
        Ok(())
    }

    /// Look up the label of each query point in the fitted set.
    ///
    /// Each query row must exactly match the coordinates of some fitted
    /// point; this is a labeling lookup, not a classifier over unseen
    /// points. Duplicate query rows get one label each.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFitted`] before any successful fit
    /// - [`Error::DimensionMismatch`] for a query of the wrong dimension
    /// - [`Error::UnknownPoint`] for a query with no exact match
    pub fn predict(&self, data: &[Vec<f32>]) -> Result<Vec<Label>> {
        let state = self.state.as_ref().ok_or(Error::NotFitted)?;

        let mut out = Vec::with_capacity(data.len());
        for (row, query) in data.iter().enumerate() {
            if query.len() != state.dimension {
                return Err(Error::DimensionMismatch {
                    expected: state.dimension,
                    found: query.len(),
                });
            }
            // Duplicate-valued fitted points are always co-clustered, so
            // the first match is as good as any.
            let hit = state
                .points
                .iter()
                .position(|p| p == query)
                .ok_or(Error::UnknownPoint { row })?;
            out.push(state.labels[hit]);
        }
        Ok(out)
    }

    /// Fit and return one label per input point, in input order.
    pub fn fit_predict(&mut self, data: &[Vec<f32>]) -> Result<Vec<Label>> {
        self.fit(data)?;
        self.labels().map(<[Label]>::to_vec)
    }

    /// Labels of the fitted points, in fit input order.
    pub fn labels(&self) -> Result<&[Label]> {
        self.state
            .as_ref()
            .map(|s| s.labels.as_slice())
            .ok_or(Error::NotFitted)
    }

    /// Number of clusters found by the fit (noise is not a cluster).
    pub fn n_clusters(&self) -> Result<usize> {
        self.state.as_ref().map(|s| s.n_clusters).ok_or(Error::NotFitted)
    }

    /// Silhouette score of the fitted partition, in `[-1, 1]`.
    ///
    /// `NaN` when fewer than two clusters exist; the score is undefined
    /// there rather than an error.
    pub fn score(&self) -> Result<f32> {
        self.state.as_ref().map(|s| s.silhouette).ok_or(Error::NotFitted)
    }
}
