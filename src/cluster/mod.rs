//! Density-based clustering without a precomputed distance matrix.
//!
//! The engine here is DBSCAN with a memory-light twist: instead of building
//! the n×n pairwise distance matrix up front, each point's ε-neighborhood
//! is evaluated on demand against the full point set, and at most once per
//! fit. Working memory stays O(n) beyond the points themselves.
//!
//! ## Pieces
//!
//! - [`Dbscan`] — the clustering engine (fit / predict / score).
//! - [`Label`] — per-point result: [`Label::Noise`] or [`Label::Cluster`].
//! - [`minkowski`] — the configurable Lp distance the engine scans with.
//! - [`silhouette`] — cohesion/separation score of a finished partition.
//!
//! ## Usage
//!
//! ```rust
//! use denscan::{Dbscan, Label};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//! ];
//!
//! let mut dbscan = Dbscan::new(0.5, 2);
//! let labels = dbscan.fit_predict(&data).unwrap();
//! assert_eq!(labels[0], labels[1]); // first pair together
//! assert_ne!(labels[0], labels[2]); // separate from the last pair
//!
//! // Flatten to a label column: -1 marks noise.
//! let column: Vec<i64> = labels.into_iter().map(Label::to_index).collect();
//! assert_eq!(column, vec![0, 0, 1, 1]);
//! ```

mod dbscan;
mod labels;
mod metric;
mod silhouette;

pub use dbscan::Dbscan;
pub use labels::{Label, NOISE};
pub use metric::minkowski;
pub use silhouette::silhouette;
