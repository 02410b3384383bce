//! Memory-light density clustering.
//!
//! `denscan` is a small DBSCAN implementation that never precomputes the
//! pairwise distance matrix, trading memory for time. Neighborhoods are
//! evaluated on demand with a configurable Lp metric, noise gets the `-1`
//! sentinel when labels are flattened to a column, and each fit carries a
//! silhouette quality score.
//!
//! The primary public API is under [`cluster`]:
//! - [`Dbscan`] — fit, exact-lookup predict, silhouette score
//! - [`Label`] — noise or cluster membership per point

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{Dbscan, Label, NOISE};
pub use error::{Error, Result};
