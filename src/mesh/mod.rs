//! The in-memory mesh model: unit records, the dense link matrix, and
//! validated construction.
//!
//! A mesh is built exactly once from a unit count, a list of undirected
//! weighted links, and a source unit. Traversal mutates per-unit state in
//! place; the matrix itself is immutable after construction.

pub mod matrix;
pub mod topology;
pub mod unit;

pub use matrix::LinkMatrix;
pub use topology::{CacheMesh, LinkSpec, TopologyError};
pub use unit::{CacheUnit, UnitId};

/// Scalar link weight and cumulative reach cost.
pub type Cost = u64;

/// Sentinel for "no link" matrix cells and not-yet-reached unit costs.
///
/// Deliberately far below `u64::MAX` so that relaxation sums over sentinel
/// costs cannot wrap. Link weights are expected to stay strictly below this
/// value; that expectation is documented, not enforced.
pub const UNREACHABLE: Cost = 999_999_999;
