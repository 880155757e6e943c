//! # `cachemesh` - Reach-Cost Spanning Walks for Cache Meshes
//!
//! Computes, for a set of distributed cache units connected by weighted
//! links, a single-source spanning walk that assigns every unit a cumulative
//! reach cost and a predecessor in the resulting tree, then sums the tree's
//! edge costs into one total: the cost of mobilizing data from the source to
//! every unit.
//!
//! ## Model
//!
//! - A **mesh** is built once from a unit count, an undirected weighted link
//!   list, and a source unit ([`CacheMesh`]); links live in a dense symmetric
//!   matrix ([`mesh::LinkMatrix`]) with a sentinel for "no link".
//! - The **walk** ([`ReachTraversal`]) greedily visits units from the source,
//!   relaxing every adjacent unit's reach cost and moving to the last
//!   adjacent not-yet-visited unit scanned in ascending identity order,
//!   backtracking along tree edges when a scan finds nothing new. A mesh
//!   whose source cannot reach every unit fails with a named error instead of
//!   walking forever or crashing.
//! - The **aggregation** ([`total_mobilization_cost`]) folds the final unit
//!   state into one scalar, with a serializable per-unit report available for
//!   machine consumers.
//!
//! Behavior worth knowing before relying on it: duplicate links resolve to
//! the heavier weight, candidate selection ignores link weights entirely, and
//! successor logs keep one entry per scan rather than deduplicating. All
//! three are load-bearing for downstream consumers of the totals.
//!
//! ## Example
//!
//! ```rust
//! use cachemesh::{total_mobilization_cost, CacheMesh, LinkSpec};
//!
//! let links = [
//!     LinkSpec { a: 1, b: 2, weight: 1 },
//!     LinkSpec { a: 2, b: 3, weight: 2 },
//!     LinkSpec { a: 3, b: 4, weight: 3 },
//! ];
//! let mut mesh = CacheMesh::new(4, &links, 1)?;
//! let ledger = mesh.spanning_walk()?;
//!
//! assert_eq!(total_mobilization_cost(&mesh, ledger.order()), 6);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The `mobilize` binary wires the same three steps to a topology file and a
//! printed total.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod input;
pub mod mesh;
pub mod traversal;

pub use input::{ParseError, TopologySpec};
pub use mesh::{CacheMesh, CacheUnit, Cost, LinkSpec, TopologyError, UnitId, UNREACHABLE};
pub use traversal::{
    mobilization_report, total_mobilization_cost, MobilizationReport, ReachTraversal,
    TraversalError, UnitReach, VisitLedger,
};
