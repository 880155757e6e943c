//! Traversal over a built mesh: the greedy spanning walk, its visit ledger,
//! and the mobilization cost aggregation.

pub mod cost;
pub mod engine;
pub mod ledger;

pub use cost::{mobilization_report, total_mobilization_cost, MobilizationReport, UnitReach};
pub use engine::{ReachTraversal, TraversalError};
pub use ledger::VisitLedger;
