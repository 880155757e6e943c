//! Mobilization cost aggregation over a completed spanning walk.
//!
//! The total is the sum of the tree's edge costs, read back from the final
//! unit state: every visited unit with a predecessor contributes the cost
//! delta along its tree edge, and the source contributes its own cost of 0.

use crate::mesh::{CacheMesh, Cost, UnitId};
use crate::traversal::VisitLedger;
use serde::Serialize;

/// Sums the spanning tree's edge costs over a completed visit order.
///
/// Assumes the walk finished; an empty order yields 0.
pub fn total_mobilization_cost(mesh: &CacheMesh, order: &[UnitId]) -> Cost {
    order
        .iter()
        .map(|&id| {
            let unit = mesh.unit(id);
            match unit.predecessor() {
                Some(predecessor) => unit.cost() - mesh.unit(predecessor).cost(),
                None => unit.cost(),
            }
        })
        .sum()
}

/// Per-unit reach row of a [`MobilizationReport`], in external 1-based
/// numbering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitReach {
    /// External 1-based unit number.
    pub unit: usize,
    /// Cumulative reach cost from the source.
    pub cost: Cost,
    /// External 1-based predecessor number; `None` for the source.
    pub predecessor: Option<usize>,
}

/// Serializable summary of a completed spanning walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MobilizationReport {
    /// Units the mesh declares.
    pub units: usize,
    /// Units visited by the walk.
    pub visited: usize,
    /// Total data-mobilization cost over the spanning tree.
    pub total_cost: Cost,
    /// Per-unit rows in visit order.
    pub reaches: Vec<UnitReach>,
}

/// Builds the serializable summary for a completed walk.
pub fn mobilization_report(mesh: &CacheMesh, ledger: &VisitLedger) -> MobilizationReport {
    let reaches = ledger
        .order()
        .iter()
        .map(|&id| {
            let unit = mesh.unit(id);
            UnitReach {
                unit: id.external(),
                cost: unit.cost(),
                predecessor: unit.predecessor().map(UnitId::external),
            }
        })
        .collect();

    MobilizationReport {
        units: mesh.unit_count(),
        visited: ledger.visited(),
        total_cost: total_mobilization_cost(mesh, ledger.order()),
        reaches,
    }
}
