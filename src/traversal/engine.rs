//! The greedy visit/relax/backtrack walk that grows the spanning tree.
//!
//! Starting from the source (pinned to cost 0), each iteration scans every
//! identity in ascending order from the current unit: adjacent units are
//! appended to the current unit's successor log, relaxed when the path
//! through the current unit is strictly cheaper, and considered as the next
//! current unit. Candidate selection keeps the last adjacent not-yet-visited
//! unit scanned; link weights play no part in the choice. When a scan finds
//! no unvisited neighbor the walk backtracks to the current unit's
//! predecessor, and a walk that backtracks past the source while units remain
//! outstanding fails with [`TraversalError::DisconnectedFromSource`].
//!
//! Visited status is terminal per unit, but the walk may revisit a visited
//! unit as a backtracking pivot; such pivot scans re-append successors and
//! can still relax neighbors, so unit costs keep tightening after the unit
//! itself was visited. Iterations are bounded by the unit count plus the
//! number of backtracking hops, \(O(n^2)\) in the worst shapes.

use crate::mesh::{CacheMesh, UnitId};
use crate::traversal::VisitLedger;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors from running the spanning walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TraversalError {
    /// The walk exhausted every unit reachable from the source while others
    /// remained outstanding.
    #[error("mesh is disconnected from the source: visited {visited} of {units} units")]
    DisconnectedFromSource {
        /// Units visited before the walk ran out of moves.
        visited: usize,
        /// Units the mesh declares.
        units: usize,
    },
}

/// One spanning walk over a mesh.
///
/// Borrows the mesh mutably for the duration of the walk; unit
/// cost/predecessor/successor state is updated in place and the visit order
/// is returned as a [`VisitLedger`].
pub struct ReachTraversal<'m> {
    mesh: &'m mut CacheMesh,
    ledger: VisitLedger,
}

impl<'m> ReachTraversal<'m> {
    /// Prepares a walk over `mesh` with every unit outstanding.
    pub fn new(mesh: &'m mut CacheMesh) -> Self {
        let units = mesh.unit_count();
        Self {
            mesh,
            ledger: VisitLedger::new(units),
        }
    }

    /// Runs the walk to completion.
    ///
    /// # Errors
    /// [`TraversalError::DisconnectedFromSource`] when some unit cannot be
    /// reached from the source. Units outside the source's component keep
    /// their sentinel cost.
    pub fn run(mut self) -> Result<VisitLedger, TraversalError> {
        let source = self.mesh.source();
        self.mesh.unit_mut(source).set_cost(0);
        let mut current = Some(source);

        while self.ledger.remaining() > 0 {
            let Some(unit) = current else {
                return Err(TraversalError::DisconnectedFromSource {
                    visited: self.ledger.visited(),
                    units: self.mesh.unit_count(),
                });
            };

            let mut next = self.scan(unit);
            if next.is_none() && self.ledger.remaining() > 0 {
                next = self.mesh.unit(unit).predecessor();
                debug!(
                    unit = unit.external(),
                    backtrack = next.map(UnitId::external),
                    "no unvisited neighbor"
                );
            }

            if self.ledger.record(unit) {
                trace!(
                    unit = unit.external(),
                    cost = self.mesh.unit(unit).cost(),
                    "visited"
                );
            }
            current = next;
        }

        Ok(self.ledger)
    }

    /// Scans all identities in ascending order from `unit`, relaxing adjacent
    /// units and returning the last adjacent not-yet-visited one.
    fn scan(&mut self, unit: UnitId) -> Option<UnitId> {
        let mut next = None;
        for index in 0..self.mesh.unit_count() {
            let neighbor = UnitId::new(index);
            let Some(weight) = self.mesh.links().link(unit, neighbor) else {
                continue;
            };

            self.mesh.unit_mut(unit).push_successor(neighbor);

            let reach = self.mesh.unit(unit).cost() + weight;
            if self.mesh.unit(neighbor).cost() > reach {
                trace!(
                    unit = neighbor.external(),
                    cost = reach,
                    via = unit.external(),
                    "relaxed"
                );
                self.mesh.unit_mut(neighbor).relax(unit, reach);
            }

            if !self.ledger.is_visited(neighbor) {
                next = Some(neighbor);
            }
        }
        next
    }
}

impl CacheMesh {
    /// Runs the spanning walk over this mesh, mutating unit state in place
    /// and returning the visit ledger.
    ///
    /// # Errors
    /// See [`ReachTraversal::run`].
    pub fn spanning_walk(&mut self) -> Result<VisitLedger, TraversalError> {
        ReachTraversal::new(self).run()
    }
}
