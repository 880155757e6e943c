//! Cache unit records: identity, reach cost, and spanning-tree links.

use crate::mesh::{Cost, UNREACHABLE};

/// A strongly-typed index for a unit in a mesh.
///
/// Internal identities are dense and 0-based; the matching external (file,
/// CLI, report) numbering is 1-based.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitId(usize);

impl UnitId {
    #[inline(always)]
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the dense 0-based index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0
    }

    /// Returns the external 1-based unit number.
    #[inline(always)]
    pub fn external(self) -> usize {
        self.0 + 1
    }
}

/// One addressable cache unit and its traversal state.
///
/// `cost` starts at [`UNREACHABLE`] and is only ever overwritten by a strictly
/// smaller candidate. `successors` is an ordered log of every adjacency scan
/// made while this unit was current; a neighbor appears once per scan, so
/// repeated scans of the same unit accumulate duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheUnit {
    id: UnitId,
    cost: Cost,
    predecessor: Option<UnitId>,
    successors: Vec<UnitId>,
}

impl CacheUnit {
    pub(crate) fn new(id: UnitId) -> Self {
        Self {
            id,
            cost: UNREACHABLE,
            predecessor: None,
            successors: Vec::new(),
        }
    }

    /// Returns this unit's identity.
    #[inline(always)]
    pub fn id(&self) -> UnitId {
        self.id
    }

    /// Returns the best reach cost known so far.
    #[inline(always)]
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Returns the unit this one is reached through, if it has been relaxed.
    ///
    /// The source keeps `None` while holding cost 0; an unrelaxed unit keeps
    /// `None` while holding the sentinel cost.
    #[inline(always)]
    pub fn predecessor(&self) -> Option<UnitId> {
        self.predecessor
    }

    /// Returns the successor log, in scan order, duplicates included.
    #[inline(always)]
    pub fn successors(&self) -> &[UnitId] {
        &self.successors
    }

    /// Returns whether a finite reach cost has been established.
    #[inline(always)]
    pub fn is_reached(&self) -> bool {
        self.cost != UNREACHABLE
    }

    pub(crate) fn set_cost(&mut self, cost: Cost) {
        self.cost = cost;
    }

    /// Overwrites cost and predecessor together; callers guard monotonicity.
    pub(crate) fn relax(&mut self, predecessor: UnitId, cost: Cost) {
        self.cost = cost;
        self.predecessor = Some(predecessor);
    }

    pub(crate) fn push_successor(&mut self, successor: UnitId) {
        self.successors.push(successor);
    }
}
