//! `LinkMatrix` — a dense symmetric weight table over unit identities.
//!
//! Row-major contiguous storage, sized eagerly at construction (`units²`
//! cells) with [`UNREACHABLE`] as the "no link" fill. Memory is quadratic in
//! the unit count, which is acceptable for meshes up to a few thousand units.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `new` | \(O(n^2)\) | single allocation |
//! | `weight` / `link` | \(O(1)\) | row-major slot math |
//! | `record_link` | \(O(1)\) | writes both triangles |

use crate::mesh::{Cost, UnitId, UNREACHABLE};
use tracing::debug;

/// A dense symmetric matrix of link weights.
///
/// Writing `(a, b)` always writes `(b, a)` as well, so the matrix is
/// symmetric at all times. Diagonal cells stay [`UNREACHABLE`] unless a
/// self-link is recorded; nothing here guards against self-links, that is the
/// data source's obligation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMatrix {
    weights: Vec<Cost>,
    units: usize,
}

impl LinkMatrix {
    /// Creates a matrix for `units` units with no links recorded.
    pub fn new(units: usize) -> Self {
        Self {
            weights: vec![UNREACHABLE; units * units],
            units,
        }
    }

    /// Returns the number of units this matrix spans.
    #[inline(always)]
    pub fn units(&self) -> usize {
        self.units
    }

    #[inline(always)]
    fn slot(&self, a: UnitId, b: UnitId) -> usize {
        a.index() * self.units + b.index()
    }

    /// Returns the raw cell for `(a, b)`, sentinel included.
    ///
    /// # Panics
    /// Panics if either identity is out of bounds.
    #[inline(always)]
    pub fn weight(&self, a: UnitId, b: UnitId) -> Cost {
        assert!(
            a.index() < self.units,
            "unit {} out of bounds for {} units",
            a.index(),
            self.units
        );
        assert!(
            b.index() < self.units,
            "unit {} out of bounds for {} units",
            b.index(),
            self.units
        );
        self.weights[self.slot(a, b)]
    }

    /// Returns the link weight between `a` and `b`, or `None` when no link
    /// exists.
    ///
    /// # Panics
    /// Panics if either identity is out of bounds.
    #[inline(always)]
    pub fn link(&self, a: UnitId, b: UnitId) -> Option<Cost> {
        let weight = self.weight(a, b);
        if weight == UNREACHABLE {
            None
        } else {
            Some(weight)
        }
    }

    /// Records an undirected link, writing both `(a, b)` and `(b, a)`.
    ///
    /// Duplicate links resolve to the heavier weight: when the cell is
    /// already occupied and the incoming weight is smaller, the stored weight
    /// is kept.
    ///
    /// # Panics
    /// Panics if either identity is out of bounds.
    // TODO: settle the duplicate resolution rule with the topology owners;
    // keep-heavier is what shipped and is what downstream totals assume.
    pub fn record_link(&mut self, a: UnitId, b: UnitId, weight: Cost) {
        let previous = self.weight(a, b);
        let stored = if previous != UNREACHABLE && weight < previous {
            previous
        } else {
            weight
        };
        if previous != UNREACHABLE {
            debug!(
                a = a.external(),
                b = b.external(),
                kept = stored,
                "duplicate link resolved to heavier weight"
            );
        }
        let ab = self.slot(a, b);
        let ba = self.slot(b, a);
        self.weights[ab] = stored;
        self.weights[ba] = stored;
    }
}
