//! `CacheMesh` — the built-once topology of units, links, and the source.
//!
//! Construction takes external 1-based identities (the numbering used by
//! topology files and reports) and either fully succeeds or fails; a mesh
//! with dangling identities is never observable.

use crate::mesh::{CacheUnit, Cost, LinkMatrix, UnitId};
use thiserror::Error;

/// One undirected link between two units, in external 1-based numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkSpec {
    /// First endpoint, 1-based.
    pub a: usize,
    /// Second endpoint, 1-based.
    pub b: usize,
    /// Link weight.
    pub weight: Cost,
}

/// Errors from building a [`CacheMesh`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    /// The topology declared no units at all.
    #[error("topology must contain at least one unit")]
    NoUnits,
    /// A link endpoint or the source referenced a unit outside `1..=units`.
    #[error("unit {unit} out of range for a mesh of {units} units")]
    UnitOutOfRange {
        /// Offending external 1-based unit number.
        unit: usize,
        /// Number of units the mesh declares.
        units: usize,
    },
}

/// A mesh of cache units with a dense symmetric link matrix and a designated
/// source unit.
///
/// Built once from input data and never restructured; traversal mutates unit
/// cost/predecessor/successor state in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheMesh {
    units: Vec<CacheUnit>,
    links: LinkMatrix,
    source: UnitId,
}

impl CacheMesh {
    /// Builds a mesh from a unit count, link specs, and the 1-based source
    /// unit number.
    ///
    /// Duplicate links are tolerated and resolve per
    /// [`LinkMatrix::record_link`]; self-links are passed through unchecked.
    ///
    /// # Errors
    /// [`TopologyError::NoUnits`] when `unit_count` is zero,
    /// [`TopologyError::UnitOutOfRange`] when any link endpoint or the source
    /// falls outside `1..=unit_count`.
    pub fn new(
        unit_count: usize,
        links: &[LinkSpec],
        source: usize,
    ) -> Result<Self, TopologyError> {
        if unit_count == 0 {
            return Err(TopologyError::NoUnits);
        }

        let mut matrix = LinkMatrix::new(unit_count);
        for link in links {
            let a = check_unit(link.a, unit_count)?;
            let b = check_unit(link.b, unit_count)?;
            matrix.record_link(a, b, link.weight);
        }
        let source = check_unit(source, unit_count)?;

        let units = (0..unit_count)
            .map(|index| CacheUnit::new(UnitId::new(index)))
            .collect();

        Ok(Self {
            units,
            links: matrix,
            source,
        })
    }

    /// Returns the number of units in the mesh.
    #[inline(always)]
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Returns the source unit's identity.
    #[inline(always)]
    pub fn source(&self) -> UnitId {
        self.source
    }

    /// Returns the unit record for `id`.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline(always)]
    pub fn unit(&self, id: UnitId) -> &CacheUnit {
        assert!(
            id.index() < self.units.len(),
            "unit {} out of bounds for {} units",
            id.index(),
            self.units.len()
        );
        &self.units[id.index()]
    }

    #[inline(always)]
    pub(crate) fn unit_mut(&mut self, id: UnitId) -> &mut CacheUnit {
        assert!(
            id.index() < self.units.len(),
            "unit {} out of bounds for {} units",
            id.index(),
            self.units.len()
        );
        &mut self.units[id.index()]
    }

    /// Resolves an external 1-based unit number to its identity.
    pub fn unit_id(&self, external: usize) -> Option<UnitId> {
        if external == 0 || external > self.units.len() {
            None
        } else {
            Some(UnitId::new(external - 1))
        }
    }

    /// Iterates all unit identities in ascending order.
    pub fn unit_ids(&self) -> impl Iterator<Item = UnitId> {
        (0..self.units.len()).map(UnitId::new)
    }

    /// Returns the link matrix.
    #[inline(always)]
    pub fn links(&self) -> &LinkMatrix {
        &self.links
    }
}

fn check_unit(external: usize, unit_count: usize) -> Result<UnitId, TopologyError> {
    if external == 0 || external > unit_count {
        Err(TopologyError::UnitOutOfRange {
            unit: external,
            units: unit_count,
        })
    } else {
        Ok(UnitId::new(external - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::UNREACHABLE;

    fn triangle() -> Vec<LinkSpec> {
        vec![
            LinkSpec { a: 1, b: 2, weight: 4 },
            LinkSpec { a: 2, b: 3, weight: 6 },
            LinkSpec { a: 3, b: 1, weight: 8 },
        ]
    }

    #[test]
    fn builds_units_and_symmetric_links() {
        let mesh = CacheMesh::new(3, &triangle(), 1).unwrap();
        assert_eq!(mesh.unit_count(), 3);
        assert_eq!(mesh.source().external(), 1);

        let a = mesh.unit_id(1).unwrap();
        let b = mesh.unit_id(2).unwrap();
        assert_eq!(mesh.links().link(a, b), Some(4));
        assert_eq!(mesh.links().link(b, a), Some(4));
        for id in mesh.unit_ids() {
            assert_eq!(mesh.unit(id).cost(), UNREACHABLE);
            assert_eq!(mesh.unit(id).predecessor(), None);
        }
    }

    #[test]
    fn rejects_empty_topology() {
        assert_eq!(CacheMesh::new(0, &[], 1), Err(TopologyError::NoUnits));
    }

    #[test]
    fn rejects_out_of_range_endpoints() {
        let links = [LinkSpec { a: 1, b: 4, weight: 2 }];
        assert_eq!(
            CacheMesh::new(3, &links, 1),
            Err(TopologyError::UnitOutOfRange { unit: 4, units: 3 })
        );

        let links = [LinkSpec { a: 0, b: 2, weight: 2 }];
        assert_eq!(
            CacheMesh::new(3, &links, 1),
            Err(TopologyError::UnitOutOfRange { unit: 0, units: 3 })
        );
    }

    #[test]
    fn rejects_out_of_range_source() {
        assert_eq!(
            CacheMesh::new(3, &triangle(), 9),
            Err(TopologyError::UnitOutOfRange { unit: 9, units: 3 })
        );
    }

    #[test]
    fn construction_is_idempotent() {
        let first = CacheMesh::new(3, &triangle(), 2).unwrap();
        let second = CacheMesh::new(3, &triangle(), 2).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unit_id_resolves_only_declared_numbers() {
        let mesh = CacheMesh::new(3, &triangle(), 1).unwrap();
        assert_eq!(mesh.unit_id(3).map(UnitId::index), Some(2));
        assert_eq!(mesh.unit_id(0), None);
        assert_eq!(mesh.unit_id(4), None);
    }
}
