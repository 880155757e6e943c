use cachemesh::{CacheMesh, LinkSpec, UNREACHABLE};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

fn pair_key(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

proptest! {
    #[test]
    fn matrix_stays_symmetric_and_keeps_heavier_duplicates(
        (units, raw_links) in (2usize..8).prop_flat_map(|units| {
            let link = (1..=units, 1..=units, 0u64..50)
                .prop_filter("self links excluded", |(a, b, _)| a != b);
            (Just(units), prop::collection::vec(link, 0..20))
        })
    ) {
        let links: Vec<LinkSpec> = raw_links
            .iter()
            .map(|&(a, b, weight)| LinkSpec { a, b, weight })
            .collect();
        let mesh = CacheMesh::new(units, &links, 1).unwrap();

        // Model: duplicate links collapse to the heaviest weight seen.
        let mut model: HashMap<(usize, usize), u64> = HashMap::new();
        for &(a, b, weight) in &raw_links {
            let entry = model.entry(pair_key(a, b)).or_insert(weight);
            *entry = (*entry).max(weight);
        }

        for a in 1..=units {
            for b in 1..=units {
                let ia = mesh.unit_id(a).unwrap();
                let ib = mesh.unit_id(b).unwrap();
                let expected = if a == b {
                    UNREACHABLE
                } else {
                    model.get(&pair_key(a, b)).copied().unwrap_or(UNREACHABLE)
                };
                prop_assert_eq!(mesh.links().weight(ia, ib), expected);
                prop_assert_eq!(
                    mesh.links().weight(ia, ib),
                    mesh.links().weight(ib, ia)
                );
            }
        }
    }

    #[test]
    fn connected_meshes_fully_visit_with_finite_costs(
        (units, backbone, extras, source) in (2usize..10).prop_flat_map(|units| {
            let backbone = prop::collection::vec(1u64..30, units - 1);
            let extra = (1..=units, 1..=units, 1u64..30)
                .prop_filter("self links excluded", |(a, b, _)| a != b);
            (
                Just(units),
                backbone,
                prop::collection::vec(extra, 0..10),
                1..=units,
            )
        })
    ) {
        let mut links: Vec<LinkSpec> = backbone
            .iter()
            .enumerate()
            .map(|(i, &weight)| LinkSpec { a: i + 1, b: i + 2, weight })
            .collect();
        links.extend(extras.iter().map(|&(a, b, weight)| LinkSpec { a, b, weight }));

        let mut mesh = CacheMesh::new(units, &links, source).unwrap();
        let ledger = mesh
            .spanning_walk()
            .expect("the backbone keeps the mesh connected");

        prop_assert_eq!(ledger.visited(), units);
        let mut seen = HashSet::new();
        for &id in ledger.order() {
            prop_assert!(seen.insert(id.index()), "unit visited twice");
        }

        let source_id = mesh.source();
        prop_assert_eq!(mesh.unit(source_id).cost(), 0);
        prop_assert!(mesh.unit(source_id).predecessor().is_none());

        for id in mesh.unit_ids() {
            let unit = mesh.unit(id);
            prop_assert!(unit.is_reached());
            match unit.predecessor() {
                Some(pred) => prop_assert!(unit.cost() >= mesh.unit(pred).cost()),
                None => prop_assert_eq!(id, source_id),
            }
        }
    }

    #[test]
    fn construction_and_walks_are_deterministic(
        (units, raw_links, source) in (2usize..8).prop_flat_map(|units| {
            let link = (1..=units, 1..=units, 0u64..50)
                .prop_filter("self links excluded", |(a, b, _)| a != b);
            (Just(units), prop::collection::vec(link, 0..12), 1..=units)
        })
    ) {
        let links: Vec<LinkSpec> = raw_links
            .iter()
            .map(|&(a, b, weight)| LinkSpec { a, b, weight })
            .collect();

        let first = CacheMesh::new(units, &links, source).unwrap();
        let second = CacheMesh::new(units, &links, source).unwrap();
        prop_assert_eq!(&first, &second);

        let mut walk_a = first.clone();
        let mut walk_b = second.clone();
        let ledger_a = walk_a.spanning_walk();
        let ledger_b = walk_b.spanning_walk();
        prop_assert_eq!(ledger_a, ledger_b);
        prop_assert_eq!(walk_a, walk_b);
    }
}
