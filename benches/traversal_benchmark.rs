use cachemesh::{total_mobilization_cost, CacheMesh, LinkSpec};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn chain_links(units: usize) -> Vec<LinkSpec> {
    (1..units)
        .map(|a| LinkSpec {
            a,
            b: a + 1,
            weight: (a as u64 % 13) + 1,
        })
        .collect()
}

fn dense_links(units: usize) -> Vec<LinkSpec> {
    let mut links = Vec::with_capacity(units * (units - 1) / 2);
    for a in 1..=units {
        for b in (a + 1)..=units {
            links.push(LinkSpec {
                a,
                b,
                weight: ((a + b) as u64 % 97) + 1,
            });
        }
    }
    links
}

fn bench_spanning_walk(c: &mut Criterion) {
    let size = 1000;
    let chain = chain_links(size);

    c.bench_function("spanning_walk_chain_1000", |b| {
        b.iter(|| {
            let mut mesh = CacheMesh::new(size, &chain, 1).unwrap();
            let ledger = mesh.spanning_walk().unwrap();
            black_box(total_mobilization_cost(&mesh, ledger.order()));
        });
    });

    let size = 200;
    let dense = dense_links(size);

    c.bench_function("spanning_walk_dense_200", |b| {
        b.iter(|| {
            let mut mesh = CacheMesh::new(size, &dense, 1).unwrap();
            let ledger = mesh.spanning_walk().unwrap();
            black_box(total_mobilization_cost(&mesh, ledger.order()));
        });
    });

    c.bench_function("mesh_construction_dense_200", |b| {
        b.iter(|| {
            black_box(CacheMesh::new(size, &dense, 1).unwrap());
        });
    });
}

criterion_group!(benches, bench_spanning_walk);
criterion_main!(benches);
