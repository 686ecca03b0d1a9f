use contactbook::{FxKeyHasher, HashTable, KeyHasher};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const SIZES: [usize; 3] = [10, 100, 1000];

fn names(count: usize) -> Vec<String> {
    (0..count).map(|x| format!("Contact {}", x)).collect()
}

fn fill<H: KeyHasher>(table: &mut HashTable<H>, names: &[String]) {
    for name in names {
        table.insert(name.as_str(), "555-0100");
    }
}

fn bench_insert(c: &mut Criterion) {
    let names = names(1000);
    let mut group = c.benchmark_group("insert");

    for size in SIZES.iter() {
        group.bench_with_input(BenchmarkId::new("code_point_sum", size), size, |b, &size| {
            b.iter(|| {
                let mut table = HashTable::new(size).unwrap();
                fill(&mut table, &names);
                black_box(table.len())
            })
        });
        group.bench_with_input(BenchmarkId::new("fx", size), size, |b, &size| {
            b.iter(|| {
                let mut table = HashTable::with_hasher(size, FxKeyHasher::new()).unwrap();
                fill(&mut table, &names);
                black_box(table.len())
            })
        });
    }

    group.finish();
}

fn bench_update(c: &mut Criterion) {
    let names = names(1000);
    let mut table = HashTable::new(100).unwrap();
    fill(&mut table, &names);

    c.bench_function("update existing", |b| {
        b.iter(|| table.insert(black_box("Contact 500"), black_box("555-0199")))
    });
}

fn bench_search(c: &mut Criterion) {
    let names = names(1000);
    let mut group = c.benchmark_group("search");

    for size in SIZES.iter() {
        let mut table = HashTable::new(*size).unwrap();
        fill(&mut table, &names);

        group.bench_with_input(BenchmarkId::new("hit", size), &table, |b, table| {
            b.iter(|| black_box(table.search(black_box("Contact 737"))))
        });
        group.bench_with_input(BenchmarkId::new("miss", size), &table, |b, table| {
            b.iter(|| black_box(table.search(black_box("Chris"))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_update, bench_search);
criterion_main!(benches);
