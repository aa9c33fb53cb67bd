use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use xmiflat_extract::extract_document;
use xmiflat_table::{to_string, TableOptions};
use xmiflat_test_utils::synthetic_document;

fn bench_render_table(c: &mut Criterion) {
    let options = TableOptions::default();
    let mut group = c.benchmark_group("render_table");

    for mentions in [100usize, 1000, 5000].iter() {
        let records = extract_document(&synthetic_document(*mentions))
            .unwrap()
            .records;
        group.throughput(Throughput::Elements(records.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(mentions), &records, |b, records| {
            b.iter(|| {
                let table = to_string(black_box(records), &options).unwrap();
                black_box(table);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render_table);
criterion_main!(benches);
