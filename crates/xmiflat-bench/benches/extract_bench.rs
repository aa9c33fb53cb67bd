use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use xmiflat_extract::{extract_document, Correlator};
use xmiflat_test_utils::synthetic_document;
use xmiflat_types::{Mention, Span, Token};

fn bench_extract_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_document");

    for mentions in [10usize, 100, 1000, 5000].iter() {
        let xml = synthetic_document(*mentions);
        group.throughput(Throughput::Bytes(xml.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(mentions), &xml, |b, xml| {
            b.iter(|| {
                let extraction = extract_document(black_box(xml)).unwrap();
                black_box(extraction);
            });
        });
    }
    group.finish();
}

fn tokens(count: usize) -> Vec<Token> {
    (0..count)
        .map(|n| {
            Token::new(
                Span::new(n * 6, n * 6 + 5),
                Some("NN".to_string()),
                Some(format!("tok{}", n)),
            )
        })
        .collect()
}

fn bench_correlate(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlate");

    for count in [100usize, 1000, 10000].iter() {
        let tokens = tokens(*count);
        let records: Vec<_> = (0..*count / 2)
            .flat_map(|n| {
                Mention {
                    kind: "SignSymptomMention".to_string(),
                    span: Span::new(n * 12, n * 12 + 11),
                    negated: false,
                    confidence: None,
                    uncertainty: None,
                    conditional: None,
                    generic: None,
                    subject: None,
                    concept_ids: vec![n as u64],
                }
                .into_records()
            })
            .collect();

        group.throughput(Throughput::Elements(records.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| {
                let mut rows = records.clone();
                Correlator::new(black_box(&tokens)).correlate_all(&mut rows);
                black_box(rows);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_extract_document, bench_correlate);
criterion_main!(benches);
