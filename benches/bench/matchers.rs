// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group};

// workspace imports
use strmatch::{AlgorithmId, registry};

// local imports
use super::{ND, samples};

criterion_group!(benches, bench);

const GROUP: &str = "matchers";

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group(GROUP);
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let variants = [
        ("periodic", samples::periodic(50), "ababc"),
        ("periodic", samples::periodic(50), "abcabcabababc"),
        ("dna", samples::dna(1000), "gattaca"),
        ("dna", samples::dna(1000), "acgt"),
    ];

    for (name, text, pattern) in &variants {
        let expected = strmatch::find(AlgorithmId::Kmp, text, pattern, false).matches;
        group.throughput(Throughput::Elements(text.len() as u64));
        for descriptor in registry::all() {
            let id: &str = descriptor.id.into();
            let param = format!("{}{}{}{}{}", name, ND, text.len(), ND, pattern);
            assert_eq!(descriptor.find(text, pattern, false).matches, expected);
            group.bench_with_input(BenchmarkId::new(id, param), text, |b, text| {
                b.iter(|| descriptor.find(black_box(text), black_box(pattern), false))
            });
        }
    }

    group.finish();
}
