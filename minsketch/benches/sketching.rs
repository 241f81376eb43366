use std::time::Duration;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion, SamplingMode};

use minsketch::{bbit, BottomK, MinWise};
use xxhash_rust::xxh3::Xxh3Builder;
use xxhash_rust::xxh32::xxh32;

const SAMPLE_SIZE: usize = 30;
const WARM_UP_TIME: Duration = Duration::from_secs(1);
const MEASURE_TIME: Duration = Duration::from_secs(3);

const NUM_ELEMS: usize = 1000;
const SIZES: [usize; 2] = [64, 256];

fn hash32(elem: &[u8]) -> u32 {
    xxh32(elem, 42)
}

fn elems(prefix: &str) -> Vec<Vec<u8>> {
    (0..NUM_ELEMS)
        .map(|i| format!("{prefix}{i}").into_bytes())
        .collect()
}

fn bench_minwise_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("minwise_push");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP_TIME);
    group.measurement_time(MEASURE_TIME);
    group.sampling_mode(SamplingMode::Flat);

    let elems = elems("elem");
    for size in SIZES {
        group.bench_function(format!("n{NUM_ELEMS}_k{size}"), |b| {
            b.iter(|| {
                let mut m = MinWise::new(hash32, size, 42).unwrap();
                for e in &elems {
                    m.push(e);
                }
                m.signature()[0]
            });
        });
    }
    group.finish();
}

fn bench_bottomk_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("bottomk_add");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP_TIME);
    group.measurement_time(MEASURE_TIME);
    group.sampling_mode(SamplingMode::Flat);

    let elems = elems("elem");
    for size in SIZES {
        group.bench_function(format!("n{NUM_ELEMS}_k{size}"), |b| {
            b.iter(|| {
                let mut m = BottomK::new(Xxh3Builder::new().with_seed(42), size).unwrap();
                for e in &elems {
                    m.add(e);
                }
                m.len()
            });
        });
    }
    group.finish();
}

fn bench_minwise_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("minwise_merge");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP_TIME);
    group.measurement_time(MEASURE_TIME);
    group.sampling_mode(SamplingMode::Flat);

    for size in SIZES {
        let mut m1 = MinWise::new(hash32, size, 42).unwrap();
        let mut m2 = MinWise::new(hash32, size, 42).unwrap();
        for e in &elems("elem") {
            m1.push(e);
        }
        for e in &elems("item") {
            m2.push(e);
        }
        group.bench_function(format!("k{size}"), |b| {
            b.iter_batched(
                || m1.clone(),
                |mut m| {
                    m.merge(&m2).unwrap();
                    m
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_minwise_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("minwise_similarity");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP_TIME);
    group.measurement_time(MEASURE_TIME);
    group.sampling_mode(SamplingMode::Flat);

    for size in SIZES {
        let mut m1 = MinWise::new(hash32, size, 42).unwrap();
        let mut m2 = MinWise::new(hash32, size, 42).unwrap();
        for e in &elems("elem") {
            m1.push(e);
        }
        for e in &elems("item") {
            m2.push(e);
        }
        group.bench_function(format!("k{size}"), |b| {
            b.iter(|| m1.similarity(&m2).unwrap());
        });
    }
    group.finish();
}

fn bench_bbit_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("bbit_similarity");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP_TIME);
    group.measurement_time(MEASURE_TIME);
    group.sampling_mode(SamplingMode::Flat);

    let mut m1 = MinWise::new(hash32, 256, 42).unwrap();
    let mut m2 = MinWise::new(hash32, 256, 42).unwrap();
    for e in &elems("elem") {
        m1.push(e);
    }
    for e in &elems("item") {
        m2.push(e);
    }
    for b_param in [1, 4, 8] {
        let sig1 = m1.signature_bbit(b_param);
        let sig2 = m2.signature_bbit(b_param);
        group.bench_function(format!("b{b_param}"), |b| {
            b.iter(|| bbit::similarity(&sig1, &sig2, b_param).unwrap());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_minwise_push,
    bench_bottomk_add,
    bench_minwise_merge,
    bench_minwise_similarity,
    bench_bbit_similarity
);
criterion_main!(benches);
