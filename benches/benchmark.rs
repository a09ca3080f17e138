// Prediction benchmarks over a synthetic dataset sized like the public symptom dataset
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand::rngs::StdRng;
use symptomdx_core::{predict, predict_batch, Dataset, Metric, PredictRequest, Vocabulary};

const ROWS: usize = 4920;
const SYMPTOMS: usize = 131;
const DISEASES: usize = 41;

fn generate_dataset(rng: &mut StdRng) -> (Dataset, Vec<String>) {
    let symptoms: Vec<String> = (0..SYMPTOMS).map(|i| format!("symptom {}", i)).collect();
    let vocab = Vocabulary::new(&symptoms);

    let records: Vec<(String, Vec<String>)> = (0..ROWS)
        .map(|i| {
            let present = (0..rng.random_range(3..17))
                .map(|_| symptoms[rng.random_range(0..SYMPTOMS)].clone())
                .collect();
            (format!("disease {}", i % DISEASES), present)
        })
        .collect();

    (Dataset::from_symptom_sets(vocab, records).unwrap(), symptoms)
}

fn generate_request(rng: &mut StdRng, symptoms: &[String], k: usize, metric: Metric) -> PredictRequest {
    let picked: Vec<String> = (0..rng.random_range(2..6))
        .map(|_| symptoms[rng.random_range(0..symptoms.len())].clone())
        .collect();
    PredictRequest {
        symptoms: picked,
        k,
        metric,
    }
}

fn benchmark_predict(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let (dataset, symptoms) = generate_dataset(&mut rng);
    let mut group = c.benchmark_group("predict");

    for metric in Metric::ALL {
        let request = generate_request(&mut rng, &symptoms, 7, metric);
        group.bench_with_input(BenchmarkId::new("metric", metric), &request, |b, request| {
            b.iter(|| predict(black_box(&dataset), black_box(request)).unwrap());
        });
    }

    group.finish();
}

fn benchmark_k(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(11);
    let (dataset, symptoms) = generate_dataset(&mut rng);
    let mut group = c.benchmark_group("predict_k");

    for k in [1, 7, 50].iter() {
        let request = generate_request(&mut rng, &symptoms, *k, Metric::Jaccard);
        group.bench_with_input(BenchmarkId::new("jaccard", k), &request, |b, request| {
            b.iter(|| predict(black_box(&dataset), black_box(request)).unwrap());
        });
    }

    group.finish();
}

fn benchmark_batch(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(13);
    let (dataset, symptoms) = generate_dataset(&mut rng);
    let requests: Vec<PredictRequest> = (0..64)
        .map(|i| generate_request(&mut rng, &symptoms, 7, Metric::ALL[i % 4]))
        .collect();

    c.bench_function("predict_batch_64", |b| {
        b.iter(|| predict_batch(black_box(&dataset), black_box(&requests)));
    });
}

criterion_group!(benches, benchmark_predict, benchmark_k, benchmark_batch);
criterion_main!(benches);
