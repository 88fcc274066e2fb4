use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use eisner::Eisner;
use ndarray::Array2;
use ndarray_rand::rand::SeedableRng;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand_xorshift::XorShiftRng;

fn decode_benchmark(c: &mut Criterion) {
    let decoder = Eisner::default();
    let mut rng = XorShiftRng::seed_from_u64(42);

    let mut group = c.benchmark_group("decode");
    for &n_tokens in &[10, 40, 80] {
        let scores: Array2<f32> = Array2::random_using(
            (n_tokens + 1, n_tokens + 1),
            Uniform::new(0f32, 1f32),
            &mut rng,
        );

        group.bench_with_input(BenchmarkId::from_parameter(n_tokens), &scores, |b, scores| {
            b.iter(|| decoder.decode(black_box(scores.view())))
        });
    }
    group.finish();
}

criterion_group!(benches, decode_benchmark);
criterion_main!(benches);
