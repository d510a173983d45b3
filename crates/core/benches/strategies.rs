use cosim_core::{Strategy, reference_similarity};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use strum::IntoEnumIterator;

const DIMENSIONS: [usize; 4] = [32, 384, 1536, 65_536];

fn random_vector(rng: &mut StdRng, len: usize) -> Vec<f32> {
  (0..len).map(|_| rng.gen_range(-1.0f32..1.0)).collect()
}

fn bench_strategies(c: &mut Criterion) {
  let mut rng = StdRng::seed_from_u64(42);
  let mut group = c.benchmark_group("similarity");

  for len in DIMENSIONS {
    let u = random_vector(&mut rng, len);
    let v = random_vector(&mut rng, len);
    group.throughput(Throughput::Elements(len as u64));

    for strategy in Strategy::iter() {
      group.bench_with_input(BenchmarkId::new(strategy.name(), len), &len, |b, _| {
        b.iter(|| strategy.similarity(black_box(&u), black_box(&v)));
      });
    }
    group.bench_with_input(BenchmarkId::new("reference", len), &len, |b, _| {
      b.iter(|| reference_similarity(black_box(&u), black_box(&v)));
    });
  }

  group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
