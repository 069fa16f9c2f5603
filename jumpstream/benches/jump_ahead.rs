use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use jumpstream::{GeneratorKind, MultiStream};

fn bench_jump_vs_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_by_2^20");
    for kind in [GeneratorKind::Mrg32k3a, GeneratorKind::Mt19937] {
        group.bench_with_input(BenchmarkId::new("jump", format!("{kind:?}")), &kind, |b, &kind| {
            b.iter(|| {
                let mut rng = MultiStream::new(kind, 1, 1, 0).unwrap();
                rng.jump(0, 1 << 20).unwrap();
                rng.get_u64(0)
            })
        });
        group.bench_with_input(BenchmarkId::new("walk", format!("{kind:?}")), &kind, |b, &kind| {
            b.iter(|| {
                let mut rng = MultiStream::new(kind, 1, 1, 0).unwrap();
                for _ in 0..1 << 20 {
                    rng.get_u64(0);
                }
                rng.get_u64(0)
            })
        });
    }
    group.finish();
}

fn bench_fan_out(c: &mut Criterion) {
    c.bench_function("init_16_streams_2^40_apart", |b| {
        b.iter(|| MultiStream::new(GeneratorKind::Mt19937, 1, 16, 1 << 40).unwrap())
    });
}

criterion_group!(benches, bench_jump_vs_walk, bench_fan_out);
criterion_main!(benches);
