use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use curve::{Curve, CurvePoint, Group};
use pedersen::Opening;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn group() -> Group {
    let curve = Curve::new(1009u32.into(), 1u32.into(), 14u32.into()).expect("curve");
    Group::with_sampled_generator(curve, 1013u32.into()).expect("group")
}

fn bench_open(c: &mut Criterion) {
    let group = group();
    let g = group.generator().clone();
    let h = group.nth_point(777u32);
    let mut rng = StdRng::seed_from_u64(42);

    c.bench_function("pedersen_open", |bencher| {
        bencher.iter(|| {
            let opening = Opening::open(
                &group,
                group.scalar(black_box(2u32)),
                g.clone(),
                h.clone(),
                &mut rng,
            )
            .expect("open");
            black_box(opening);
        })
    });
}

fn bench_close(c: &mut Criterion) {
    let group = group();
    let g = group.generator().clone();
    let h = group.nth_point(777u32);
    let mut rng = StdRng::seed_from_u64(42);
    let opening = Opening::open(&group, group.scalar(2u32), g, h, &mut rng).expect("open");

    c.bench_function("pedersen_close", |bencher| {
        bencher.iter(|| black_box(black_box(&opening).close()))
    });
}

fn bench_batch_verify(c: &mut Criterion) {
    let mut bench_group = c.benchmark_group("pedersen_batch_verify");
    let group = group();
    let g = group.generator().clone();
    let h = group.nth_point(777u32);

    for size in [1, 8, 64].iter() {
        let mut rng = StdRng::seed_from_u64(12345);
        let openings: Vec<Opening<'_>> = (0..*size)
            .map(|v: u32| {
                Opening::open(&group, group.scalar(v), g.clone(), h.clone(), &mut rng)
                    .expect("open")
            })
            .collect();
        let commitments: Vec<CurvePoint> = openings.iter().map(Opening::close).collect();

        bench_group.bench_with_input(BenchmarkId::from_parameter(size), size, |bencher, _| {
            bencher.iter(|| {
                black_box(Opening::batch_verify(
                    black_box(&openings),
                    black_box(&commitments),
                ))
            })
        });
    }
    bench_group.finish();
}

criterion_group!(benches, bench_open, bench_close, bench_batch_verify);
criterion_main!(benches);
