use binary_curve::{random_scalar_below, Affine, CurveConfig, Group, Projective, Scalar, Sect233k1};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

type Point = Affine<Sect233k1>;
type ProjectivePoint = Projective<Sect233k1>;

fn random_scalar(rng: &mut StdRng) -> Scalar {
    random_scalar_below(rng, &Sect233k1::PARAMS.order)
}

fn bench_affine_double(c: &mut Criterion) {
    let g = Point::generator();
    c.bench_function("affine_double", |bencher| {
        bencher.iter(|| black_box(black_box(g).double()))
    });
}

fn bench_projective_double(c: &mut Criterion) {
    let g = ProjectivePoint::generator();
    c.bench_function("projective_double", |bencher| {
        bencher.iter(|| black_box(black_box(g).double()))
    });
}

fn bench_affine_add(c: &mut Criterion) {
    let g = Point::generator();
    let h = g.double();
    c.bench_function("affine_add", |bencher| {
        bencher.iter(|| black_box(black_box(g) + black_box(h)))
    });
}

fn bench_projective_add(c: &mut Criterion) {
    let g = ProjectivePoint::generator();
    let h = g.double();
    c.bench_function("projective_add", |bencher| {
        bencher.iter(|| black_box(black_box(g) + black_box(h)))
    });
}

fn bench_projective_add_affine(c: &mut Criterion) {
    let g = ProjectivePoint::generator().double();
    let h = Point::generator();
    c.bench_function("projective_add_affine", |bencher| {
        bencher.iter(|| black_box(black_box(g).add_affine(black_box(&h))))
    });
}

fn bench_affine_scalar_mul(c: &mut Criterion) {
    let g = Point::generator();
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng);

    c.bench_function("affine_scalar_mul", |bencher| {
        bencher.iter(|| black_box(black_box(g).scalar_mul(black_box(&scalar))))
    });
}

fn bench_multiply(c: &mut Criterion) {
    let g = Point::generator();
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng);

    c.bench_function("multiply", |bencher| {
        bencher.iter(|| black_box(black_box(g).multiply(black_box(&scalar))))
    });
}

fn bench_multiply_ct(c: &mut Criterion) {
    let g = Point::generator();
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng);

    c.bench_function("multiply_ct", |bencher| {
        bencher.iter(|| black_box(black_box(g).multiply_ct(black_box(&scalar))))
    });
}

fn bench_projective_scalar_mul_windowed(c: &mut Criterion) {
    let g = ProjectivePoint::generator();
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng);

    c.bench_function("projective_scalar_mul_windowed", |bencher| {
        bencher.iter(|| black_box(black_box(g).scalar_mul_windowed(black_box(&scalar))))
    });
}

fn bench_pack_unpack(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let p = Point::generator().scalar_mul(&random_scalar(&mut rng));
    let packed = p.pack().unwrap_or(Scalar::ZERO);

    c.bench_function("pack", |bencher| {
        bencher.iter(|| black_box(black_box(p).pack()))
    });
    c.bench_function("unpack", |bencher| {
        bencher.iter(|| black_box(Point::unpack(black_box(&packed))))
    });
}

fn bench_projective_msm(c: &mut Criterion) {
    let mut group = c.benchmark_group("projective_msm");

    for size in [2, 4, 8, 16, 32].iter() {
        let mut rng = StdRng::seed_from_u64(12345);
        let g = ProjectivePoint::generator();

        let points: Vec<ProjectivePoint> = (0..*size).map(|i| g.mul_u64(i as u64 + 1)).collect();
        let scalars: Vec<Scalar> = (0..*size).map(|_| random_scalar(&mut rng)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |bencher, _| {
            bencher.iter(|| {
                black_box(<ProjectivePoint as Group>::multi_scalar_mul(
                    black_box(&points),
                    black_box(&scalars),
                ))
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_affine_double,
    bench_projective_double,
    bench_affine_add,
    bench_projective_add,
    bench_projective_add_affine,
    bench_affine_scalar_mul,
    bench_multiply,
    bench_multiply_ct,
    bench_projective_scalar_mul_windowed,
    bench_pack_unpack,
    bench_projective_msm
);
criterion_main!(benches);
