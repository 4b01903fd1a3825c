use criterion::{black_box, criterion_group, criterion_main, Criterion};
use physics::{PhysicsSim, Vec3};

fn crowded_scene() -> PhysicsSim {
    let mut sim = PhysicsSim::new();
    for i in 0..4 {
        for j in 0..4 {
            let center = Vec3::new(-3.0 + 2.0 * f64::from(i), -3.0 + 2.0 * f64::from(j), 0.0);
            let idx = sim.add_cube(center, 1.5, 1.0, 0.8);
            sim.cubes[idx].velocity = Vec3::new(f64::from(j) - 1.5, f64::from(i) - 1.5, 0.5);
        }
    }
    sim
}

fn bench_step(c: &mut Criterion) {
    let mut demo = PhysicsSim::demo_scene();
    c.bench_function("demo_scene_step", |b| b.iter(|| demo.step(black_box(1.0 / 60.0))));

    let mut crowded = crowded_scene();
    c.bench_function("sixteen_cube_step", |b| b.iter(|| crowded.step(black_box(1.0 / 60.0))));
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
