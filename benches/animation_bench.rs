use algoviz::animation::{Transform, TransformTarget, TweenScheduler};
use algoviz::engine::VisualizationEngine;
use algoviz::options::Options;
use algoviz::scene::{EntityKind, Material, Scene, VisualEntity};
use algoviz::step::Step;
use algoviz::util::easing::Easing;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;

fn easing_benchmark(c: &mut Criterion) {
    for easing in Easing::ALL {
        c.bench_function(&format!("easing_{}", easing.name()), |b| {
            b.iter(|| black_box(easing.evaluate(black_box(0.37))))
        });
    }
}

fn scheduler_tick_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("scheduler_tick");

    for count in [10, 50, 100, 500].iter() {
        let mut scene = Scene::new();
        let ids: Vec<_> = (0..*count)
            .map(|i| {
                let entity = VisualEntity::new(
                    EntityKind::Sphere { radius: 1.5 },
                    Transform::at(Vec3::new(i as f32, 0.0, 0.0)),
                    Material::solid(0x63_66_f1),
                    scene.resources_mut(),
                );
                scene.attach(entity)
            })
            .collect();

        group.bench_function(format!("{}_tweens", count), |b| {
            b.iter(|| {
                let mut scheduler = TweenScheduler::new();
                for &id in &ids {
                    scheduler.add(
                        &scene,
                        id,
                        TransformTarget::uniform_scale(1.15),
                        600.0,
                        Easing::OutElastic,
                    );
                }
                scheduler.tick(black_box(16.0), &mut scene);
                black_box(scheduler.active().len())
            })
        });
    }
    group.finish();
}

fn reconcile_benchmark(c: &mut Criterion) {
    let values: Vec<f64> = (0..64).map(f64::from).collect();
    let step = Step {
        array: Some(values),
        comparing: Some(vec![3, 4]),
        swap: Some(vec![3, 4]),
        ..Step::default()
    };
    let mut engine = VisualizationEngine::new(Options::default());

    c.bench_function("sorting_reconcile_64", |b| {
        b.iter(|| {
            engine.show_step(black_box(&step));
            black_box(engine.entity_count())
        })
    });
}

criterion_group!(benches, easing_benchmark, scheduler_tick_benchmark, reconcile_benchmark);
criterion_main!(benches);
