use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use skyfire_core::entity::{EnemyComponents, EntityInner, ProjectileComponents, StarComponents};
use skyfire_core::input::{Button, InputEvent};
use skyfire_core::{GameSession, SessionConfig};

/// Session with a busy screen: a wave of enemies, stars and shots in flight.
fn crowded_session() -> GameSession {
    let mut session = GameSession::new(SessionConfig::with_seed(1)).unwrap();
    // Randomly placed stragglers on the far spawn planes.
    for _ in 0..5 {
        session.spawn_enemy();
        session.spawn_star();
    }
    let arena = &mut session.world_mut().arena;
    for i in 0..20 {
        let x = (i as f32 - 10.0) * 0.9;
        arena.spawn(EntityInner::Enemy(EnemyComponents::new(
            Vec3::new(x, 0.0, -60.0 + i as f32),
            0.5,
            0.02,
            0.3,
        )));
        arena.spawn(EntityInner::Star(StarComponents::new(Vec3::new(x, 2.0, -45.0))));
    }
    for i in 0..60 {
        let x = (i as f32 - 30.0) * 0.3;
        arena.spawn(EntityInner::Projectile(ProjectileComponents::player_shot(
            Vec3::new(x, 0.0, -10.0),
            Vec3::new(0.0, 0.0, -2.5),
        )));
    }
    session
}

fn bench_step_empty(c: &mut Criterion) {
    let mut session = GameSession::new(SessionConfig::default()).unwrap();
    let mut now = 0;

    c.bench_function("step_empty", |b| {
        b.iter(|| {
            now += 16;
            black_box(session.step(now));
        })
    });
}

fn bench_step_crowded(c: &mut Criterion) {
    c.bench_function("step_crowded", |b| {
        b.iter_batched(
            crowded_session,
            |mut session| black_box(session.step(16)),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_scripted_second(c: &mut Criterion) {
    // One second of play at 60 FPS with fire held down and tapped.
    c.bench_function("scripted_second", |b| {
        b.iter(|| {
            let mut session = GameSession::new(SessionConfig::with_seed(3)).unwrap();
            session.handle_input(InputEvent::Pressed(Button::Left), 0);
            for frame in 1..=60u64 {
                if frame % 20 == 0 {
                    session.handle_input(InputEvent::Pressed(Button::Fire), frame * 16);
                    session.handle_input(InputEvent::Released(Button::Fire), frame * 16);
                }
                black_box(session.step(frame * 16));
            }
        })
    });
}

criterion_group!(benches, bench_step_empty, bench_step_crowded, bench_scripted_second);
criterion_main!(benches);
