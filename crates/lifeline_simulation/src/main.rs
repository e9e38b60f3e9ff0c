//! Headless симуляция Lifeline
//!
//! Арена из нескольких бойцов: случайные kill/revive, трупы исчезают через ExpireClean.

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::Rng;
use std::time::Duration;
use lifeline_simulation::{
    create_headless_app, logger, AliveState, DeterministicRng, ExpireClean, LifecycleEvent, LifecycleIntent,
    LifelinePlugin,
};

const FIGHTERS: usize = 8;
const TICKS: usize = 600;

#[derive(Component)]
struct Fighter;

/// Каждый тик с небольшой вероятностью кто-то кого-то бьёт или воскрешает
fn arena_intents(
    mut rng: ResMut<DeterministicRng>,
    fighters: Query<Entity, With<Fighter>>,
    mut intents: EventWriter<LifecycleIntent>,
) {
    let entities: Vec<Entity> = fighters.iter().collect();
    if entities.len() < 2 {
        return;
    }

    let roll: f64 = rng.rng.gen();
    let target = entities[rng.rng.gen_range(0..entities.len())];
    let other = entities[rng.rng.gen_range(0..entities.len())];

    if roll < 0.05 && target != other {
        intents.write(LifecycleIntent::kill(target, other));
    } else if roll < 0.08 {
        intents.write(LifecycleIntent::revive_by(target, other));
    }
}

/// Подписчик: на каждую смерть остаётся "труп" на 2 секунды
fn spawn_corpse_markers(mut commands: Commands, mut events: EventReader<LifecycleEvent>) {
    for event in events.read().filter(|event| event.is_death()) {
        commands.spawn(ExpireClean::from_secs(2.0).animate_opacity());
        logger::log(&format!("corpse marker for {:?}", event.target));
    }
}

fn main() {
    let seed = 42;
    let mut app = create_headless_app(seed);
    logger::log_info(&format!("Starting Lifeline headless simulation (seed: {})", seed));

    // 60 тиков = 1 сек игрового времени, независимо от скорости машины
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(1.0 / 60.0)))
        .add_plugins(LifelinePlugin)
        .add_systems(Update, (arena_intents, spawn_corpse_markers));

    for _ in 0..FIGHTERS {
        app.world_mut().spawn((Fighter, AliveState::default()));
    }

    for tick in 0..TICKS {
        app.update();

        if tick % 100 == 0 {
            let world = app.world_mut();
            let alive = world
                .query::<&AliveState>()
                .iter(world)
                .filter(|state| state.is_alive())
                .count();
            logger::log_info(&format!("Tick {}: {}/{} fighters alive", tick, alive, FIGHTERS));
        }
    }

    logger::log_info("Simulation complete!");
}
