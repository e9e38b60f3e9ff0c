//! Lifeline Simulation Core
//!
//! Alive/dead состояние entity поверх Bevy ECS 0.16:
//! - `AliveState` — компонент с kill / revive переходами
//! - `LifecycleEvent` — onDeath / onRevive на шине событий
//! - `LifecyclePlugin` — intents, маркер Dead, ExpireClean
//!
//! Событие уходит в sink, переданный явно (EventWriter, Events, Vec),
//! глобальной шины у компонента нет.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod components;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod logger;

// Re-export для удобства
pub use components::*;
pub use config::LifecycleConfig;
pub use error::{LifecycleError, LifecycleResult};
pub use lifecycle::{
    is_alive, kill_entity, revive_entity, LifecycleEvent, LifecycleIntent, LifecycleKind, LifecyclePlugin,
    LifecycleSink,
};

/// Главный plugin симуляции
pub struct LifelinePlugin;

impl Plugin for LifelinePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }
        app.add_plugins(LifecyclePlugin);
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed));

    app
}

/// Snapshot мира для сравнения детерминизма
///
/// Компоненты T сортируются по Entity index и сериализуются через Debug.
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
