//! Lifecycle module — kill / revive поверх AliveState
//!
//! # Architecture
//!
//! **Events → Systems flow:**
//! - Gameplay/AI пишет `LifecycleIntent` (Kill / Revive в одной шине, порядок сохраняется)
//! - Системы применяют intent к AliveState (sink = EventWriter<LifecycleEvent>)
//! - Подписчики читают `LifecycleEvent` (onDeath / onRevive)
//! - Маркер `Dead` следует за состоянием
//!
//! Хост-код с `&mut World` может звать `kill_entity` / `revive_entity` напрямую.

use bevy::prelude::*;

pub mod events;
pub mod sink;
pub mod systems;
pub mod world_ops;


pub use events::*;
pub use sink::*;
pub use systems::*;
pub use world_ops::*;

use crate::components::{AliveState, Dead};
use crate::config::LifecycleConfig;

/// Lifecycle plugin
///
/// Регистрирует события, reflect-типы, LifecycleConfig (если хост не вставил свой)
/// и системы в Update.
pub struct LifecyclePlugin;

impl Plugin for LifecyclePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LifecycleConfig>()
            .register_type::<AliveState>()
            .register_type::<Dead>()
            .add_event::<LifecycleEvent>()
            .add_event::<LifecycleIntent>()
            .add_systems(
                Update,
                (
                    // Фаза 1: intents в порядке записи
                    process_lifecycle_intents,
                    // Фаза 2: маркер Dead
                    init_dead_marker,
                    sync_dead_marker,
                    reconcile_dead_marker,
                    // Фаза 3: временные entity
                    tick_expire_clean,
                )
                    .chain(),
            );
    }
}
