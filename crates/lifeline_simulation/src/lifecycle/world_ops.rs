//! Прямой доступ к lifecycle через `&mut World`
//!
//! Для хост-кода вне систем (скрипты, консольные команды, тесты).
//! События пишутся в `Events<LifecycleEvent>`, так что подписанные системы
//! увидят их в следующем `app.update()`.

use bevy::ecs::event::Events;
use bevy::prelude::*;

use super::events::LifecycleEvent;
use super::sink::LifecycleSink;
use super::systems::log_transition;
use crate::components::AliveState;
use crate::config::LifecycleConfig;
use crate::error::{LifecycleError, LifecycleResult};

pub fn is_alive(world: &World, entity: Entity) -> LifecycleResult<bool> {
    let entity_ref = world
        .get_entity(entity)
        .map_err(|_| LifecycleError::NoSuchEntity(entity))?;

    entity_ref
        .get::<AliveState>()
        .map(AliveState::is_alive)
        .ok_or(LifecycleError::MissingAliveState(entity))
}

/// Убивает target. `Ok(false)` — target уже был мертв.
pub fn kill_entity(world: &mut World, target: Entity, killer: Entity) -> LifecycleResult<bool> {
    apply_transition(world, target, |state, fired| state.kill(target, killer, fired))
}

/// Воскрешает target. `caller == None` → source события = сам target.
pub fn revive_entity(world: &mut World, target: Entity, caller: Option<Entity>) -> LifecycleResult<bool> {
    apply_transition(world, target, |state, fired| match caller {
        Some(caller) => state.revive_by(target, caller, fired),
        None => state.revive(target, fired),
    })
}

fn apply_transition(
    world: &mut World,
    target: Entity,
    transition: impl FnOnce(&mut AliveState, &mut Vec<LifecycleEvent>) -> bool,
) -> LifecycleResult<bool> {
    // Проверяем шину до перехода: состояние не должно смениться без события
    if !world.contains_resource::<Events<LifecycleEvent>>() {
        return Err(LifecycleError::EventsNotRegistered);
    }

    let mut fired = Vec::new();
    {
        let mut entity = world
            .get_entity_mut(target)
            .map_err(|_| LifecycleError::NoSuchEntity(target))?;
        let mut state = entity
            .get_mut::<AliveState>()
            .ok_or(LifecycleError::MissingAliveState(target))?;

        if !transition(state.bypass_change_detection(), &mut fired) {
            return Ok(false);
        }
        state.set_changed();
    }

    let config = world.get_resource::<LifecycleConfig>().cloned().unwrap_or_default();
    let mut events = world.resource_mut::<Events<LifecycleEvent>>();
    for event in fired {
        log_transition(&config, &event);
        events.fire(event);
    }

    Ok(true)
}
