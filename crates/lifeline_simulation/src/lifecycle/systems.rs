//! Lifecycle системы
//!
//! Порядок (chain в LifelinePlugin):
//! 1. process_lifecycle_intents — intents (в порядке записи) → AliveState → LifecycleEvent
//! 2. init_dead_marker / sync_dead_marker / reconcile_dead_marker — маркер Dead следует за AliveState
//! 3. tick_expire_clean — despawn entity с истёкшим ExpireClean

use bevy::prelude::*;

use super::events::{LifecycleEvent, LifecycleIntent, LifecycleKind};
use crate::components::{AliveState, Dead, ExpireClean};
use crate::config::LifecycleConfig;
use crate::logger;

pub(crate) fn log_transition(config: &LifecycleConfig, event: &LifecycleEvent) {
    if !config.log_transitions {
        return;
    }

    match event.kind {
        LifecycleKind::Death => logger::log_info(&format!(
            "💀 {}: entity {:?} killed by {:?}",
            event.name(),
            event.target,
            event.source
        )),
        LifecycleKind::Revive => logger::log_info(&format!(
            "✨ {}: entity {:?} revived by {:?}",
            event.name(),
            event.target,
            event.source
        )),
    }
}

/// Система: LifecycleIntent → AliveState::kill / revive / revive_by
///
/// Intents применяются в порядке записи, Kill и Revive вперемешку.
/// Target без AliveState (или уже despawned) — warning, intent пропускается.
/// Target уже в целевом состоянии — no-op, событие не пишется.
pub fn process_lifecycle_intents(
    mut intents: EventReader<LifecycleIntent>,
    mut lifecycle_events: EventWriter<LifecycleEvent>,
    mut states: Query<&mut AliveState>,
    config: Res<LifecycleConfig>,
) {
    for intent in intents.read() {
        let target = intent.target();
        let Ok(mut state) = states.get_mut(target) else {
            logger::log_warning(&format!("{:?}: target {:?} has no AliveState", intent, target));
            continue;
        };

        // no-op переход не должен триггерить Changed<AliveState>
        let fired = match *intent {
            LifecycleIntent::Kill { killer, .. } => state
                .bypass_change_detection()
                .kill(target, killer, &mut lifecycle_events)
                .then(|| LifecycleEvent::death(killer, target)),
            LifecycleIntent::Revive { caller, .. } => {
                let source = caller.unwrap_or(target);
                state
                    .bypass_change_detection()
                    .revive_by(target, source, &mut lifecycle_events)
                    .then(|| LifecycleEvent::revive(source, target))
            }
        };

        if let Some(event) = fired {
            state.set_changed();
            log_transition(&config, &event);
        }
    }
}

/// Система: entity, заспавненный сразу мертвым (AliveState::dead()), получает Dead
pub fn init_dead_marker(
    mut commands: Commands,
    spawned: Query<(Entity, &AliveState), (Added<AliveState>, Without<Dead>)>,
    config: Res<LifecycleConfig>,
) {
    if !config.mark_dead {
        return;
    }

    for (entity, state) in spawned.iter() {
        if state.is_dead() {
            commands.entity(entity).try_insert(Dead);
        }
    }
}

/// Система: маркер Dead по LifecycleEvent
///
/// onDeath → insert Dead, onRevive → remove Dead.
pub fn sync_dead_marker(
    mut commands: Commands,
    mut lifecycle_events: EventReader<LifecycleEvent>,
    config: Res<LifecycleConfig>,
) {
    if !config.mark_dead {
        lifecycle_events.clear();
        return;
    }

    for event in lifecycle_events.read() {
        // Target мог быть despawned между kill и этой системой
        let Ok(mut entity_commands) = commands.get_entity(event.target) else {
            continue;
        };

        match event.kind {
            LifecycleKind::Death => {
                entity_commands.try_insert(Dead);
            }
            LifecycleKind::Revive => {
                entity_commands.remove::<Dead>();
            }
        }
    }
}

/// Система: полная сверка Dead с AliveState при изменении LifecycleConfig
///
/// Пока mark_dead был выключен, события проходили мимо маркера.
/// После включения (или замены конфига) маркер выравнивается по текущему состоянию.
pub fn reconcile_dead_marker(
    mut commands: Commands,
    states: Query<(Entity, &AliveState, Has<Dead>)>,
    config: Res<LifecycleConfig>,
) {
    if !config.is_changed() || !config.mark_dead {
        return;
    }

    for (entity, state, has_dead) in states.iter() {
        if state.is_dead() && !has_dead {
            commands.entity(entity).try_insert(Dead);
        } else if state.is_alive() && has_dead {
            commands.entity(entity).remove::<Dead>();
        }
    }
}

/// Система: ExpireClean таймеры → despawn
pub fn tick_expire_clean(
    mut commands: Commands,
    mut query: Query<(Entity, &mut ExpireClean)>,
    time: Res<Time>,
) {
    let delta = time.delta();

    for (entity, mut expire) in query.iter_mut() {
        if expire.advance(delta) {
            logger::log(&format!(
                "⚰️ Despawning entity {:?} (expired after {:?})",
                entity,
                expire.expire()
            ));
            commands.entity(entity).despawn();
        }
    }
}
