//! AliveState — знание entity о том, жив он или мертв

use bevy::prelude::*;

use super::boolean::BooleanComponent;
use crate::lifecycle::{LifecycleEvent, LifecycleSink};

/// Состояние жизни entity
///
/// Два состояния {Alive, Dead}, переходы только через `kill` / `revive`.
/// Повторный переход в текущее состояние — no-op, событие не генерируется.
/// Терминального состояния нет: kill → revive → kill работает сколько угодно раз.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct AliveState {
    alive: bool,
}

impl Default for AliveState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl AliveState {
    pub fn new(alive: bool) -> Self {
        Self { alive }
    }

    pub fn dead() -> Self {
        Self::new(false)
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_dead(&self) -> bool {
        !self.is_alive()
    }

    /// Убивает `this` (entity, которому принадлежит компонент)
    ///
    /// Если жив: alive = false, в sink уходит onDeath { source: killer, target: this }.
    /// Возвращает true, если переход произошёл.
    pub fn kill(&mut self, this: Entity, killer: Entity, sink: &mut impl LifecycleSink) -> bool {
        if self.is_dead() {
            return false;
        }

        self.alive = false;
        sink.fire(LifecycleEvent::death(killer, this));
        true
    }

    /// Воскрешает `this`, source события = сам `this`
    pub fn revive(&mut self, this: Entity, sink: &mut impl LifecycleSink) -> bool {
        self.revive_by(this, this, sink)
    }

    /// Воскрешает `this` от имени `caller` (хилер, чекпоинт, скрипт)
    pub fn revive_by(&mut self, this: Entity, caller: Entity, sink: &mut impl LifecycleSink) -> bool {
        if self.is_alive() {
            return false;
        }

        self.alive = true;
        sink.fire(LifecycleEvent::revive(caller, this));
        true
    }
}

impl BooleanComponent for AliveState {
    fn value(&self) -> bool {
        self.alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::LifecycleKind;

    fn entities() -> (Entity, Entity) {
        (Entity::from_raw(1), Entity::from_raw(2))
    }

    #[test]
    fn test_default_is_alive() {
        let state = AliveState::default();
        assert!(state.is_alive());
        assert!(!state.is_dead());
    }

    #[test]
    fn test_initial_state_configurable() {
        let state = AliveState::new(false);
        assert!(state.is_dead());
        assert_eq!(state, AliveState::dead());
    }

    #[test]
    fn test_kill_alive_fires_death() {
        let (this, killer) = entities();
        let mut state = AliveState::default();
        let mut fired: Vec<LifecycleEvent> = Vec::new();

        assert!(state.kill(this, killer, &mut fired));

        assert!(state.is_dead());
        assert_eq!(fired, vec![LifecycleEvent::death(killer, this)]);
        assert_eq!(fired[0].name(), "onDeath");
        assert_eq!(fired[0].source, killer);
        assert_eq!(fired[0].target, this);
    }

    #[test]
    fn test_kill_dead_is_noop() {
        let (this, killer) = entities();
        let mut state = AliveState::dead();
        let mut fired: Vec<LifecycleEvent> = Vec::new();

        assert!(!state.kill(this, killer, &mut fired));

        assert!(state.is_dead());
        assert!(fired.is_empty());
    }

    #[test]
    fn test_revive_dead_uses_self_as_source() {
        let (this, _) = entities();
        let mut state = AliveState::dead();
        let mut fired: Vec<LifecycleEvent> = Vec::new();

        assert!(state.revive(this, &mut fired));

        assert!(state.is_alive());
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].kind, LifecycleKind::Revive);
        assert_eq!(fired[0].name(), "onRevive");
        assert_eq!(fired[0].source, this);
        assert_eq!(fired[0].target, this);
    }

    #[test]
    fn test_revive_by_caller() {
        let (this, healer) = entities();
        let mut state = AliveState::dead();
        let mut fired: Vec<LifecycleEvent> = Vec::new();

        assert!(state.revive_by(this, healer, &mut fired));

        assert_eq!(fired, vec![LifecycleEvent::revive(healer, this)]);
    }

    #[test]
    fn test_revive_alive_is_noop() {
        let (this, healer) = entities();
        let mut state = AliveState::default();
        let mut fired: Vec<LifecycleEvent> = Vec::new();

        assert!(!state.revive(this, &mut fired));
        assert!(!state.revive_by(this, healer, &mut fired));

        assert!(state.is_alive());
        assert!(fired.is_empty());
    }

    #[test]
    fn test_kill_revive_cycles() {
        let (this, killer) = entities();
        let mut state = AliveState::default();
        let mut fired: Vec<LifecycleEvent> = Vec::new();

        for cycle in 0..3 {
            assert!(state.kill(this, killer, &mut fired), "cycle {}", cycle);
            assert!(!state.kill(this, killer, &mut fired), "cycle {}", cycle);
            assert!(state.revive(this, &mut fired), "cycle {}", cycle);
            assert!(!state.revive(this, &mut fired), "cycle {}", cycle);
        }

        // Ровно одно событие на каждый реальный переход
        assert_eq!(fired.len(), 6);
        for (i, event) in fired.iter().enumerate() {
            let expected = if i % 2 == 0 { LifecycleKind::Death } else { LifecycleKind::Revive };
            assert_eq!(event.kind, expected);
        }
        assert!(state.is_alive());
    }

    #[test]
    fn test_boolean_component_view() {
        let (this, killer) = entities();
        let mut state = AliveState::default();
        assert!(state.value());

        state.kill(this, killer, &mut Vec::<LifecycleEvent>::new());
        assert!(!state.value());
    }
}
