//! Lifecycle events
//!
//! # Architecture
//!
//! **Notifications (output):**
//! - `LifecycleEvent` → AliveState сменил состояние (onDeath / onRevive)
//!
//! **Intents (input):**
//! - `LifecycleIntent::Kill` → убить target (если жив)
//! - `LifecycleIntent::Revive` → воскресить target (если мертв)
//!
//! Intent для entity уже в целевом состоянии — no-op, LifecycleEvent не генерируется.

use bevy::prelude::*;

// ============================================================================
// Notifications
// ============================================================================

/// Вид перехода AliveState
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleKind {
    /// alive → dead
    Death,
    /// dead → alive
    Revive,
}

impl LifecycleKind {
    /// Имя события на шине ("onDeath" / "onRevive")
    pub const fn name(self) -> &'static str {
        match self {
            LifecycleKind::Death => "onDeath",
            LifecycleKind::Revive => "onRevive",
        }
    }
}

/// Событие: entity умер или воскрес
///
/// - Death: source = killer, target = умерший
/// - Revive: source = caller (или сам target), target = воскресший
///
/// source/target — non-owning ссылки, entity может быть уже despawned к моменту чтения.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleEvent {
    pub kind: LifecycleKind,
    pub source: Entity,
    pub target: Entity,
}

impl LifecycleEvent {
    pub fn death(killer: Entity, target: Entity) -> Self {
        Self {
            kind: LifecycleKind::Death,
            source: killer,
            target,
        }
    }

    pub fn revive(source: Entity, target: Entity) -> Self {
        Self {
            kind: LifecycleKind::Revive,
            source,
            target,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn is_death(&self) -> bool {
        self.kind == LifecycleKind::Death
    }

    pub fn is_revive(&self) -> bool {
        self.kind == LifecycleKind::Revive
    }
}

// ============================================================================
// Intents
// ============================================================================

/// Запрос на переход AliveState
///
/// Kill и Revive идут по одной шине: система применяет их строго в порядке записи,
/// так что kill → revive → kill в одном кадре даёт три события и мертвый target.
/// Intent для entity уже в целевом состоянии — no-op.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleIntent {
    /// Убить target (если жив)
    Kill {
        target: Entity,
        killer: Entity,
    },

    /// Воскресить target (если мертв)
    ///
    /// `caller == None` → source события = сам target.
    Revive {
        target: Entity,
        caller: Option<Entity>,
    },
}

impl LifecycleIntent {
    pub fn kill(target: Entity, killer: Entity) -> Self {
        LifecycleIntent::Kill { target, killer }
    }

    pub fn revive(target: Entity) -> Self {
        LifecycleIntent::Revive { target, caller: None }
    }

    pub fn revive_by(target: Entity, caller: Entity) -> Self {
        LifecycleIntent::Revive {
            target,
            caller: Some(caller),
        }
    }

    pub fn target(&self) -> Entity {
        match *self {
            LifecycleIntent::Kill { target, .. } | LifecycleIntent::Revive { target, .. } => target,
        }
    }
}
