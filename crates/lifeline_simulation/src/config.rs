//! Конфигурация lifecycle plugin

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Настройки lifecycle систем
///
/// Вставляется `LifelinePlugin`, если хост не вставил свой resource раньше.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Поддерживать маркер `Dead` синхронно с AliveState
    pub mark_dead: bool,
    /// Логировать каждый kill/revive на уровне Info
    pub log_transitions: bool,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            mark_dead: true,
            log_transitions: true,
        }
    }
}

impl LifecycleConfig {
    /// Без логов и маркеров: голые переходы + события
    pub fn quiet() -> Self {
        Self {
            mark_dead: false,
            log_transitions: false,
        }
    }
}
