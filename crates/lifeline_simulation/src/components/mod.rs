//! ECS Components для lifecycle
//!
//! - boolean: базовая абстракция компонента с одним bool значением
//! - alive: AliveState (alive/dead + kill/revive переходы) и маркер Dead
//! - expire: ExpireClean (удаление entity по таймеру)

pub mod alive;
pub mod boolean;
pub mod expire;

use bevy::prelude::*;

pub use alive::*;
pub use boolean::*;
pub use expire::*;

/// Компонент-маркер: AliveState entity в состоянии Dead
///
/// Ставится/снимается `sync_dead_marker` (если `LifecycleConfig::mark_dead`).
/// Удобен для фильтров `With<Dead>` / `Without<Dead>` в чужих системах.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Dead;
