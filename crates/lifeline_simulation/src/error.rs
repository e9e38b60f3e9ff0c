//! Ошибки World API
//!
//! Сами переходы AliveState ошибок не имеют. Ошибки возникают только когда
//! хост обращается к entity, которого нет, или у которого нет AliveState.

use bevy::prelude::*;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("entity {0:?} does not exist")]
    NoSuchEntity(Entity),

    #[error("entity {0:?} has no AliveState component")]
    MissingAliveState(Entity),

    #[error("LifecycleEvent is not registered in the world (LifelinePlugin not added?)")]
    EventsNotRegistered,
}

pub type LifecycleResult<T> = Result<T, LifecycleError>;
