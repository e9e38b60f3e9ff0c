//! Event sink для lifecycle переходов
//!
//! AliveState не трогает глобальную шину: вызывающий передаёт sink явно.
//! В системах это `EventWriter<LifecycleEvent>`, в World API — `Events<LifecycleEvent>`,
//! в unit тестах — обычный `Vec`.

use bevy::ecs::event::Events;
use bevy::prelude::*;

use super::events::LifecycleEvent;

pub trait LifecycleSink {
    fn fire(&mut self, event: LifecycleEvent);
}

impl<'w> LifecycleSink for EventWriter<'w, LifecycleEvent> {
    fn fire(&mut self, event: LifecycleEvent) {
        self.write(event);
    }
}

impl LifecycleSink for Events<LifecycleEvent> {
    fn fire(&mut self, event: LifecycleEvent) {
        self.send(event);
    }
}

impl LifecycleSink for Vec<LifecycleEvent> {
    fn fire(&mut self, event: LifecycleEvent) {
        self.push(event);
    }
}

impl<S: LifecycleSink + ?Sized> LifecycleSink for &mut S {
    fn fire(&mut self, event: LifecycleEvent) {
        (**self).fire(event);
    }
}
