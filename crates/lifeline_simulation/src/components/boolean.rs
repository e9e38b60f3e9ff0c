//! Базовая абстракция "boolean component"
//!
//! Компонент, вся суть которого — одно хранимое bool значение.
//! Запись значения — дело конкретного компонента: AliveState меняет его
//! только через kill / revive, чтобы ни один переход не прошёл мимо событий.

/// Компонент с одним bool значением (read-only view)
pub trait BooleanComponent {
    fn value(&self) -> bool;
}
