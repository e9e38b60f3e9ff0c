//! ExpireClean — удаляет entity из мира через заданное время
//!
//! Для временных entity: эффекты, трупы, снаряды.
//! Таймер стартует, когда entity стал активным в мире (первый тик после spawn),
//! а не при создании компонента.

use bevy::prelude::*;
use std::time::Duration;

#[derive(Component, Debug, Clone)]
pub struct ExpireClean {
    timer: Timer,
    started: bool,
    animate_opacity: bool,
}

impl ExpireClean {
    pub fn new(expire: Duration) -> Self {
        Self {
            timer: Timer::new(expire, TimerMode::Once),
            started: false,
            animate_opacity: false,
        }
    }

    /// Отрицательное или NaN значение → мгновенный expire, переполнение → Duration::MAX
    pub fn from_secs(secs: f32) -> Self {
        let expire = if secs.is_nan() || secs <= 0.0 {
            Duration::ZERO
        } else {
            Duration::try_from_secs_f32(secs).unwrap_or(Duration::MAX)
        };
        Self::new(expire)
    }

    /// Включает затухание opacity по мере приближения к expire
    pub fn animate_opacity(mut self) -> Self {
        self.animate_opacity = true;
        self
    }

    pub fn is_animated(&self) -> bool {
        self.animate_opacity
    }

    pub fn expire(&self) -> Duration {
        self.timer.duration()
    }

    pub fn elapsed(&self) -> Duration {
        self.timer.elapsed()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_expired(&self) -> bool {
        self.timer.finished()
    }

    /// Продвигает таймер, возвращает true если entity пора удалять
    ///
    /// Первый вызов только активирует таймер: delta этого кадра прошла до того,
    /// как entity появился в мире.
    pub fn advance(&mut self, delta: Duration) -> bool {
        if !self.started {
            self.started = true;
            return self.timer.duration().is_zero();
        }

        self.timer.tick(delta);
        self.timer.finished()
    }

    /// 1.0 → 0.0 линейно за время expire (всегда 1.0 без animate_opacity)
    pub fn opacity(&self) -> f32 {
        if !self.animate_opacity {
            return 1.0;
        }
        if self.timer.finished() {
            return 0.0;
        }

        (1.0 - self.timer.fraction()).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_advance_only_activates() {
        let mut expire = ExpireClean::from_secs(1.0);
        assert!(!expire.is_started());

        // Огромная delta первого кадра не должна засчитаться
        assert!(!expire.advance(Duration::from_secs(10)));
        assert!(expire.is_started());
        assert_eq!(expire.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_expires_after_duration() {
        let mut expire = ExpireClean::from_secs(1.0);
        expire.advance(Duration::ZERO);

        assert!(!expire.advance(Duration::from_millis(600)));
        assert!(!expire.is_expired());

        assert!(expire.advance(Duration::from_millis(400)));
        assert!(expire.is_expired());
    }

    #[test]
    fn test_zero_duration_expires_on_activation() {
        let mut expire = ExpireClean::new(Duration::ZERO);
        assert!(expire.advance(Duration::ZERO));
    }

    #[test]
    fn test_from_secs_out_of_range() {
        assert_eq!(ExpireClean::from_secs(-1.0).expire(), Duration::ZERO);
        assert_eq!(ExpireClean::from_secs(f32::NAN).expire(), Duration::ZERO);
        assert_eq!(ExpireClean::from_secs(f32::INFINITY).expire(), Duration::MAX);

        // Отрицательная длительность — удаление на первом же тике
        let mut expire = ExpireClean::from_secs(-5.0);
        assert!(expire.advance(Duration::ZERO));
    }

    #[test]
    fn test_opacity_without_animation() {
        let mut expire = ExpireClean::from_secs(1.0);
        expire.advance(Duration::ZERO);
        expire.advance(Duration::from_millis(500));

        assert_eq!(expire.opacity(), 1.0);
    }

    #[test]
    fn test_opacity_fades_linearly() {
        let mut expire = ExpireClean::from_secs(2.0).animate_opacity();
        assert!(expire.is_animated());
        expire.advance(Duration::ZERO);
        assert_eq!(expire.opacity(), 1.0);

        expire.advance(Duration::from_millis(500));
        assert!((expire.opacity() - 0.75).abs() < 1e-4, "opacity = {}", expire.opacity());

        expire.advance(Duration::from_millis(1000));
        assert!((expire.opacity() - 0.25).abs() < 1e-4, "opacity = {}", expire.opacity());

        expire.advance(Duration::from_secs(5));
        assert_eq!(expire.opacity(), 0.0);
    }
}
