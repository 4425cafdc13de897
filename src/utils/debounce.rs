use std::time::Duration;

use crate::config::FORM;
use crate::utils::app_time::AppInstant;

/// Trailing-edge debounce timer.
///
/// Every `touch` restarts the quiet period; `fire` reports `true` once the
/// quiet period has elapsed since the most recent touch, then disarms.
/// Callers pass the current instant in, so the timer never reads the clock.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    last_touch: Option<AppInstant>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(FORM.search_debounce_ms))
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_touch: None,
        }
    }

    /// Arm (or re-arm) the timer.
    pub fn touch(&mut self, now: AppInstant) {
        self.last_touch = Some(now);
    }

    /// Time left before `fire` would succeed, if armed.
    pub fn remaining(&self, now: AppInstant) -> Option<Duration> {
        self.last_touch
            .map(|touched| self.delay.saturating_sub(now.saturating_duration_since(touched)))
    }

    pub fn fire(&mut self, now: AppInstant) -> bool {
        match self.last_touch {
            Some(touched) if now.saturating_duration_since(touched) >= self.delay => {
                self.last_touch = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::app_time::now;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn idle_debouncer_never_fires() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = now();

        assert!(!debouncer.fire(start + Duration::from_secs(10)));
        assert_eq!(debouncer.remaining(start), None);
    }

    #[test]
    fn fires_once_after_quiet_period() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = now();
        debouncer.touch(start);

        assert!(!debouncer.fire(start + Duration::from_millis(299)));
        assert!(debouncer.fire(start + DELAY));
        assert!(!debouncer.fire(start + Duration::from_millis(900)));
        assert_eq!(debouncer.remaining(start + DELAY), None);
    }

    #[test]
    fn each_keystroke_restarts_the_timer() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = now();

        debouncer.touch(start);
        debouncer.touch(start + Duration::from_millis(200));
        assert!(!debouncer.fire(start + Duration::from_millis(400)));
        assert_eq!(
            debouncer.remaining(start + Duration::from_millis(400)),
            Some(Duration::from_millis(100))
        );
        assert!(debouncer.fire(start + Duration::from_millis(500)));
    }

    #[test]
    fn default_uses_form_delay() {
        let mut debouncer = Debouncer::default();
        let start = now();
        debouncer.touch(start);
        assert_eq!(
            debouncer.remaining(start),
            Some(Duration::from_millis(FORM.search_debounce_ms))
        );
    }
}
