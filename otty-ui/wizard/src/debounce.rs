use std::time::{Duration, Instant};

/// Quiet period after the last scroll event before selection follows it.
pub const SCROLL_DEBOUNCE_RATE: Duration = Duration::from_millis(25);

/// Debounce state for content scroll events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DebounceState {
    #[default]
    Idle,
    AwaitingSettle { scroll_top: f32, deadline: Instant },
}

/// Coalesces bursts of scroll events into one settle.
///
/// The debouncer never owns a timer. The host either polls it (for example
/// from a periodic tick) or schedules a one-shot wake-up at [`deadline`].
/// Re-arming replaces the pending deadline, so at most one settle is ever
/// outstanding.
///
/// [`deadline`]: ScrollDebouncer::deadline
#[derive(Debug, Clone)]
pub struct ScrollDebouncer {
    window: Duration,
    state: DebounceState,
}

impl Default for ScrollDebouncer {
    fn default() -> Self {
        Self::new(SCROLL_DEBOUNCE_RATE)
    }
}

impl ScrollDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            state: DebounceState::Idle,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn state(&self) -> DebounceState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, DebounceState::AwaitingSettle { .. })
    }

    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            DebounceState::Idle => None,
            DebounceState::AwaitingSettle { deadline, .. } => Some(deadline),
        }
    }

    /// Record a scroll event and restart the quiet period.
    pub fn push(&mut self, scroll_top: f32, now: Instant) -> Instant {
        let deadline = now + self.window;
        self.state = DebounceState::AwaitingSettle {
            scroll_top,
            deadline,
        };
        deadline
    }

    /// Drop the pending settle, if any.
    pub fn cancel(&mut self) {
        self.state = DebounceState::Idle;
    }

    /// Return the last scroll position once the quiet period has elapsed.
    ///
    /// Fires at most once per armed window.
    pub fn poll(&mut self, now: Instant) -> Option<f32> {
        match self.state {
            DebounceState::AwaitingSettle {
                scroll_top,
                deadline,
            } if now >= deadline => {
                self.state = DebounceState::Idle;
                Some(scroll_top)
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn idle_debouncer_never_fires() {
        let mut debouncer = ScrollDebouncer::default();
        assert_eq!(debouncer.poll(Instant::now() + ms(500)), None);
        assert_eq!(debouncer.state(), DebounceState::Idle);
    }

    #[test]
    fn burst_within_window_fires_once_with_last_position() {
        let start = Instant::now();
        let mut debouncer = ScrollDebouncer::default();

        for (step, pos) in [10.0, 40.0, 90.0, 130.0].into_iter().enumerate() {
            let now = start + ms(step as u64 * 10);
            debouncer.push(pos, now);
            assert_eq!(debouncer.poll(now + ms(5)), None);
        }

        assert_eq!(debouncer.deadline(), Some(start + ms(30) + ms(25)));
        assert_eq!(debouncer.poll(start + ms(54)), None);
        assert_eq!(debouncer.poll(start + ms(55)), Some(130.0));
        assert_eq!(debouncer.poll(start + ms(100)), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn cancel_drops_pending_settle() {
        let start = Instant::now();
        let mut debouncer = ScrollDebouncer::new(ms(40));

        debouncer.push(75.0, start);
        assert!(debouncer.is_pending());
        debouncer.cancel();

        assert_eq!(debouncer.poll(start + ms(100)), None);
        assert_eq!(debouncer.deadline(), None);
    }
}
