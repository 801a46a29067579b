use std::time::Duration;
use tokio::time::Instant;

/// Minimum spacing between search-driven re-renders
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(200);

/// Source of the current time, injectable so debouncing can be tested
/// without sleeping.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[derive(Debug)]
struct PendingTask<T> {
    due: Instant,
    payload: T,
}

/// Debouncer - a single cancellable scheduled task
///
/// Scheduling replaces any pending task and restarts the delay, so a burst of
/// keystrokes collapses into one execution carrying the last payload. The
/// debouncer never sleeps; the caller asks for [`Self::deadline`] and calls
/// [`Self::poll`] once it has passed.
#[derive(Debug)]
pub struct Debouncer<T, C: Clock = SystemClock> {
    delay: Duration,
    clock: C,
    pending: Option<PendingTask<T>>,
}

impl<T> Debouncer<T, SystemClock> {
    pub fn new(delay: Duration) -> Self {
        Self::with_clock(delay, SystemClock)
    }
}

impl<T, C: Clock> Debouncer<T, C> {
    pub fn with_clock(delay: Duration, clock: C) -> Self {
        Self {
            delay,
            clock,
            pending: None,
        }
    }

    /// Cancels any pending task and schedules `payload` one delay from now
    pub fn schedule(&mut self, payload: T) {
        let due = self.clock.now() + self.delay;
        self.pending = Some(PendingTask { due, payload });
    }

    /// When the pending task becomes due, if there is one
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|task| task.due)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Takes the pending payload if it is due
    pub fn poll(&mut self) -> Option<T> {
        let now = self.clock.now();
        match &self.pending {
            Some(task) if task.due <= now => self.pending.take().map(|task| task.payload),
            _ => None,
        }
    }

    /// Takes the pending payload regardless of its deadline
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|task| task.payload)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Manually advanced clock
    #[derive(Clone)]
    struct ManualClock {
        origin: Instant,
        offset: Rc<Cell<Duration>>,
    }

    impl ManualClock {
        fn new() -> Self {
            Self {
                origin: Instant::now(),
                offset: Rc::new(Cell::new(Duration::ZERO)),
            }
        }

        fn advance(&self, by: Duration) {
            self.offset.set(self.offset.get() + by);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            self.origin + self.offset.get()
        }
    }

    #[test]
    fn test_task_fires_after_delay() {
        let clock = ManualClock::new();
        let mut debouncer = Debouncer::with_clock(SEARCH_DEBOUNCE, clock.clone());

        debouncer.schedule("foo");
        assert_eq!(debouncer.poll(), None);

        clock.advance(Duration::from_millis(199));
        assert_eq!(debouncer.poll(), None);

        clock.advance(Duration::from_millis(1));
        assert_eq!(debouncer.poll(), Some("foo"));
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(), None);
    }

    #[test]
    fn test_burst_coalesces_into_last_payload() {
        let clock = ManualClock::new();
        let mut debouncer = Debouncer::with_clock(SEARCH_DEBOUNCE, clock.clone());
        let mut executions = Vec::new();

        for keystroke in ["m", "mo", "moo", "moos"] {
            debouncer.schedule(keystroke);
            clock.advance(Duration::from_millis(150));
            if let Some(query) = debouncer.poll() {
                executions.push(query);
            }
        }
        clock.advance(Duration::from_millis(50));
        if let Some(query) = debouncer.poll() {
            executions.push(query);
        }

        assert_eq!(executions, vec!["moos"]);
    }

    #[test]
    fn test_reschedule_pushes_deadline() {
        let clock = ManualClock::new();
        let mut debouncer = Debouncer::with_clock(SEARCH_DEBOUNCE, clock.clone());

        debouncer.schedule(1);
        let first = debouncer.deadline().unwrap();
        clock.advance(Duration::from_millis(100));
        debouncer.schedule(2);
        let second = debouncer.deadline().unwrap();

        assert_eq!(second - first, Duration::from_millis(100));
    }

    #[test]
    fn test_cancel_and_flush() {
        let clock = ManualClock::new();
        let mut debouncer = Debouncer::with_clock(SEARCH_DEBOUNCE, clock);

        debouncer.schedule("a");
        debouncer.cancel();
        assert!(debouncer.deadline().is_none());

        debouncer.schedule("b");
        assert_eq!(debouncer.flush(), Some("b"));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_system_clock_debouncer_starts_idle() {
        let debouncer: Debouncer<String> = Debouncer::new(SEARCH_DEBOUNCE);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test]
    async fn test_deadline_drives_tokio_sleep() {
        let mut debouncer = Debouncer::new(Duration::from_millis(20));
        debouncer.schedule("moose");

        let deadline = debouncer.deadline().unwrap();
        tokio::time::sleep_until(deadline).await;

        assert_eq!(debouncer.poll(), Some("moose"));
    }
}
