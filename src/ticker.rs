use std::time::{Duration, Instant};

/// Ownership token for the one recurring timer.
///
/// Not `Clone`: dropping it (through `Ticker::stop`) is the only way to
/// release the timer, so there can never be two live copies.
#[derive(Debug)]
pub struct TickerHandle {
    id: u64,
    interval: Duration,
    next_due: Instant,
}

impl TickerHandle {
    pub fn id(&self) -> u64 {
        self.id
    }
}

/// Recurring timer driven by the caller's clock.
///
/// The frame loop calls [`Ticker::poll`] with the current time; the ticker
/// never spawns threads of its own.
#[derive(Debug, Default)]
pub struct Ticker {
    handle: Option<TickerHandle>,
    issued: u64,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    pub fn handle(&self) -> Option<&TickerHandle> {
        self.handle.as_ref()
    }

    /// Arm a timer firing every `interval`, first at `now + interval`.
    ///
    /// An already running timer is released first.
    pub fn start(&mut self, interval: Duration, now: Instant) -> &TickerHandle {
        if let Some(old) = self.handle.take() {
            log::debug!("releasing ticker #{} before restart", old.id);
        }
        self.issued += 1;
        log::debug!("ticker #{} armed at {:?}", self.issued, interval);
        self.handle.insert(TickerHandle {
            id: self.issued,
            interval,
            next_due: now + interval,
        })
    }

    /// Release the timer. Returns the released handle, if any.
    pub fn stop(&mut self) -> Option<TickerHandle> {
        let released = self.handle.take();
        if let Some(handle) = &released {
            log::debug!("ticker #{} released", handle.id);
        }
        released
    }

    /// Swap the running timer for one at `interval`. No-op while stopped.
    pub fn reschedule(&mut self, interval: Duration, now: Instant) -> bool {
        if self.handle.is_none() {
            return false;
        }
        self.start(interval, now);
        true
    }

    /// Report whether the timer fired by `now`.
    ///
    /// Fires at most once per call and re-arms at `now + interval`, so a
    /// stalled frame never produces a burst of catch-up ticks.
    pub fn poll(&mut self, now: Instant) -> bool {
        match &mut self.handle {
            Some(handle) if now >= handle.next_due => {
                handle.next_due = now + handle.interval;
                true
            }
            _ => false,
        }
    }

    /// Time left before the next firing, `None` while stopped
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.handle
            .as_ref()
            .map(|handle| handle.next_due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_start_stop_leaves_no_handle() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new();
        ticker.start(ms(100), t0);
        assert!(ticker.is_active());

        assert!(ticker.stop().is_some());
        assert!(!ticker.is_active());
        assert!(ticker.handle().is_none());
        assert!(!ticker.poll(t0 + ms(1000)));
        assert!(ticker.stop().is_none());
    }

    #[test]
    fn test_fires_on_interval() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new();
        ticker.start(ms(100), t0);

        assert!(!ticker.poll(t0 + ms(50)));
        assert!(ticker.poll(t0 + ms(100)));
        assert!(!ticker.poll(t0 + ms(150)));
        assert!(ticker.poll(t0 + ms(200)));
    }

    #[test]
    fn test_stalled_poll_fires_once() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new();
        ticker.start(ms(100), t0);

        assert!(ticker.poll(t0 + ms(1000)));
        assert!(!ticker.poll(t0 + ms(1000)));
        assert!(!ticker.poll(t0 + ms(1050)));
        assert!(ticker.poll(t0 + ms(1100)));
    }

    #[test]
    fn test_restart_replaces_handle() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new();
        let first = ticker.start(ms(100), t0).id();
        let second = ticker.start(ms(300), t0).id();
        assert_ne!(first, second);
        assert_eq!(ticker.handle().map(|h| h.id()), Some(second));
        assert!(!ticker.poll(t0 + ms(100)));
    }

    #[test]
    fn test_reschedule_has_no_double_fire() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new();
        ticker.start(ms(100), t0);
        assert!(ticker.poll(t0 + ms(100)));

        // Change at t=150: the old deadline at 200 must not fire anymore
        assert!(ticker.reschedule(ms(400), t0 + ms(150)));
        assert!(!ticker.poll(t0 + ms(200)));
        assert!(!ticker.poll(t0 + ms(500)));
        assert!(ticker.poll(t0 + ms(550)));
    }

    #[test]
    fn test_reschedule_while_stopped_is_noop() {
        let mut ticker = Ticker::new();
        assert!(!ticker.reschedule(ms(100), Instant::now()));
        assert!(!ticker.is_active());
    }

    #[test]
    fn test_time_until_due() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new();
        assert_eq!(ticker.time_until_due(t0), None);
        ticker.start(ms(250), t0);
        assert_eq!(ticker.time_until_due(t0 + ms(50)), Some(ms(200)));
        assert_eq!(ticker.time_until_due(t0 + ms(400)), Some(Duration::ZERO));
    }
}
