//! Cancellable deadline driving the periodic observation producer.

/// One pending tick, armed against an injected millisecond clock.
///
/// Cancelling synchronously guarantees the pending deadline never fires;
/// there is no notion of an in-flight tick outside `fire`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NotifyTimer {
    deadline_millis: Option<u64>,
}

impl NotifyTimer {
    pub fn arm(&mut self, at_millis: u64) {
        self.deadline_millis = Some(at_millis);
    }

    pub fn cancel(&mut self) {
        self.deadline_millis = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline_millis.is_some()
    }

    pub fn deadline_millis(&self) -> Option<u64> {
        self.deadline_millis
    }

    /// Disarms and reports true once the deadline has passed.
    pub fn fire(&mut self, now_millis: u64) -> bool {
        match self.deadline_millis {
            Some(at) if now_millis >= at => {
                self.deadline_millis = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NotifyTimer;

    #[test]
    fn unarmed_timer_never_fires() {
        let mut timer = NotifyTimer::default();
        assert!(!timer.fire(u64::MAX));
    }

    #[test]
    fn fires_once_at_or_after_the_deadline() {
        let mut timer = NotifyTimer::default();
        timer.arm(1_000);
        assert!(!timer.fire(999));
        assert!(timer.fire(1_000));
        assert!(!timer.is_armed());
        assert!(!timer.fire(2_000));
    }

    #[test]
    fn cancel_drops_a_pending_deadline() {
        let mut timer = NotifyTimer::default();
        timer.arm(1_000);
        timer.cancel();
        assert!(!timer.fire(5_000));
    }
}
