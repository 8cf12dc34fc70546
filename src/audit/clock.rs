//! Timestamp sources for audit entries.

use std::cell::Cell;

use chrono::{DateTime, Duration, Utc};

/// A source of the current instant.
///
/// [`AuditRecorder`](crate::AuditRecorder) asks its clock for a timestamp
/// every time it records a write. The default is [`SystemClock`]; tests and
/// replay tools can substitute a [`ManualClock`]. Clocks are `Send` so the
/// recorder that owns one can cross threads with its field.
pub trait Clock: Send {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A deterministic clock that advances by a fixed step on every reading.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use mediated_field::audit::{Clock, ManualClock};
///
/// let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let clock = ManualClock::starting_at(start).with_step(Duration::seconds(5));
///
/// assert_eq!(clock.now(), start);
/// assert_eq!(clock.now(), start + Duration::seconds(5));
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    next: Cell<DateTime<Utc>>,
    step: Duration,
}

impl ManualClock {
    /// Creates a clock whose first reading is `start`. The default step is one second.
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            next: Cell::new(start),
            step: Duration::seconds(1),
        }
    }

    /// Sets how far the clock moves after each reading.
    pub fn with_step(mut self, step: Duration) -> Self {
        self.step = step;
        self
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let current = self.next.get();
        // Saturate at the end of chrono's range instead of panicking.
        self.next
            .set(current.checked_add_signed(self.step).unwrap_or(current));
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn manual_clock_advances_by_step() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let clock = ManualClock::starting_at(start).with_step(Duration::minutes(1));

        let readings: Vec<_> = (0..3).map(|_| clock.now()).collect();

        assert_eq!(
            readings,
            vec![
                start,
                start + Duration::minutes(1),
                start + Duration::minutes(2)
            ]
        );
    }

    #[test]
    fn manual_clock_defaults_to_one_second_step() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let clock = ManualClock::starting_at(start);

        clock.now();
        assert_eq!(clock.now(), start + Duration::seconds(1));
    }

    #[test]
    fn clocks_are_send() {
        fn assert_send<S: Send>() {}
        assert_send::<Box<dyn Clock>>();
        assert_send::<ManualClock>();
    }
}
