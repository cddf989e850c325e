use chrono::{DateTime, Duration, Utc};

/// Source of "now" for timed study modes.
///
/// `Fixed` only moves when [`Clock::advance`] is called, which keeps
/// countdown logic testable without sleeping.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    Default,
    Fixed(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::Default => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }

    /// Moves a fixed clock forward. No effect on the system clock.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(t) = self {
            *t += delta;
        }
    }

    /// Time since `started`, clamped at zero if `started` lies in the future.
    #[must_use]
    pub fn elapsed_since(&self, started: DateTime<Utc>) -> Duration {
        (self.now() - started).max(Duration::zero())
    }

    /// Time left of `limit` counted from `started`, never negative.
    #[must_use]
    pub fn remaining(&self, started: DateTime<Utc>, limit: Duration) -> Duration {
        (limit - self.elapsed_since(started)).max(Duration::zero())
    }
}

/// Deterministic timestamp for tests (2023-11-14T22:13:20Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_only_moves_when_advanced() {
        let mut clock = fixed_clock();
        assert_eq!(clock.now(), fixed_now());
        clock.advance(Duration::seconds(12));
        assert_eq!(clock.elapsed_since(fixed_now()), Duration::seconds(12));
    }

    #[test]
    fn remaining_counts_down_to_zero() {
        let mut clock = fixed_clock();
        let started = clock.now();
        let limit = Duration::seconds(30);
        assert_eq!(clock.remaining(started, limit), limit);

        clock.advance(Duration::seconds(29));
        assert_eq!(clock.remaining(started, limit), Duration::seconds(1));

        clock.advance(Duration::seconds(5));
        assert_eq!(clock.remaining(started, limit), Duration::zero());
    }

    #[test]
    fn elapsed_is_never_negative() {
        let clock = fixed_clock();
        let later = fixed_now() + Duration::minutes(1);
        assert_eq!(clock.elapsed_since(later), Duration::zero());
    }
}
