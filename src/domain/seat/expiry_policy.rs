use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_HOLD_HOURS: i64 = 12;

/// How long a reservation holds a seat before it lapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryPolicy {
    hold: Duration,
}

impl ExpiryPolicy {
    pub fn new(hold: Duration) -> Self {
        Self { hold }
    }

    /// Returns `None` if `hours` is outside the range chrono can represent.
    pub fn from_hours(hours: i64) -> Option<Self> {
        Duration::try_hours(hours).map(Self::new)
    }

    pub fn hold(&self) -> Duration {
        self.hold
    }

    /// A reservation lapses once strictly more than `hold` has elapsed.
    pub fn is_expired(&self, reserved_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now - reserved_at > self.hold
    }
}

impl Default for ExpiryPolicy {
    fn default() -> Self {
        Self::new(Duration::hours(DEFAULT_HOLD_HOURS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn boundary_is_exclusive() {
        let policy = ExpiryPolicy::default();
        let reserved_at = Utc.with_ymd_and_hms(2024, 5, 10, 9, 0, 0).unwrap();

        assert!(!policy.is_expired(reserved_at, reserved_at));
        assert!(!policy.is_expired(reserved_at, reserved_at + Duration::hours(12)));
        assert!(policy.is_expired(reserved_at, reserved_at + Duration::hours(12) + Duration::seconds(1)));
    }

    #[test]
    fn custom_hold() {
        let policy = ExpiryPolicy::from_hours(1).unwrap();
        let reserved_at = Utc.with_ymd_and_hms(2024, 5, 10, 9, 0, 0).unwrap();

        assert!(policy.is_expired(reserved_at, reserved_at + Duration::minutes(61)));
    }

    #[test]
    fn out_of_range_hold_is_refused() {
        assert!(ExpiryPolicy::from_hours(i64::MAX / 1000).is_none());
        assert_eq!(ExpiryPolicy::from_hours(DEFAULT_HOLD_HOURS), Some(ExpiryPolicy::default()));
    }
}
