use chrono::{NaiveDateTime, Utc};

/// Source of "now" for reset calculations
///
/// Injected so that the workflow can be exercised at fixed dates.
pub trait Clock: Send + Sync {
    /// Current wall-clock time in UTC
    fn now(&self) -> NaiveDateTime;
}

/// Clock backed by the system time, read in UTC
///
/// The cron trigger is evaluated in UTC too, so the day-of-month rules see the
/// same calendar day the job fired on regardless of the host time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_reads_utc() {
        let before = Utc::now().naive_utc();
        let now = SystemClock.now();
        let after = Utc::now().naive_utc();

        assert!(before <= now && now <= after);
    }

    #[test]
    fn test_fixed_clock() {
        let instant = chrono::NaiveDate::from_ymd_opt(2024, 3, 25)
            .unwrap()
            .and_hms_opt(1, 0, 0)
            .unwrap();

        assert_eq!(FixedClock(instant).now(), instant);
    }
}
