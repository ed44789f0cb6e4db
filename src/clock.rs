//! Time sources for package timestamps.

use chrono::{DateTime, SecondsFormat, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to one instant, for reproducible output.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Format as RFC 3339 UTC with millisecond precision, e.g. `2026-10-18T12:00:00.000Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamps_use_millis_and_zulu_suffix() {
        let at = Utc
            .with_ymd_and_hms(2026, 10, 18, 12, 0, 5)
            .single()
            .expect("valid instant");
        assert_eq!(format_timestamp(at), "2026-10-18T12:00:05.000Z");
    }

    #[test]
    fn fixed_clock_never_advances() {
        let clock = FixedClock(Utc::now());
        assert_eq!(clock.now(), clock.now());
    }
}
