//! Clock and Date Formatting
//!
//! Creation time comes from an injectable clock so tests stay deterministic.

use chrono::{DateTime, Local};

pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn now(&self) -> DateTime<Local> {
        (**self).now()
    }
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Formats a creation time for display
pub type DateFormat = fn(&DateTime<Local>) -> String;

/// Default display format: long English date, e.g. `October 16, 2026`
pub fn format_display_date(at: &DateTime<Local>) -> String {
    at.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::cell::Cell;

    /// Clock frozen at a given instant, optionally advanced by hand
    pub struct FixedClock {
        at: Cell<DateTime<Local>>,
    }

    impl FixedClock {
        pub fn at(year: i32, month: u32, day: u32) -> Self {
            let at = Local
                .with_ymd_and_hms(year, month, day, 12, 0, 0)
                .single()
                .expect("valid local time");
            Self { at: Cell::new(at) }
        }

        pub fn advance_ms(&self, ms: i64) {
            self.at.set(self.at.get() + chrono::Duration::milliseconds(ms));
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Local> {
            self.at.get()
        }
    }

    #[test]
    fn test_display_date_is_long_english() {
        let clock = FixedClock::at(2026, 10, 6);
        assert_eq!(format_display_date(&clock.now()), "October 6, 2026");
    }
}
