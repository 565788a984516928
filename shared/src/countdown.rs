use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

const MILLIS_PER_SECOND: i64 = 1000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    BeforeWindow,
    WithinWindow,
    AfterWindow,
}

impl Phase {
    pub fn headline(&self) -> &'static str {
        match self {
            Phase::BeforeWindow => "متبقي على العشر الأواخر من رمضان",
            Phase::WithinWindow => "متبقي من العشر الأواخر من رمضان",
            Phase::AfterWindow => "انتهت العشر الأواخر من رمضان",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub phase: Phase,
}

impl Countdown {
    fn from_millis(diff: i64, phase: Phase) -> Self {
        let diff = diff.max(0);
        Self {
            days: diff / MILLIS_PER_DAY,
            hours: (diff % MILLIS_PER_DAY) / MILLIS_PER_HOUR,
            minutes: (diff % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE,
            seconds: (diff % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND,
            phase,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

/// Time left until the window opens, or until it closes once inside it.
///
/// The end instant itself still counts as inside the window.
pub fn remaining(now: NaiveDateTime, window_start: NaiveDateTime, window_end: NaiveDateTime) -> Countdown {
    if now > window_end {
        return Countdown::from_millis(0, Phase::AfterWindow);
    }

    if now < window_start {
        let diff = (window_start - now).num_milliseconds();
        Countdown::from_millis(diff, Phase::BeforeWindow)
    } else {
        let diff = (window_end - now).num_milliseconds();
        Countdown::from_millis(diff, Phase::WithinWindow)
    }
}

/// Renders an integer with Arabic-Indic digits.
pub fn to_arabic_digits(value: i64) -> String {
    value
        .to_string()
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(0x0660 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    fn window() -> (NaiveDateTime, NaiveDateTime) {
        (at(2025, 3, 19, 23, 59, 59), at(2025, 3, 29, 23, 59, 59))
    }

    #[test]
    fn test_before_window_counts_to_start() {
        let (start, end) = window();
        let now = at(2025, 3, 18, 20, 30, 15);
        let countdown = remaining(now, start, end);

        assert_eq!(countdown.phase, Phase::BeforeWindow);
        assert_eq!(
            (countdown.days, countdown.hours, countdown.minutes, countdown.seconds),
            (1, 3, 29, 44)
        );
    }

    #[test]
    fn test_within_window_counts_to_end() {
        let (start, end) = window();
        let now = at(2025, 3, 25, 0, 0, 0);
        let countdown = remaining(now, start, end);

        assert_eq!(countdown.phase, Phase::WithinWindow);
        assert_eq!(
            (countdown.days, countdown.hours, countdown.minutes, countdown.seconds),
            (4, 23, 59, 59)
        );
    }

    #[test]
    fn test_window_start_is_within() {
        let (start, end) = window();
        let countdown = remaining(start, start, end);
        assert_eq!(countdown.phase, Phase::WithinWindow);
        assert_eq!(countdown.days, 10);
    }

    #[test]
    fn test_end_instant_is_inclusive() {
        let (start, end) = window();
        let countdown = remaining(end, start, end);
        assert_eq!(countdown.phase, Phase::WithinWindow);
        assert!(countdown.is_zero());
    }

    #[test]
    fn test_one_second_past_end_is_after() {
        let (start, end) = window();
        let countdown = remaining(end + Duration::seconds(1), start, end);
        assert_eq!(countdown.phase, Phase::AfterWindow);
        assert!(countdown.is_zero());
    }

    #[test]
    fn test_sub_second_remainders_truncate() {
        let (start, end) = window();
        let now = end - Duration::milliseconds(1999);
        let countdown = remaining(now, start, end);
        assert_eq!(countdown.seconds, 1);
        assert_eq!(countdown.minutes, 0);
    }

    #[test]
    fn test_configured_window_instead_of_default() {
        let start = at(2026, 3, 9, 18, 0, 0);
        let end = at(2026, 3, 19, 18, 0, 0);
        let countdown = remaining(at(2026, 3, 9, 17, 0, 0), start, end);
        assert_eq!(countdown.phase, Phase::BeforeWindow);
        assert_eq!(countdown.hours, 1);
    }

    #[test]
    fn test_to_arabic_digits() {
        assert_eq!(to_arabic_digits(0), "٠");
        assert_eq!(to_arabic_digits(2025), "٢٠٢٥");
        assert_eq!(to_arabic_digits(-7), "-٧");
    }
}
