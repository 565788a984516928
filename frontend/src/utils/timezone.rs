use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Wall-clock time of `dt` in the configured zone, or the browser's zone when unset.
/// Unknown zone names fall back to UTC.
pub fn local_time(dt: DateTime<Utc>, tz_str: Option<&str>) -> NaiveDateTime {
    match tz_str {
        Some(tz_str) => {
            let tz: Tz = tz_str.parse().unwrap_or(chrono_tz::UTC);
            dt.with_timezone(&tz).naive_local()
        }
        None => dt.with_timezone(&Local).naive_local(),
    }
}

/// Current local time, compared against the countdown window.
pub fn now_in_tz(tz_str: Option<&str>) -> NaiveDateTime {
    local_time(Utc::now(), tz_str)
}

/// Get "today" for the daily progress reset
pub fn today_in_tz(tz_str: Option<&str>) -> NaiveDate {
    now_in_tz(tz_str).date()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_utc_stays_the_same() {
        let dt = Utc.with_ymd_and_hms(2025, 3, 21, 12, 30, 0).unwrap();
        let local = local_time(dt, Some("UTC"));
        assert_eq!(local.hour(), 12);
        assert_eq!(local.minute(), 30);
    }

    #[test]
    fn test_cairo_timezone_conversion() {
        // Cairo is UTC+2 in March
        let dt = Utc.with_ymd_and_hms(2025, 3, 21, 21, 59, 59).unwrap();
        let local = local_time(dt, Some("Africa/Cairo"));
        assert_eq!(local.to_string(), "2025-03-21 23:59:59");
    }

    #[test]
    fn test_day_boundary_follows_timezone() {
        // 23:30 UTC is already the next day in Riyadh (UTC+3)
        let dt = Utc.with_ymd_and_hms(2025, 3, 21, 23, 30, 0).unwrap();
        let riyadh = local_time(dt, Some("Asia/Riyadh")).date();
        assert_eq!(riyadh, NaiveDate::from_ymd_opt(2025, 3, 22).unwrap());
    }

    #[test]
    fn test_invalid_timezone_defaults_to_utc() {
        let dt = Utc.with_ymd_and_hms(2025, 3, 21, 12, 30, 0).unwrap();
        assert_eq!(local_time(dt, Some("Invalid/Timezone")).hour(), 12);
    }
}
