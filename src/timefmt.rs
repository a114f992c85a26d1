/// Long-form date formatting for millisecond timestamps.
///
/// Output follows US English conventions: full month name, day without
/// leading zero, numeric year (e.g. "January 1, 2024").
use chrono::{DateTime, Datelike, Local, LocalResult, TimeZone, Utc};
use std::fmt::Display;

/// Returned when no timestamp was supplied.
pub const PLACEHOLDER: &str = "WOW TIME";

/// Returned when the timestamp does not map to a representable date.
pub const INVALID_DATE: &str = "Invalid Date";

/// Timezone used to interpret a timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Zone {
    /// The host's local timezone
    #[default]
    Local,
    Utc,
}

/// Format an optional millisecond timestamp in the local timezone.
///
/// `None` and `Some(0)` both mean "no timestamp" and yield [`PLACEHOLDER`].
pub fn format_date(timestamp: Option<i64>) -> String {
    format_date_in(timestamp, &Local)
}

/// Same as [`format_date`], with the timezone chosen by the caller.
pub fn format_date_in<Tz>(timestamp: Option<i64>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let millis = match timestamp {
        Some(ms) if ms != 0 => ms,
        _ => {
            tracing::trace!("no timestamp, using placeholder");
            return PLACEHOLDER.to_string();
        }
    };

    match tz.timestamp_millis_opt(millis) {
        LocalResult::Single(datetime) => long_date(&datetime),
        _ => {
            tracing::trace!(millis, "timestamp out of range");
            INVALID_DATE.to_string()
        }
    }
}

/// Format in the given [`Zone`].
pub fn format_date_zoned(timestamp: Option<i64>, zone: Zone) -> String {
    match zone {
        Zone::Local => format_date_in(timestamp, &Local),
        Zone::Utc => format_date_in(timestamp, &Utc),
    }
}

fn long_date<Tz>(datetime: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let month = datetime.format("%B");
    let day = datetime.day();
    let (common_era, year) = datetime.year_ce();
    if common_era {
        format!("{} {}, {}", month, day, year)
    } else {
        format!("{} {}, {} BC", month, day, year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(ts: Option<i64>) -> String {
        format_date_in(ts, &Utc)
    }

    #[test]
    fn test_missing_timestamp_is_placeholder() {
        assert_eq!(utc(None), PLACEHOLDER);
        assert_eq!(format_date(None), "WOW TIME");
    }

    #[test]
    fn test_zero_is_placeholder() {
        assert_eq!(utc(Some(0)), PLACEHOLDER);
        assert_eq!(format_date(Some(0)), PLACEHOLDER);
        assert_eq!(format_date_zoned(Some(0), Zone::Utc), PLACEHOLDER);
    }

    #[test]
    fn test_new_year_2024() {
        assert_eq!(utc(Some(1_704_067_200_000)), "January 1, 2024");
    }

    #[test]
    fn test_day_has_no_leading_zero() {
        // 2023-03-05T07:06:40Z
        assert_eq!(utc(Some(1_678_000_000_000)), "March 5, 2023");
    }

    #[test]
    fn test_last_millisecond_of_day() {
        assert_eq!(utc(Some(1_704_067_199_999)), "December 31, 2023");
    }

    #[test]
    fn test_before_epoch() {
        assert_eq!(utc(Some(-86_400_000)), "December 31, 1969");
        assert_eq!(utc(Some(-1)), "December 31, 1969");
    }

    #[test]
    fn test_year_is_not_padded() {
        let ts = Utc
            .with_ymd_and_hms(999, 7, 4, 12, 0, 0)
            .unwrap()
            .timestamp_millis();
        assert_eq!(utc(Some(ts)), "July 4, 999");
    }

    #[test]
    fn test_before_common_era() {
        let ts = Utc
            .with_ymd_and_hms(0, 1, 1, 0, 0, 0)
            .unwrap()
            .timestamp_millis();
        assert_eq!(utc(Some(ts)), "January 1, 1 BC");
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(utc(Some(i64::MAX)), INVALID_DATE);
        assert_eq!(utc(Some(i64::MIN)), INVALID_DATE);
        assert_eq!(format_date(Some(i64::MAX)), INVALID_DATE);
    }

    #[test]
    fn test_zoned_utc_matches_explicit_tz() {
        let ts = Some(1_700_000_000_000);
        assert_eq!(format_date_zoned(ts, Zone::Utc), utc(ts));
        assert_eq!(format_date_zoned(ts, Zone::Local), format_date(ts));
    }

    #[test]
    fn test_repeated_calls_agree() {
        let ts = Some(1_704_067_200_000);
        let first = format_date(ts);
        for _ in 0..10 {
            assert_eq!(format_date(ts), first);
        }
    }

    #[test]
    fn test_concurrent_calls_agree() {
        let ts = Some(1_678_000_000_000);
        let results: Vec<String> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8).map(|_| s.spawn(move || utc(ts))).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(results.iter().all(|r| r == "March 5, 2023"));
    }
}
