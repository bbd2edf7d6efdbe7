//! Date helper functions

use chrono::{DateTime, Duration, Local};

/// Humanized distance between `date` and `now`, with a suffix for the
/// direction ("3 days ago" / "in 3 days").
///
/// `now` is passed in explicitly so callers control the clock; commands
/// pass `Local::now()`, tests pass a fixed value.
pub fn relative_date(date: &DateTime<Local>, now: DateTime<Local>) -> String {
    let duration = now.signed_duration_since(*date);

    if duration.num_seconds() < 0 {
        format!("in {}", distance(duration.abs()))
    } else {
        format!("{} ago", distance(duration))
    }
}

fn distance(duration: Duration) -> String {
    let seconds = duration.num_seconds();
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 60 {
        "a few seconds".to_string()
    } else if minutes == 1 {
        "a minute".to_string()
    } else if minutes < 60 {
        format!("{} minutes", minutes)
    } else if hours == 1 {
        "an hour".to_string()
    } else if hours < 24 {
        format!("{} hours", hours)
    } else if days == 1 {
        "a day".to_string()
    } else if days < 30 {
        format!("{} days", days)
    } else if days < 365 {
        let months = days / 30;
        if months == 1 {
            "a month".to_string()
        } else {
            format!("{} months", months)
        }
    } else {
        let years = days / 365;
        if years == 1 {
            "a year".to_string()
        } else {
            format!("{} years", years)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn test_past_dates() {
        let now = at(2024, 3, 10, 12, 0);
        assert_eq!(relative_date(&at(2024, 3, 10, 11, 59), now), "a minute ago");
        assert_eq!(relative_date(&at(2024, 3, 10, 11, 15), now), "45 minutes ago");
        assert_eq!(relative_date(&at(2024, 3, 10, 9, 0), now), "3 hours ago");
        assert_eq!(relative_date(&at(2024, 3, 9, 12, 0), now), "a day ago");
        assert_eq!(relative_date(&at(2024, 3, 7, 12, 0), now), "3 days ago");
        assert_eq!(relative_date(&at(2023, 12, 10, 12, 0), now), "3 months ago");
        assert_eq!(relative_date(&at(2022, 3, 10, 12, 0), now), "2 years ago");
    }

    #[test]
    fn test_future_dates() {
        let now = at(2024, 3, 10, 12, 0);
        assert_eq!(relative_date(&at(2024, 3, 13, 12, 0), now), "in 3 days");
        assert_eq!(relative_date(&at(2024, 3, 10, 15, 0), now), "in 3 hours");
    }

    #[test]
    fn test_just_now() {
        let now = at(2024, 3, 10, 12, 0);
        assert_eq!(relative_date(&now, now), "a few seconds ago");
    }
}
