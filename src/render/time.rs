use chrono::{DateTime, Utc};

const HOUR_MS: i64 = 3_600_000;
const DAY_MS: i64 = 86_400_000;

/// "3 days ago" style text. Future timestamps read as "just now".
pub fn relative_time(then: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(then) = then else {
        return "unknown".to_string();
    };

    let diff_ms = (now - then).num_milliseconds();
    let days = diff_ms.div_euclid(DAY_MS);

    if days < 1 {
        let hours = diff_ms.div_euclid(HOUR_MS);
        if hours <= 0 {
            return "just now".to_string();
        }
        return ago(hours, "hour");
    }
    if days < 30 {
        return ago(days, "day");
    }

    let months = days / 30;
    if months < 12 {
        return ago(months, "month");
    }
    ago(months / 12, "year")
}

fn ago(n: i64, unit: &str) -> String {
    format!("{} {}{} ago", n, unit, if n == 1 { "" } else { "s" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn buckets() {
        let now = now();
        let cases = [
            (Duration::minutes(5), "just now"),
            (Duration::hours(1), "1 hour ago"),
            (Duration::hours(5), "5 hours ago"),
            (Duration::days(1), "1 day ago"),
            (Duration::days(29), "29 days ago"),
            (Duration::days(30), "1 month ago"),
            (Duration::days(200), "6 months ago"),
            (Duration::days(365), "1 year ago"),
            (Duration::days(800), "2 years ago"),
        ];
        for (age, expected) in cases {
            assert_eq!(relative_time(Some(now - age), now), expected, "age {:?}", age);
        }
    }

    #[test]
    fn missing_and_future_timestamps() {
        let now = now();
        assert_eq!(relative_time(None, now), "unknown");
        assert_eq!(relative_time(Some(now + Duration::days(3)), now), "just now");
    }
}
