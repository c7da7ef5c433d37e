use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use super::Health;

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// A repository entry as delivered by the feed.
///
/// Fields are read one at a time so a malformed value only costs that field
/// its default, never the whole record.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RepoRecord {
    pub name: String,
    pub full_name: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub health: Health,
    pub open_issues: u64,
    pub updated_at: Option<String>,
    #[serde(skip)]
    pub updated: Option<DateTime<Utc>>,
    pub default_branch: Option<String>,
}

impl RepoRecord {
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        let updated_at = text(obj, "updated_at");
        let updated = updated_at.as_deref().and_then(parse_timestamp);

        Self {
            name: text(obj, "name").unwrap_or_default(),
            full_name: non_empty(obj, "full_name"),
            url: non_empty(obj, "url"),
            description: text(obj, "description"),
            language: non_empty(obj, "language"),
            health: Health::from_feed(obj.get("health").and_then(Value::as_str)),
            open_issues: issue_count(obj.get("open_issues")),
            updated_at,
            updated,
            default_branch: non_empty(obj, "default_branch"),
        }
    }

    /// Converts a whole feed array. Elements that are not objects are kept as
    /// empty records so positions and counts still line up with the feed.
    pub fn from_values(values: &[Value]) -> Vec<Self> {
        values
            .iter()
            .enumerate()
            .map(|(idx, value)| {
                if !value.is_object() {
                    log::warn!("feed entry {} is not an object, using defaults", idx);
                }
                Self::from_value(value)
            })
            .collect()
    }

    pub fn display_name(&self) -> &str {
        if !self.name.is_empty() {
            return &self.name;
        }
        self.full_name.as_deref().unwrap_or("Unnamed repo")
    }
}

fn text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

fn non_empty(obj: &Map<String, Value>, key: &str) -> Option<String> {
    text(obj, key).filter(|s| !s.is_empty())
}

fn issue_count(value: Option<&Value>) -> u64 {
    let Some(value) = value else {
        return 0;
    };
    value
        .as_u64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f as u64)
        })
        .unwrap_or(0)
}

/// Lenient ISO-8601 parsing: RFC 3339, zone-less date-times (taken as UTC)
/// and bare dates (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
