#[cfg(test)]
#[path = "timestamp_test.rs"]
mod tests;

use std::fmt;

use chrono::DateTime;
use chrono::NaiveDateTime;
use chrono::TimeZone;
use chrono::Utc;
use serde_derive::Deserialize;
use serde_derive::Serialize;

/// Wire timestamp, kept verbatim so mapping to display records never changes
/// the value. The backend emits naive ISO-8601 datetimes, which are read as
/// UTC when parsed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    pub fn new(raw: &str) -> Timestamp {
        return Timestamp(raw.to_string());
    }

    pub fn as_str(&self) -> &str {
        return &self.0;
    }

    pub fn parse(&self) -> Option<DateTime<Utc>> {
        if let Ok(date) = DateTime::parse_from_rfc3339(&self.0) {
            return Some(date.with_timezone(&Utc));
        }

        let naive = NaiveDateTime::parse_from_str(&self.0, "%Y-%m-%dT%H:%M:%S%.f").ok()?;
        return Some(Utc.from_utc_datetime(&naive));
    }

    /// Short form used in terminal output. Falls back to the raw text when
    /// the backend sends something unparsable.
    pub fn display(&self) -> String {
        if let Some(date) = self.parse() {
            return date.format("%Y-%m-%d %H:%M").to_string();
        }

        return self.0.to_string();
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
