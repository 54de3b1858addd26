//! UTC instants carried by events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn orders_chronologically() {
        let first = Timestamp::from(Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap());
        let second = Timestamp::from(Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 1).unwrap());
        assert!(first < second);
    }

    #[test]
    fn displays_and_serializes_as_rfc3339() {
        let ts = Timestamp::from(Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap());
        assert_eq!(ts.to_string(), "2026-03-01T08:00:00+00:00");
        assert_eq!(
            serde_json::to_string(&ts).unwrap(),
            "\"2026-03-01T08:00:00Z\""
        );
    }
}
