//! Serde helpers for service timestamps.
//!
//! The service emits ISO-8601 timestamps that may or may not carry a UTC
//! offset; both forms decode to `DateTime<Utc>`. Offsetless values are
//! taken as UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    raw.parse::<NaiveDateTime>()
        .map(|naive| naive.and_utc())
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Datelike, Timelike, Utc};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(with = "super")]
        at: DateTime<Utc>,
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let w: Wrapper = serde_json::from_str(r#"{"at": "2025-03-01T09:30:00+02:00"}"#).unwrap();
        assert_eq!(w.at.hour(), 7);
    }

    #[test]
    fn parses_rfc3339_zulu() {
        let w: Wrapper = serde_json::from_str(r#"{"at": "2025-03-01T09:30:00Z"}"#).unwrap();
        assert_eq!(w.at.year(), 2025);
        assert_eq!(w.at.hour(), 9);
    }

    #[test]
    fn parses_offsetless_as_utc() {
        let w: Wrapper = serde_json::from_str(r#"{"at": "2025-03-01T09:30:00.123456"}"#).unwrap();
        assert_eq!(w.at.hour(), 9);
        assert_eq!(w.at.minute(), 30);
    }

    #[test]
    fn rejects_garbage() {
        let result: Result<Wrapper, _> = serde_json::from_str(r#"{"at": "not a time"}"#);
        assert!(result.is_err());
    }
}
