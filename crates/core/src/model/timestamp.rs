//! Server timestamps arrive either as RFC 3339 or as naive UTC
//! (`2025-01-01T12:34:56.789012`); both decode to `NaiveDateTime` in UTC.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, de::Error as _};

fn parse(raw: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_utc())
        .ok()
        .or_else(|| raw.parse::<NaiveDateTime>().ok())
}

pub(crate) fn deserialize_optional<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    parse(&raw)
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("invalid timestamp `{raw}`")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .and_then(|d| d.and_hms_micro_opt(12, 34, 56, 789_012))
            .unwrap()
    }

    #[test]
    fn accepts_naive_and_offset_forms() {
        assert_eq!(parse("2025-01-01T12:34:56.789012"), Some(noon()));
        assert_eq!(parse("2025-01-01T12:34:56.789012Z"), Some(noon()));
        assert_eq!(parse("2025-01-01T14:34:56.789012+02:00"), Some(noon()));
        assert_eq!(parse("yesterday"), None);
    }
}
