use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

/// Timestamp layout the backend expects on writes: UTC with millisecond precision.
pub const WIRE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Layout used when showing timestamps in lists.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format a timestamp the way the backend expects it on writes.
#[must_use]
pub fn format_wire_timestamp(at: DateTime<Utc>) -> String {
    at.format(WIRE_TIMESTAMP_FORMAT).to_string()
}

/// Parse a timestamp returned by the backend.
///
/// Accepts RFC 3339 and offset-less `YYYY-MM-DDTHH:MM:SS[.fff]`, which is read as UTC.
#[must_use]
pub fn parse_backend_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Parse a `datetime-local` style input (`YYYY-MM-DDTHH:MM[:SS]`) in the local time zone.
#[must_use]
pub fn parse_local_input(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}

/// Render a timestamp for list display in the local time zone.
#[must_use]
pub fn format_display(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format(DISPLAY_FORMAT).to_string()
}

/// Serde adapter for required timestamps written in [`WIRE_TIMESTAMP_FORMAT`].
pub mod wire_timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub fn serialize<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_wire_timestamp(*at))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_backend_timestamp(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
    }
}

/// Serde adapter for optional timestamps read leniently from the backend.
pub mod lenient_timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        at: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match at {
            Some(at) => serializer.serialize_str(&super::format_wire_timestamp(*at)),
            None => serializer.serialize_none(),
        }
    }

    /// Unparsable values become `None` rather than failing the whole list.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(super::parse_backend_timestamp))
    }
}

/// Deterministic timestamp for tests and examples (2023-11-14T22:13:20Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// Returns a deterministic `DateTime<Utc>` for tests and doc examples.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}
