//! SAML time formatting.
//!
//! SAML `dateTime` values are always expressed in UTC with a `Z` suffix.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::{SamlError, SamlResult};

/// Formats an instant as a SAML time string (`YYYY-MM-DDThh:mm:ssZ`).
///
/// Sub-second precision is dropped.
#[must_use]
pub fn saml_time(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Parses a SAML time string, accepting optional fractional seconds.
pub fn parse_saml_time(value: &str) -> SamlResult<DateTime<Utc>> {
    let trimmed = value
        .strip_suffix('Z')
        .ok_or_else(|| SamlError::InvalidRequest(format!("SAML time must be UTC: {value}")))?;

    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| SamlError::InvalidRequest(format!("invalid SAML time '{value}': {e}")))
}
