//! SAML error types.
//!
//! Provides error types for settings loading, transport encoding and
//! decoding of outbound SAML messages.

use thiserror::Error;

/// Result type for SAML operations.
pub type SamlResult<T> = Result<T, SamlError>;

/// SAML service provider errors.
#[derive(Debug, Error)]
pub enum SamlError {
    /// Settings could not be read or deserialized.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Invalid SAML request format or content.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    XmlParse(String),

    /// Base64 decoding error.
    #[error("base64 decode error: {0}")]
    Base64Decode(String),

    /// Deflate compression or decompression error.
    #[error("deflate error: {0}")]
    Deflate(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<quick_xml::Error> for SamlError {
    fn from(err: quick_xml::Error) -> Self {
        Self::XmlParse(err.to_string())
    }
}

impl From<base64::DecodeError> for SamlError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Base64Decode(err.to_string())
    }
}

impl From<serde_json::Error> for SamlError {
    fn from(err: serde_json::Error) -> Self {
        Self::Configuration(err.to_string())
    }
}

impl From<std::io::Error> for SamlError {
    fn from(err: std::io::Error) -> Self {
        Self::Deflate(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_maps_to_deflate() {
        let err = std::io::Error::new(std::io::ErrorKind::InvalidData, "corrupt deflate stream");
        let err: SamlError = err.into();
        assert!(matches!(err, SamlError::Deflate(_)));
        assert_eq!(err.to_string(), "deflate error: corrupt deflate stream");
    }

    #[test]
    fn json_error_maps_to_configuration() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SamlError = err.into();
        assert!(matches!(err, SamlError::Configuration(_)));
        assert!(err.to_string().starts_with("configuration error:"));
    }
}
