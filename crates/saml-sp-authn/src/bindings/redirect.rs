//! HTTP-Redirect Binding.
//!
//! Places a deflated, base64-encoded request in the `SAMLRequest` query
//! parameter of the identity provider's SSO URL.

use super::{RELAY_STATE_PARAM, SAML_REQUEST_PARAM};

/// HTTP-Redirect binding helpers.
pub struct HttpRedirectBinding;

impl HttpRedirectBinding {
    /// Builds the redirect URL for an already-encoded request.
    ///
    /// `encoded` is the output of [`super::encode`] with deflate enabled;
    /// it is percent-encoded here. Uses `&` when the destination already
    /// carries a query string.
    #[must_use]
    pub fn request_url(destination: &str, encoded: &str, relay_state: Option<&str>) -> String {
        let separator = if destination.contains('?') { '&' } else { '?' };

        let mut url = format!(
            "{destination}{separator}{SAML_REQUEST_PARAM}={}",
            urlencoding::encode(encoded)
        );

        if let Some(rs) = relay_state {
            url.push_str(&format!("&{RELAY_STATE_PARAM}={}", urlencoding::encode(rs)));
        }

        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_request_and_relay_state() {
        let url = HttpRedirectBinding::request_url(
            "https://idp.example.com/sso",
            "ab+c/d==",
            Some("https://sp.example.com/home"),
        );
        assert_eq!(
            url,
            "https://idp.example.com/sso?SAMLRequest=ab%2Bc%2Fd%3D%3D\
             &RelayState=https%3A%2F%2Fsp.example.com%2Fhome"
        );
    }

    #[test]
    fn url_with_existing_query() {
        let url = HttpRedirectBinding::request_url(
            "https://idp.example.com/sso?existing=param",
            "abc",
            None,
        );

        // Should use & not ? since URL already has query params
        assert_eq!(url, "https://idp.example.com/sso?existing=param&SAMLRequest=abc");
    }
}
