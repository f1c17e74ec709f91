//! HTTP-POST Binding.
//!
//! Delivers a base64-encoded (not deflated) request through an HTML form
//! that the browser submits to the identity provider.

use quick_xml::escape::escape;

use super::{RELAY_STATE_PARAM, SAML_REQUEST_PARAM};

/// HTTP-POST binding helpers.
pub struct HttpPostBinding;

impl HttpPostBinding {
    /// Builds an auto-submitting HTML form for an already-encoded request.
    ///
    /// `encoded` is the output of [`super::encode`] with deflate disabled.
    #[must_use]
    pub fn request_form(destination: &str, encoded: &str, relay_state: Option<&str>) -> String {
        let relay_state_input = relay_state
            .map(|rs| {
                format!(
                    r#"<input type="hidden" name="{RELAY_STATE_PARAM}" value="{}"/>"#,
                    escape(rs)
                )
            })
            .unwrap_or_default();

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>SAML POST Binding</title>
</head>
<body onload="document.forms[0].submit()">
    <noscript>
        <p>JavaScript is disabled. Click the button below to continue.</p>
    </noscript>
    <form method="post" action="{}">
        <input type="hidden" name="{SAML_REQUEST_PARAM}" value="{}"/>
        {}
        <noscript>
            <input type="submit" value="Continue"/>
        </noscript>
    </form>
</body>
</html>"#,
            escape(destination),
            escape(encoded),
            relay_state_input
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_carries_request_and_relay_state() {
        let html = HttpPostBinding::request_form(
            "https://idp.example.com/sso",
            "PHNhbWxwOkF1dGhuUmVxdWVzdC8+",
            Some("state123"),
        );

        assert!(html.contains(r#"action="https://idp.example.com/sso""#));
        assert!(html.contains(
            r#"<input type="hidden" name="SAMLRequest" value="PHNhbWxwOkF1dGhuUmVxdWVzdC8+"/>"#
        ));
        assert!(html.contains(r#"<input type="hidden" name="RelayState" value="state123"/>"#));
    }

    #[test]
    fn form_without_relay_state() {
        let html = HttpPostBinding::request_form("https://idp.example.com/sso", "abc", None);
        assert!(!html.contains("RelayState"));
    }

    #[test]
    fn form_values_are_escaped() {
        let html = HttpPostBinding::request_form(
            "https://idp.example.com/sso?a=1&b=\"2\"",
            "abc",
            Some(r#"<script>alert('x')</script>"#),
        );

        assert!(html.contains(r#"action="https://idp.example.com/sso?a=1&amp;b=&quot;2&quot;""#));
        assert!(html.contains(
            r#"name="RelayState" value="&lt;script&gt;alert(&apos;x&apos;)&lt;/script&gt;"/>"#
        ));
        assert!(!html.contains("<script>"));
    }
}
