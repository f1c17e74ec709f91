//! SAML 2.0 constants and URIs.
//!
//! Namespaces, binding and NameID format URIs, and the authentication
//! context classes an AuthnRequest can ask for.

/// SAML 2.0 assertion namespace URI.
pub const SAML_NS: &str = "urn:oasis:names:tc:SAML:2.0:assertion";

/// SAML 2.0 protocol namespace URI.
pub const SAMLP_NS: &str = "urn:oasis:names:tc:SAML:2.0:protocol";

/// XML Digital Signature namespace URI.
pub const XMLDSIG_NS: &str = "http://www.w3.org/2000/09/xmldsig#";

/// XML Encryption namespace URI.
pub const XMLENC_NS: &str = "http://www.w3.org/2001/04/xmlenc#";

/// BSI eID (TR-03130) namespace URI.
pub const EID_NS: &str = "http://bsi.bund.de/eID/";

/// Bearer subject confirmation method.
pub const CM_BEARER: &str = "urn:oasis:names:tc:SAML:2.0:cm:bearer";

/// SAML protocol version emitted on every request.
pub const SAML_VERSION: &str = "2.0";

/// Browser bindings an SP endpoint can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SamlBinding {
    /// Form POST; the default for assertion consumer services.
    HttpPost,
    /// Query-string redirect.
    HttpRedirect,
}

impl SamlBinding {
    /// Binding URI written to `ProtocolBinding`.
    #[must_use]
    pub const fn uri(&self) -> &'static str {
        match self {
            Self::HttpPost => "urn:oasis:names:tc:SAML:2.0:bindings:HTTP-POST",
            Self::HttpRedirect => "urn:oasis:names:tc:SAML:2.0:bindings:HTTP-Redirect",
        }
    }
}

/// NameID formats an SP can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NameIdFormat {
    /// No preference; the settings default.
    #[default]
    Unspecified,
    /// Email address.
    Email,
    /// Entity identifier.
    Entity,
    /// Pairwise persistent identifier.
    Persistent,
    /// One-time transient identifier.
    Transient,
    /// Encrypted identifier, requested when the policy wants NameID encryption.
    Encrypted,
}

impl NameIdFormat {
    /// Format URI.
    #[must_use]
    pub const fn uri(&self) -> &'static str {
        match self {
            Self::Unspecified => "urn:oasis:names:tc:SAML:1.1:nameid-format:unspecified",
            Self::Email => "urn:oasis:names:tc:SAML:1.1:nameid-format:emailAddress",
            Self::Entity => "urn:oasis:names:tc:SAML:2.0:nameid-format:entity",
            Self::Persistent => "urn:oasis:names:tc:SAML:2.0:nameid-format:persistent",
            Self::Transient => "urn:oasis:names:tc:SAML:2.0:nameid-format:transient",
            Self::Encrypted => "urn:oasis:names:tc:SAML:2.0:nameid-format:encrypted",
        }
    }
}

/// Authentication context classes for `RequestedAuthnContext`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthnContextClass {
    /// Password over an unprotected channel.
    Password,
    /// Password over TLS; requested when the setting is a plain `true`.
    PasswordProtectedTransport,
    /// X.509 client certificate.
    X509,
}

impl AuthnContextClass {
    /// Class reference URI.
    #[must_use]
    pub const fn uri(&self) -> &'static str {
        match self {
            Self::Password => "urn:oasis:names:tc:SAML:2.0:ac:classes:Password",
            Self::PasswordProtectedTransport => {
                "urn:oasis:names:tc:SAML:2.0:ac:classes:PasswordProtectedTransport"
            }
            Self::X509 => "urn:oasis:names:tc:SAML:2.0:ac:classes:X509",
        }
    }
}

/// XML encryption algorithm identifiers advertised in request extensions.
pub mod encryption_algorithms {
    /// AES-256 in GCM mode.
    pub const AES256_GCM: &str = "http://www.w3.org/2001/04/xmlenc#aes256-gcm";

    /// RSA-OAEP key transport.
    pub const RSA_OAEP: &str = "http://www.w3.org/2001/04/xmlenc#rsa-oaep";

    /// `EncryptedData` type for an encrypted element.
    pub const TYPE_ELEMENT: &str = "http://www.w3.org/2001/04/xmlenc#Element";
}
