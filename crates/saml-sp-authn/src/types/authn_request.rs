//! SAML AuthnRequest types.
//!
//! Per-call options for an authentication request and the immutable
//! message produced by the builder.

use crate::bindings;
use crate::error::SamlResult;
use crate::xml::XmlElement;

/// Per-request options.
///
/// Defaults match the usual SP-initiated login: no forced or passive
/// authentication, a NameID policy is sent, no subject is named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthnRequestOptions {
    /// Whether the IdP must authenticate the user directly.
    pub force_authn: bool,

    /// Whether the IdP must not interact with the user.
    pub is_passive: bool,

    /// Whether to include a `NameIDPolicy` element.
    pub set_name_id_policy: bool,

    /// Subject the IdP should authenticate, if known.
    pub name_id_value_req: Option<String>,
}

impl Default for AuthnRequestOptions {
    fn default() -> Self {
        Self {
            force_authn: false,
            is_passive: false,
            set_name_id_policy: true,
            name_id_value_req: None,
        }
    }
}

impl AuthnRequestOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets force authentication.
    #[must_use]
    pub const fn force_authn(mut self, force: bool) -> Self {
        self.force_authn = force;
        self
    }

    /// Sets passive authentication.
    #[must_use]
    pub const fn is_passive(mut self, passive: bool) -> Self {
        self.is_passive = passive;
        self
    }

    /// Sets whether a NameID policy is sent.
    #[must_use]
    pub const fn set_name_id_policy(mut self, set: bool) -> Self {
        self.set_name_id_policy = set;
        self
    }

    /// Names the subject to authenticate.
    #[must_use]
    pub fn with_name_id_value(mut self, value: impl Into<String>) -> Self {
        self.name_id_value_req = Some(value.into());
        self
    }
}

/// Requested authentication context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestedAuthnContext {
    /// Comparison method; `None` omits the attribute.
    pub comparison: Option<String>,

    /// Acceptable authentication context class references, in order.
    pub authn_context_class_refs: Vec<String>,
}

impl RequestedAuthnContext {
    /// Creates a context over the given class references.
    #[must_use]
    pub fn new<I, S>(class_refs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            comparison: None,
            authn_context_class_refs: class_refs.into_iter().map(Into::into).collect(),
        }
    }

    /// Sets the comparison method.
    #[must_use]
    pub fn with_comparison(mut self, comparison: Option<&str>) -> Self {
        self.comparison = comparison.map(str::to_string);
        self
    }

    /// Builds the `samlp:RequestedAuthnContext` element.
    #[must_use]
    pub fn to_element(&self) -> XmlElement {
        self.authn_context_class_refs.iter().fold(
            XmlElement::new("samlp:RequestedAuthnContext")
                .attr_opt("Comparison", self.comparison.as_deref()),
            |element, class_ref| {
                element.child(XmlElement::new("saml:AuthnContextClassRef").text(class_ref.as_str()))
            },
        )
    }
}

/// A built SAML authentication request.
///
/// The message is immutable: the id, timestamp and serialized document are
/// fixed at construction. Encoding always works on the stored XML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthnRequestMessage {
    id: String,
    issue_instant: String,
    xml: String,
    destination: String,
    compress_requests: bool,
}

impl AuthnRequestMessage {
    pub(crate) fn new(
        id: String,
        issue_instant: String,
        xml: String,
        destination: String,
        compress_requests: bool,
    ) -> Self {
        Self {
            id,
            issue_instant,
            xml,
            destination,
            compress_requests,
        }
    }

    /// Returns the request ID; match it against `InResponseTo` later.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the formatted `IssueInstant`.
    #[must_use]
    pub fn issue_instant(&self) -> &str {
        &self.issue_instant
    }

    /// Returns the serialized request document.
    #[must_use]
    pub fn xml(&self) -> &str {
        &self.xml
    }

    /// Returns the identity provider URL the request is addressed to.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Returns the transport-encoded request.
    ///
    /// `deflate` selects raw DEFLATE before base64; `None` uses the
    /// compress-requests setting captured when the message was built.
    pub fn request(&self, deflate: Option<bool>) -> SamlResult<String> {
        bindings::encode(&self.xml, deflate.unwrap_or(self.compress_requests))
    }
}
