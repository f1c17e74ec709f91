//! SAML Name ID types.
//!
//! Name identifiers name the subject of a request, and the NameID policy
//! tells the identity provider which identifier format to return.

use crate::settings::SecurityPolicy;
use crate::xml::XmlElement;

use super::{NameIdFormat, CM_BEARER};

/// SAML Name ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameId {
    /// The actual identifier value.
    pub value: String,

    /// The format of the name identifier.
    pub format: Option<String>,
}

impl NameId {
    /// Creates a new name ID with the given value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            format: None,
        }
    }

    /// Sets the format URI for this name ID.
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Builds a `saml:Subject` naming this identifier with a bearer
    /// confirmation and no confirmation data.
    #[must_use]
    pub fn to_subject_element(&self) -> XmlElement {
        let name_id = XmlElement::new("saml:NameID")
            .attr_opt("Format", self.format.as_deref())
            .text(self.value.as_str());

        XmlElement::new("saml:Subject")
            .child(name_id)
            .child(XmlElement::new("saml:SubjectConfirmation").attr("Method", CM_BEARER))
    }
}

/// Name ID policy for authentication requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameIdPolicy {
    /// The requested name ID format.
    pub format: Option<String>,

    /// Whether the identity provider may create a new identifier.
    pub allow_create: bool,
}

impl NameIdPolicy {
    /// Creates a policy requesting a specific format URI.
    #[must_use]
    pub fn with_format(format: impl Into<String>) -> Self {
        Self {
            format: Some(format.into()),
            allow_create: false,
        }
    }

    /// Sets whether new identifiers can be created.
    #[must_use]
    pub const fn allow_create(mut self, allow: bool) -> Self {
        self.allow_create = allow;
        self
    }

    /// Builds the `samlp:NameIDPolicy` element.
    #[must_use]
    pub fn to_element(&self) -> XmlElement {
        XmlElement::new("samlp:NameIDPolicy")
            .attr_opt("Format", self.format.as_deref())
            .attr("AllowCreate", if self.allow_create { "true" } else { "false" })
    }
}

/// Selects the NameID format to request in the NameID policy.
///
/// This is a lookup only: when the policy wants an encrypted NameID the
/// encrypted format identifier is advertised, otherwise the configured
/// format is used unchanged. Actual encryption happens at the identity
/// provider.
#[must_use]
pub fn name_id_policy_format<'a>(configured: &'a str, policy: &SecurityPolicy) -> &'a str {
    if policy.want_name_id_encrypted {
        NameIdFormat::Encrypted.uri()
    } else {
        configured
    }
}
