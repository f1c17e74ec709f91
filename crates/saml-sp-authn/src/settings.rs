//! Service provider settings.
//!
//! Settings are an immutable value handed to the request builder on every
//! call. They are usually deserialized from a JSON document laid out the
//! way SAML toolkits conventionally store SP/IdP settings:
//!
//! ```json
//! {
//!   "sp": {
//!     "entityId": "https://sp.example.com/metadata",
//!     "assertionConsumerService": { "url": "https://sp.example.com/acs" },
//!     "NameIDFormat": "urn:oasis:names:tc:SAML:1.1:nameid-format:emailAddress"
//!   },
//!   "idp": {
//!     "entityId": "https://idp.example.com",
//!     "singleSignOnService": { "url": "https://idp.example.com/sso" }
//!   },
//!   "security": { "requestedAuthnContext": true },
//!   "organization": { "en-US": { "displayname": "Example Co" } },
//!   "compress": { "requests": true }
//! }
//! ```
//!
//! No semantic validation happens here; missing values simply produce
//! empty strings in the generated XML.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{SamlError, SamlResult};
use crate::types::{AuthnContextClass, NameIdFormat, SamlBinding};

/// Complete settings consumed when building authentication requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Service provider configuration.
    #[serde(default)]
    pub sp: ServiceProviderConfig,

    /// Identity provider configuration.
    #[serde(default)]
    pub idp: IdentityProviderConfig,

    /// Security policy.
    #[serde(default)]
    pub security: SecurityPolicy,

    /// Organization display metadata keyed by language tag.
    #[serde(default)]
    pub organization: OrganizationInfo,

    /// AuthnRequest extensions keyed by extension name.
    #[serde(default)]
    pub authn_request_extensions: ExtensionSet,

    /// Compression toggles.
    #[serde(default)]
    pub compress: CompressSettings,
}

impl Settings {
    /// Parses settings from a JSON document.
    pub fn from_json(json: &str) -> SamlResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        tracing::debug!(
            sp_entity_id = %settings.sp.entity_id,
            idp_sso_url = %settings.idp.single_sign_on_service.url,
            "Loaded SAML settings"
        );
        Ok(settings)
    }

    /// Reads and parses settings from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> SamlResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            SamlError::Configuration(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_json(&json)
    }

    /// Returns the identity provider's single sign-on URL.
    #[must_use]
    pub fn idp_sso_url(&self) -> &str {
        &self.idp.single_sign_on_service.url
    }

    /// Returns whether outbound requests are deflated by default.
    #[must_use]
    pub const fn should_compress_requests(&self) -> bool {
        self.compress.requests
    }
}

/// Service provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceProviderConfig {
    /// Entity identifier of this service provider.
    #[serde(default)]
    pub entity_id: String,

    /// Requested NameID format.
    #[serde(rename = "NameIDFormat", default = "default_name_id_format")]
    pub name_id_format: String,

    /// Endpoint receiving the identity provider's response.
    #[serde(default)]
    pub assertion_consumer_service: Endpoint,
}

impl Default for ServiceProviderConfig {
    fn default() -> Self {
        Self {
            entity_id: String::new(),
            name_id_format: default_name_id_format(),
            assertion_consumer_service: Endpoint::default(),
        }
    }
}

fn default_name_id_format() -> String {
    NameIdFormat::Unspecified.uri().to_string()
}

/// Identity provider configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityProviderConfig {
    /// Entity identifier of the identity provider.
    #[serde(default)]
    pub entity_id: String,

    /// Single sign-on endpoint; AuthnRequests are addressed here.
    #[serde(default)]
    pub single_sign_on_service: Endpoint,
}

/// A protocol endpoint: URL plus binding URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Endpoint location.
    #[serde(default)]
    pub url: String,

    /// Binding URI.
    #[serde(default = "default_binding")]
    pub binding: String,
}

impl Endpoint {
    /// Creates an endpoint with the given URL and binding.
    #[must_use]
    pub fn new(url: impl Into<String>, binding: SamlBinding) -> Self {
        Self {
            url: url.into(),
            binding: binding.uri().to_string(),
        }
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            url: String::new(),
            binding: default_binding(),
        }
    }
}

fn default_binding() -> String {
    SamlBinding::HttpPost.uri().to_string()
}

/// Security policy applied to outbound requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityPolicy {
    /// Ask the identity provider for an encrypted NameID.
    #[serde(default)]
    pub want_name_id_encrypted: bool,

    /// Requested authentication context, as a flag or a list of class URIs.
    /// `null` counts as absent.
    #[serde(default, deserialize_with = "null_as_default")]
    pub requested_authn_context: AuthnContextRequirement,

    /// Comparison attribute for `RequestedAuthnContext`; empty omits it,
    /// `null` falls back to `exact`.
    #[serde(default = "default_comparison", deserialize_with = "null_as_default_comparison")]
    pub requested_authn_context_comparison: String,
}

impl Default for SecurityPolicy {
    fn default() -> Self {
        Self {
            want_name_id_encrypted: false,
            requested_authn_context: AuthnContextRequirement::default(),
            requested_authn_context_comparison: default_comparison(),
        }
    }
}

fn default_comparison() -> String {
    "exact".to_string()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn null_as_default_comparison<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|c| c.unwrap_or_else(default_comparison))
}

impl SecurityPolicy {
    /// Resolves the class references to request, in order.
    ///
    /// Returns `None` when no `RequestedAuthnContext` should be emitted.
    #[must_use]
    pub fn requested_authn_context_refs(&self) -> Option<Vec<&str>> {
        match &self.requested_authn_context {
            AuthnContextRequirement::Enabled(true) => {
                Some(vec![AuthnContextClass::PasswordProtectedTransport.uri()])
            }
            AuthnContextRequirement::Enabled(false) => None,
            AuthnContextRequirement::ClassRefs(refs) if refs.is_empty() => None,
            AuthnContextRequirement::ClassRefs(refs) => {
                Some(refs.iter().map(String::as_str).collect())
            }
        }
    }

    /// Returns the comparison attribute value, or `None` when it is empty.
    #[must_use]
    pub fn comparison(&self) -> Option<&str> {
        Some(self.requested_authn_context_comparison.as_str()).filter(|c| !c.is_empty())
    }
}

/// Requested authentication context setting.
///
/// Either a flag (`true` requests password-protected transport) or an
/// explicit ordered list of context class URIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthnContextRequirement {
    /// Flag form.
    Enabled(bool),
    /// Explicit class reference URIs.
    ClassRefs(Vec<String>),
}

impl Default for AuthnContextRequirement {
    fn default() -> Self {
        Self::Enabled(false)
    }
}

/// Display metadata for one organization language entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationEntry {
    /// Legal name.
    #[serde(default)]
    pub name: String,

    /// Human-readable display name; becomes the request's `ProviderName`.
    #[serde(default)]
    pub displayname: String,

    /// Organization URL.
    #[serde(default)]
    pub url: String,
}

/// Organization metadata keyed by language tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrganizationInfo(pub BTreeMap<String, OrganizationEntry>);

impl OrganizationInfo {
    /// Preferred language for the provider name.
    pub const PREFERRED_LANG: &'static str = "en-US";

    /// Returns the display name to advertise as `ProviderName`.
    ///
    /// Uses the `en-US` entry when present, otherwise the first entry in
    /// key order. Returns `None` if there are no entries or the chosen
    /// entry has an empty display name.
    #[must_use]
    pub fn provider_name(&self) -> Option<&str> {
        let entry = self
            .0
            .get(Self::PREFERRED_LANG)
            .or_else(|| self.0.values().next())?;
        Some(entry.displayname.as_str()).filter(|name| !name.is_empty())
    }

    /// Adds or replaces the entry for a language.
    #[must_use]
    pub fn with_display_name(mut self, lang: impl Into<String>, name: impl Into<String>) -> Self {
        self.0.insert(
            lang.into(),
            OrganizationEntry {
                displayname: name.into(),
                ..OrganizationEntry::default()
            },
        );
        self
    }
}

/// Requested AuthnRequest extensions keyed by extension name.
///
/// Values are passed through to the matching extension provider; unknown
/// keys are ignored when building.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtensionSet(pub BTreeMap<String, serde_json::Value>);

impl ExtensionSet {
    /// Returns true when no extensions are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over configured extensions in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &serde_json::Value)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Adds an extension.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }
}

/// Compression toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressSettings {
    /// Deflate requests before base64 encoding.
    #[serde(default = "default_true")]
    pub requests: bool,
}

impl Default for CompressSettings {
    fn default() -> Self {
        Self { requests: true }
    }
}

const fn default_true() -> bool {
    true
}
