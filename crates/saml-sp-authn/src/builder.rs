//! AuthnRequest builder.
//!
//! Assembles a `samlp:AuthnRequest` document from settings and per-call
//! options. The document is built as an [`XmlElement`] tree in wire order
//! and serialized once, so every value is escaped by the serializer.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::extensions::{ExtensionRegistry, ResolvedExtensions};
use crate::id::{IdGenerator, RandomIdGenerator};
use crate::settings::Settings;
use crate::time::saml_time;
use crate::types::{
    name_id_policy_format, AuthnRequestMessage, AuthnRequestOptions, NameId, NameIdPolicy,
    RequestedAuthnContext, SAMLP_NS, SAML_NS, SAML_VERSION,
};
use crate::xml::XmlElement;

/// Builds authentication requests for one set of settings.
///
/// The builder holds no mutable state; share it freely between threads.
#[derive(Debug, Clone)]
pub struct AuthnRequestBuilder<'a> {
    settings: &'a Settings,
    extensions: ExtensionRegistry,
    id_generator: Arc<dyn IdGenerator>,
}

impl<'a> AuthnRequestBuilder<'a> {
    /// Creates a builder with the built-in extension providers and a
    /// random id generator.
    #[must_use]
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            extensions: ExtensionRegistry::with_defaults(),
            id_generator: Arc::new(RandomIdGenerator::new()),
        }
    }

    /// Replaces the id generator.
    #[must_use]
    pub fn with_id_generator(mut self, id_generator: Arc<dyn IdGenerator>) -> Self {
        self.id_generator = id_generator;
        self
    }

    /// Replaces the extension registry.
    #[must_use]
    pub fn with_extension_registry(mut self, extensions: ExtensionRegistry) -> Self {
        self.extensions = extensions;
        self
    }

    /// Builds a request issued now.
    #[must_use]
    pub fn build(&self, options: &AuthnRequestOptions) -> AuthnRequestMessage {
        self.build_at(options, Utc::now())
    }

    /// Builds a request with an explicit issue instant.
    ///
    /// Output is fully determined by the settings, options and `now`,
    /// apart from the generated id.
    #[must_use]
    pub fn build_at(&self, options: &AuthnRequestOptions, now: DateTime<Utc>) -> AuthnRequestMessage {
        let settings = self.settings;
        let id = self.id_generator.next_id();
        let issue_instant = saml_time(now);
        let destination = settings.idp_sso_url().to_string();
        let resolved = self.extensions.resolve(&settings.authn_request_extensions);

        let subject = options.name_id_value_req.as_ref().map(|value| {
            NameId::new(value.as_str())
                .with_format(settings.sp.name_id_format.as_str())
                .to_subject_element()
        });

        let name_id_policy = options.set_name_id_policy.then(|| {
            NameIdPolicy::with_format(name_id_policy_format(
                &settings.sp.name_id_format,
                &settings.security,
            ))
            .allow_create(true)
            .to_element()
        });

        let requested_authn_context = settings
            .security
            .requested_authn_context_refs()
            .map(|refs| {
                RequestedAuthnContext::new(refs)
                    .with_comparison(settings.security.comparison())
                    .to_element()
            });

        let extensions = extensions_element(&resolved);

        tracing::debug!(
            request_id = %id,
            destination = %destination,
            subject = subject.is_some(),
            name_id_policy = name_id_policy.is_some(),
            requested_authn_context = requested_authn_context.is_some(),
            extensions = resolved.elements.len(),
            "Built AuthnRequest"
        );

        let root = root_element(settings, options, &resolved, &id, &issue_instant)
            .child(XmlElement::new("saml:Issuer").text(settings.sp.entity_id.as_str()))
            .child_opt(subject)
            .child_opt(name_id_policy)
            .child_opt(requested_authn_context)
            .child_opt(extensions);

        AuthnRequestMessage::new(
            id,
            issue_instant,
            root.to_xml(),
            destination,
            settings.should_compress_requests(),
        )
    }
}

/// Builds the root element with namespace declarations and attributes.
fn root_element(
    settings: &Settings,
    options: &AuthnRequestOptions,
    resolved: &ResolvedExtensions,
    id: &str,
    issue_instant: &str,
) -> XmlElement {
    let root = XmlElement::new("samlp:AuthnRequest")
        .attr("xmlns:samlp", SAMLP_NS)
        .attr("xmlns:saml", SAML_NS);

    let root = resolved
        .namespaces
        .iter()
        .fold(root, |root, (prefix, uri)| root.attr(format!("xmlns:{prefix}"), *uri));

    let acs = &settings.sp.assertion_consumer_service;

    root.attr("ID", id)
        .attr("Version", SAML_VERSION)
        .attr_opt("ProviderName", settings.organization.provider_name())
        .attr_opt("ForceAuthn", options.force_authn.then_some("true"))
        .attr_opt("IsPassive", options.is_passive.then_some("true"))
        .attr("IssueInstant", issue_instant)
        .attr("Destination", settings.idp_sso_url())
        .attr("ProtocolBinding", acs.binding.as_str())
        .attr("AssertionConsumerServiceURL", acs.url.as_str())
}

/// Wraps resolved extension elements in `samlp:Extensions`.
fn extensions_element(resolved: &ResolvedExtensions) -> Option<XmlElement> {
    if resolved.elements.is_empty() {
        return None;
    }
    Some(
        resolved
            .elements
            .iter()
            .cloned()
            .fold(XmlElement::new("samlp:Extensions"), XmlElement::child),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{AuthnContextRequirement, Endpoint, OrganizationInfo};
    use crate::types::{AuthnContextClass, NameIdFormat, SamlBinding};
    use chrono::TimeZone;

    #[derive(Debug)]
    struct FixedId;

    impl IdGenerator for FixedId {
        fn next_id(&self) -> String {
            "_fixed".to_string()
        }
    }

    fn settings() -> Settings {
        let mut settings = Settings::default();
        settings.sp.entity_id = "https://sp.example.com/metadata".to_string();
        settings.sp.name_id_format = NameIdFormat::Email.uri().to_string();
        settings.sp.assertion_consumer_service =
            Endpoint::new("https://sp.example.com/acs", SamlBinding::HttpPost);
        settings.idp.single_sign_on_service =
            Endpoint::new("https://idp.example.com/sso", SamlBinding::HttpRedirect);
        settings
    }

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn minimal_request_layout() {
        let settings = settings();
        let message = AuthnRequestBuilder::new(&settings)
            .with_id_generator(Arc::new(FixedId))
            .build_at(&AuthnRequestOptions::new().set_name_id_policy(false), instant());

        assert_eq!(
            message.xml(),
            "<samlp:AuthnRequest \
             xmlns:samlp=\"urn:oasis:names:tc:SAML:2.0:protocol\" \
             xmlns:saml=\"urn:oasis:names:tc:SAML:2.0:assertion\" \
             ID=\"_fixed\" Version=\"2.0\" \
             IssueInstant=\"2024-05-01T12:00:00Z\" \
             Destination=\"https://idp.example.com/sso\" \
             ProtocolBinding=\"urn:oasis:names:tc:SAML:2.0:bindings:HTTP-POST\" \
             AssertionConsumerServiceURL=\"https://sp.example.com/acs\">\n    \
             <saml:Issuer>https://sp.example.com/metadata</saml:Issuer>\n\
             </samlp:AuthnRequest>"
        );
        assert_eq!(message.id(), "_fixed");
        assert_eq!(message.issue_instant(), "2024-05-01T12:00:00Z");
        assert_eq!(message.destination(), "https://idp.example.com/sso");
    }

    #[test]
    fn children_follow_wire_order() {
        let mut settings = settings();
        settings.security.requested_authn_context = AuthnContextRequirement::Enabled(true);
        settings.authn_request_extensions = settings
            .authn_request_extensions
            .with("tr03130", serde_json::json!(true));

        let message = AuthnRequestBuilder::new(&settings).build_at(
            &AuthnRequestOptions::new().with_name_id_value("alice@example.com"),
            instant(),
        );
        let xml = message.xml();

        let positions: Vec<usize> = [
            "<saml:Issuer>",
            "<saml:Subject>",
            "<samlp:NameIDPolicy",
            "<samlp:RequestedAuthnContext",
            "<samlp:Extensions>",
        ]
        .iter()
        .map(|tag| xml.find(tag).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert!(xml.contains(AuthnContextClass::PasswordProtectedTransport.uri()));
        assert!(xml.contains(r#"xmlns:eid="http://bsi.bund.de/eID/""#));
    }

    #[test]
    fn root_attributes_are_escaped() {
        let mut settings = settings();
        settings.sp.assertion_consumer_service.url = "https://sp.example.com/acs?a=1&b=2".to_string();
        settings.organization = OrganizationInfo::default().with_display_name("en-US", "A \"B\" & C");

        let message = AuthnRequestBuilder::new(&settings)
            .build_at(&AuthnRequestOptions::default(), instant());

        assert!(message
            .xml()
            .contains(r#"AssertionConsumerServiceURL="https://sp.example.com/acs?a=1&amp;b=2""#));
        assert!(message
            .xml()
            .contains(r#"ProviderName="A &quot;B&quot; &amp; C""#));
    }

    #[test]
    fn attribute_order_with_all_flags() {
        let mut settings = settings();
        settings.organization = OrganizationInfo::default().with_display_name("en-US", "EN Co");

        let message = AuthnRequestBuilder::new(&settings).build_at(
            &AuthnRequestOptions::new().force_authn(true).is_passive(true),
            instant(),
        );
        let xml = message.xml();

        let order = [
            "ID=",
            "Version=",
            "ProviderName=",
            "ForceAuthn=",
            "IsPassive=",
            "IssueInstant=",
            "Destination=",
            "ProtocolBinding=",
            "AssertionConsumerServiceURL=",
        ];
        let positions: Vec<usize> = order.iter().map(|a| xml.find(a).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn same_inputs_differ_only_by_id() {
        let settings = settings();
        let builder = AuthnRequestBuilder::new(&settings);
        let options = AuthnRequestOptions::default();

        let first = builder.build_at(&options, instant());
        let second = builder.build_at(&options, instant());

        assert_ne!(first.id(), second.id());
        assert_eq!(
            first.xml().replace(first.id(), "ID"),
            second.xml().replace(second.id(), "ID")
        );
    }
}
