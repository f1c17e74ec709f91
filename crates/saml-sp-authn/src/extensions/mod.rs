//! AuthnRequest extension providers.
//!
//! Each recognized key in the settings' `authnRequestExtensions` map is
//! served by one [`AuthnRequestExtension`] implementation. A provider
//! declares the namespaces its fragment needs and produces a single child
//! element for `samlp:Extensions`. Keys without a registered provider are
//! skipped.

mod tr03130;

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use crate::settings::ExtensionSet;
use crate::xml::XmlElement;

pub use tr03130::Tr03130Extension;

/// A namespace declaration: prefix and URI.
pub type Namespace = (&'static str, &'static str);

/// Provider for one AuthnRequest extension key.
pub trait AuthnRequestExtension: Send + Sync + Debug {
    /// The settings key this provider handles.
    fn key(&self) -> &'static str;

    /// Namespace declarations required on the root element.
    fn namespaces(&self) -> &'static [Namespace];

    /// Builds the extension's element from its configured value.
    fn element(&self, value: &serde_json::Value) -> XmlElement;
}

/// Output of resolving configured extensions against the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedExtensions {
    /// Namespace declarations, deduplicated in first-seen order.
    pub namespaces: Vec<Namespace>,
    /// One element per recognized extension, in key order.
    pub elements: Vec<XmlElement>,
}

/// Registry of extension providers keyed by extension name.
#[derive(Debug, Clone, Default)]
pub struct ExtensionRegistry {
    providers: HashMap<&'static str, Arc<dyn AuthnRequestExtension>>,
}

impl ExtensionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with all built-in providers.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(Tr03130Extension));
        registry
    }

    /// Registers a provider, replacing any existing one for the same key.
    pub fn register(&mut self, provider: Arc<dyn AuthnRequestExtension>) {
        self.providers.insert(provider.key(), provider);
    }

    /// Checks if a provider is registered for a key.
    #[must_use]
    pub fn has_provider(&self, key: &str) -> bool {
        self.providers.contains_key(key)
    }

    /// Resolves configured extensions into namespaces and elements.
    #[must_use]
    pub fn resolve(&self, extensions: &ExtensionSet) -> ResolvedExtensions {
        let mut resolved = ResolvedExtensions::default();

        for (key, value) in extensions.iter() {
            let Some(provider) = self.providers.get(key) else {
                tracing::debug!(extension = key, "Ignoring unrecognized AuthnRequest extension");
                continue;
            };

            for namespace in provider.namespaces() {
                if !resolved.namespaces.contains(namespace) {
                    resolved.namespaces.push(*namespace);
                }
            }
            resolved.elements.push(provider.element(value));
        }

        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::XMLENC_NS;

    #[derive(Debug)]
    struct MarkerExtension;

    impl AuthnRequestExtension for MarkerExtension {
        fn key(&self) -> &'static str {
            "marker"
        }

        fn namespaces(&self) -> &'static [Namespace] {
            &[("xenc", XMLENC_NS), ("mk", "urn:example:marker")]
        }

        fn element(&self, value: &serde_json::Value) -> XmlElement {
            XmlElement::new("mk:Marker").text(value.to_string())
        }
    }

    #[test]
    fn defaults_include_tr03130() {
        let registry = ExtensionRegistry::with_defaults();
        assert!(registry.has_provider("tr03130"));
        assert!(!registry.has_provider("marker"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let registry = ExtensionRegistry::with_defaults();
        let extensions = ExtensionSet::default().with("unknown", serde_json::json!(1));
        let resolved = registry.resolve(&extensions);
        assert!(resolved.namespaces.is_empty());
        assert!(resolved.elements.is_empty());
    }

    #[test]
    fn shared_namespaces_are_deduplicated() {
        let mut registry = ExtensionRegistry::with_defaults();
        registry.register(Arc::new(MarkerExtension));

        let extensions = ExtensionSet::default()
            .with("marker", serde_json::json!("x"))
            .with("tr03130", serde_json::json!(true));
        let resolved = registry.resolve(&extensions);

        assert_eq!(resolved.elements.len(), 2);
        assert_eq!(
            resolved.namespaces,
            vec![
                ("xenc", XMLENC_NS),
                ("mk", "urn:example:marker"),
                ("eid", crate::types::EID_NS),
                ("ds", crate::types::XMLDSIG_NS),
            ]
        );
    }
}
