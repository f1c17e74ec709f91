//! BSI TR-03130 encrypted AuthnRequest extension.
//!
//! Emits the `eid:EncryptedAuthnRequestExtension` skeleton: an
//! `xenc:EncryptedData` structure naming AES-256-GCM content encryption and
//! RSA-OAEP key transport, with empty `CipherValue` placeholders. No
//! ciphertext is produced here; an external XML security layer fills it in.

use crate::types::{encryption_algorithms, EID_NS, XMLDSIG_NS, XMLENC_NS};
use crate::xml::XmlElement;

use super::{AuthnRequestExtension, Namespace};

/// Provider for the `tr03130` extension key.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tr03130Extension;

impl Tr03130Extension {
    /// Settings key handled by this provider.
    pub const KEY: &'static str = "tr03130";
}

const NAMESPACES: &[Namespace] = &[("xenc", XMLENC_NS), ("eid", EID_NS), ("ds", XMLDSIG_NS)];

impl AuthnRequestExtension for Tr03130Extension {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn namespaces(&self) -> &'static [Namespace] {
        NAMESPACES
    }

    fn element(&self, _value: &serde_json::Value) -> XmlElement {
        let encrypted_key = XmlElement::new("xenc:EncryptedKey")
            .child(
                XmlElement::new("xenc:EncryptionMethod")
                    .attr("Algorithm", encryption_algorithms::RSA_OAEP),
            )
            .child(cipher_data());

        let encrypted_data = XmlElement::new("xenc:EncryptedData")
            .attr("Type", encryption_algorithms::TYPE_ELEMENT)
            .child(
                XmlElement::new("xenc:EncryptionMethod")
                    .attr("Algorithm", encryption_algorithms::AES256_GCM),
            )
            .child(XmlElement::new("ds:KeyInfo").child(encrypted_key))
            .child(cipher_data());

        XmlElement::new("eid:EncryptedAuthnRequestExtension").child(encrypted_data)
    }
}

fn cipher_data() -> XmlElement {
    XmlElement::new("xenc:CipherData").child(XmlElement::new("xenc:CipherValue"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skeleton_structure() {
        let element = Tr03130Extension.element(&serde_json::Value::Bool(true));
        assert_eq!(element.name(), "eid:EncryptedAuthnRequestExtension");

        let encrypted_data = element.child_elements().next().unwrap();
        assert_eq!(encrypted_data.name(), "xenc:EncryptedData");
        assert_eq!(
            encrypted_data.attribute("Type"),
            Some(encryption_algorithms::TYPE_ELEMENT)
        );

        let names: Vec<&str> = encrypted_data.child_elements().map(XmlElement::name).collect();
        assert_eq!(
            names,
            vec!["xenc:EncryptionMethod", "ds:KeyInfo", "xenc:CipherData"]
        );
    }

    #[test]
    fn cipher_values_are_empty_placeholders() {
        let xml = Tr03130Extension.element(&serde_json::Value::Null).to_xml();
        assert_eq!(xml.matches("<xenc:CipherValue/>").count(), 2);
        assert!(xml.contains(encryption_algorithms::AES256_GCM));
        assert!(xml.contains(encryption_algorithms::RSA_OAEP));
    }
}
