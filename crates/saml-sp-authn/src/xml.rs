//! Minimal XML document tree and serializer.
//!
//! Outbound SAML messages are assembled as a tree of [`XmlElement`] nodes
//! and serialized in one pass. Attribute order is insertion order, which
//! keeps the wire layout stable. All attribute values and text content are
//! escaped by the serializer; callers never pre-escape.

use quick_xml::escape::escape;

const INDENT: &str = "    ";

/// A node in an XML document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    /// A nested element.
    Element(XmlElement),
    /// Character data.
    Text(String),
}

/// An XML element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    /// Creates an element with the given qualified name (e.g. `saml:Issuer`).
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Appends an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Appends an attribute only when a value is present.
    #[must_use]
    pub fn attr_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Appends a child element.
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    /// Appends a child element only when present.
    #[must_use]
    pub fn child_opt(self, child: Option<Self>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    /// Appends text content.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(XmlNode::Text(text.into()));
        self
    }

    /// Returns the qualified element name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value of the named attribute, if set.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }

    /// Serializes this element and its subtree.
    ///
    /// Elements without children are self-closing, elements holding only
    /// text are written on one line, everything else is indented by four
    /// spaces per level.
    #[must_use]
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out, 0);
        out
    }

    fn write_into(&self, out: &mut String, depth: usize) {
        let pad = INDENT.repeat(depth);
        out.push_str(&pad);
        out.push('<');
        out.push_str(&self.name);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape(value.as_str()));
            out.push('"');
        }

        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');

        let text_only = self
            .children
            .iter()
            .all(|node| matches!(node, XmlNode::Text(_)));

        if text_only {
            for node in &self.children {
                if let XmlNode::Text(text) = node {
                    out.push_str(&escape(text.as_str()));
                }
            }
        } else {
            for node in &self.children {
                out.push('\n');
                match node {
                    XmlNode::Element(element) => element.write_into(out, depth + 1),
                    XmlNode::Text(text) => {
                        out.push_str(&INDENT.repeat(depth + 1));
                        out.push_str(&escape(text.as_str()));
                    }
                }
            }
            out.push('\n');
            out.push_str(&pad);
        }

        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}
