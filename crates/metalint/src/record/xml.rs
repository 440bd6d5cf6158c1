//! XML-backed element adapter.
//!
//! Element and attribute names are matched by local name, so prefixed
//! (`lido:title`, `xlink:href`) and default-namespace documents read alike.
//! An element's text is the text before its first child element;
//! whitespace-only text between child elements is ignored.

use roxmltree::{Document, Node, ParsingOptions};

use super::{Element, local_name};
use crate::error::Result;

const DOCUMENT_NAME: &str = "#document";

/// Parse an XML document. Document type declarations are allowed.
pub fn parse_document(text: &str) -> Result<Document<'_>> {
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;
    Ok(Document::parse_with_options(text, options)?)
}

/// A node of a parsed XML document viewed as a metadata element.
#[derive(Debug, Clone, Copy)]
pub struct XmlElement<'a, 'input> {
    node: Node<'a, 'input>,
}

impl<'a, 'input> XmlElement<'a, 'input> {
    /// Wrap a whole parsed document; its root element becomes the only child.
    pub fn document(document: &'a Document<'input>) -> Self {
        Self {
            node: document.root(),
        }
    }

    /// The underlying node.
    pub fn node(&self) -> Node<'a, 'input> {
        self.node
    }
}

impl<'a, 'input> Element for XmlElement<'a, 'input> {
    fn name(&self) -> &str {
        if self.node.is_root() {
            DOCUMENT_NAME
        } else {
            self.node.tag_name().name()
        }
    }

    fn text(&self) -> Option<String> {
        let mut text = String::new();
        let mut has_elements = false;
        for child in self.node.children() {
            if child.is_element() {
                has_elements = true;
                break;
            }
            if child.is_text() {
                text.push_str(child.text().unwrap_or_default());
            }
        }

        if text.is_empty() || (has_elements && text.trim().is_empty()) {
            None
        } else {
            Some(text)
        }
    }

    fn attr(&self, name: &str) -> Option<String> {
        let wanted = local_name(name);
        self.node
            .attributes()
            .find(|attr| attr.name() == wanted)
            .map(|attr| attr.value())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }

    fn children(&self) -> Vec<Self> {
        self.node
            .children()
            .filter(Node::is_element)
            .map(|node| Self { node })
            .collect()
    }
}
