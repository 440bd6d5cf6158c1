//! Structured-record adapter.
//!
//! The engine never parses markup. Metadata standards navigate records
//! through the [`Element`] trait, which exposes the four capabilities a
//! document tree needs to offer: a name, text, attributes and children.
//! Everything else (path lookup, subtree search) is derived from those.
//!
//! Two adapters ship with the crate: [`XmlElement`] over parsed XML and
//! [`JsonElement`] over the XML-as-JSON layout.
//!
//! # Example
//!
//! ```
//! use metalint::record::{Element, JsonElement};
//! use serde_json::json;
//!
//! let doc = json!({
//!     "c": {
//!         "@level": "file",
//!         "did": { "unitid": "A-1", "unittitle": "Letters from the mayor" }
//!     }
//! });
//! let root = JsonElement::document(&doc);
//! let component = root.find("c").unwrap();
//!
//! assert_eq!(component.attr("level").as_deref(), Some("file"));
//! assert_eq!(component.text_at("did/unitid"), "A-1");
//! ```

mod json;
mod xml;

pub use json::JsonElement;
pub use xml::{XmlElement, parse_document};

/// Access to one node of a structured metadata record.
pub trait Element: Clone {
    /// Local name of the node.
    fn name(&self) -> &str;

    /// Own text content, `None` when absent or empty.
    fn text(&self) -> Option<String>;

    /// Attribute value by local name, `None` when absent or empty.
    fn attr(&self, name: &str) -> Option<String>;

    /// Child nodes in document order.
    fn children(&self) -> Vec<Self>;

    /// Whether the node has at least one child node.
    fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    /// Whether the node carries non-empty text.
    fn has_text(&self) -> bool {
        self.text().is_some()
    }

    /// Own text content or an empty string.
    fn text_or_empty(&self) -> String {
        self.text().unwrap_or_default()
    }

    /// Attribute value or an empty string.
    fn attr_or_empty(&self, name: &str) -> String {
        self.attr(name).unwrap_or_default()
    }

    /// All nodes matching a `/`-separated path of child names.
    ///
    /// A `*` segment matches any child. Namespace prefixes are ignored.
    fn find_all(&self, path: &str) -> Vec<Self> {
        let mut current = vec![self.clone()];
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current = current
                .iter()
                .flat_map(|node| node.children())
                .filter(|child| name_matches(child.name(), segment))
                .collect();
            if current.is_empty() {
                break;
            }
        }
        current
    }

    /// First node matching a path.
    fn find(&self, path: &str) -> Option<Self> {
        self.find_all(path).into_iter().next()
    }

    /// Text of the first node matching a path, or an empty string.
    fn text_at(&self, path: &str) -> String {
        self.find(path)
            .and_then(|node| node.text())
            .unwrap_or_default()
    }

    /// Every node below this one with the given name, at any depth,
    /// in document order.
    fn descendants(&self, name: &str) -> Vec<Self> {
        let mut found = Vec::new();
        let mut stack: Vec<Self> = self.children().into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            if name_matches(node.name(), name) {
                found.push(node.clone());
            }
            stack.extend(node.children().into_iter().rev());
        }
        found
    }

    /// First node below this one with the given name.
    fn find_descendant(&self, name: &str) -> Option<Self> {
        self.descendants(name).into_iter().next()
    }
}

/// Strip a namespace prefix (`lido:title` -> `title`).
pub(crate) fn local_name(name: &str) -> &str {
    name.rsplit(':').next().unwrap_or(name)
}

fn name_matches(name: &str, pattern: &str) -> bool {
    pattern == "*" || local_name(name) == local_name(pattern)
}
