//! JSON-backed element adapter.
//!
//! Records are read from the usual XML-as-JSON layout:
//!
//! - keys starting with `@` are attributes (`"@level": "file"`),
//! - `#text` holds the node's own text,
//! - every other key is a child element; an array value means repeated
//!   children, a scalar value is a child with text only, `null` an empty child.

use serde_json::Value;

use super::{Element, local_name};

const TEXT_KEY: &str = "#text";

/// A node of a JSON document viewed as a metadata element.
#[derive(Debug, Clone, Copy)]
pub struct JsonElement<'a> {
    name: &'a str,
    value: &'a Value,
}

impl<'a> JsonElement<'a> {
    /// Create an element with an explicit name.
    pub fn new(name: &'a str, value: &'a Value) -> Self {
        Self { name, value }
    }

    /// Wrap a whole parsed document; its top-level keys become children.
    pub fn document(value: &'a Value) -> Self {
        Self::new("#document", value)
    }

    /// The underlying JSON value.
    pub fn value(&self) -> &'a Value {
        self.value
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl<'a> Element for JsonElement<'a> {
    fn name(&self) -> &str {
        self.name
    }

    fn text(&self) -> Option<String> {
        match self.value {
            Value::Object(map) => map.get(TEXT_KEY).and_then(scalar_text),
            other => scalar_text(other),
        }
    }

    fn attr(&self, name: &str) -> Option<String> {
        let Value::Object(map) = self.value else {
            return None;
        };
        let wanted = local_name(name);
        map.iter()
            .filter_map(|(key, value)| key.strip_prefix('@').map(|attr| (attr, value)))
            .find(|(attr, _)| local_name(attr) == wanted)
            .and_then(|(_, value)| scalar_text(value))
    }

    fn children(&self) -> Vec<Self> {
        let Value::Object(map) = self.value else {
            return Vec::new();
        };

        let mut children = Vec::new();
        for (key, value) in map {
            if key.starts_with('@') || key == TEXT_KEY {
                continue;
            }
            match value {
                Value::Array(items) => {
                    children.extend(items.iter().map(|item| JsonElement::new(key, item)));
                }
                single => children.push(JsonElement::new(key, single)),
            }
        }
        children
    }
}
