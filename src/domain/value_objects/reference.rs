//! Raw reference trees produced by reference providers
//!
//! Content records keep zero or more image fields, some of them list-valued,
//! so a provider hands back an arbitrarily nested tree rather than a flat list.

use serde_json::Value;

/// One node of a provider's reference tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawReference {
    /// A path string as stored in the record
    Leaf(String),
    /// An empty or null placeholder
    Empty,
    /// A nested container
    Nodes(Vec<RawReference>),
}

impl RawReference {
    pub fn leaf(value: impl Into<String>) -> Self {
        Self::Leaf(value.into())
    }

    pub fn nodes<I>(children: I) -> Self
    where
        I: IntoIterator<Item = RawReference>,
    {
        Self::Nodes(children.into_iter().collect())
    }

    /// Visit every non-empty leaf, depth first, in container order.
    pub fn for_each_leaf<F>(&self, f: &mut F)
    where
        F: FnMut(&str),
    {
        match self {
            RawReference::Leaf(value) if !value.is_empty() => f(value.as_str()),
            RawReference::Leaf(_) | RawReference::Empty => {}
            RawReference::Nodes(children) => {
                for child in children {
                    child.for_each_leaf(f);
                }
            }
        }
    }

    /// Collect non-empty leaves in visiting order
    pub fn leaves(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            RawReference::Leaf(value) if !value.is_empty() => out.push(value.as_str()),
            RawReference::Leaf(_) | RawReference::Empty => {}
            RawReference::Nodes(children) => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
        }
    }

    /// Count all leaves, including empty placeholders
    pub fn leaf_count(&self) -> usize {
        match self {
            RawReference::Leaf(_) | RawReference::Empty => 1,
            RawReference::Nodes(children) => children.iter().map(Self::leaf_count).sum(),
        }
    }
}

impl From<&Value> for RawReference {
    /// Strings become leaves, arrays and objects become containers, and every
    /// other scalar is a placeholder.
    fn from(value: &Value) -> Self {
        match value {
            Value::String(s) if s.is_empty() => RawReference::Empty,
            Value::String(s) => RawReference::Leaf(s.clone()),
            Value::Array(items) => RawReference::Nodes(items.iter().map(Into::into).collect()),
            Value::Object(map) => RawReference::Nodes(map.values().map(Into::into).collect()),
            Value::Null | Value::Bool(_) | Value::Number(_) => RawReference::Empty,
        }
    }
}

impl From<Value> for RawReference {
    fn from(value: Value) -> Self {
        RawReference::from(&value)
    }
}
