//! Entity descriptors
//!
//! A descriptor is a one-line summary such as
//! `RBI:Method:foo abstract parameters=2 return="String"`, used in logs and
//! when conflicting definitions are shown to a user side by side.
//!
//! Variants choose what appears after the name by returning [`Attr`]
//! selectors from [`TypedEntity::describe_attrs`]. Field selectors carry the
//! live value of a field and are transformed before display:
//!
//! - collections show their length and vanish when empty
//! - text is shown as a quoted, escaped literal
//! - nested describable values show their own descriptor
//! - `true` shows the bare key, `false` vanishes
//! - anything else shows its display form
//!
//! Literal selectors show a fixed key and value verbatim.

use super::model::TypedEntity;
use crate::error::{Result, TdgenError};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use tracing::{debug, trace};

/// Anything that can render a descriptor of itself
pub trait Describe {
    /// Produce a one-line diagnostic summary
    fn describe(&self) -> Result<String>;
}

impl<T: TypedEntity + ?Sized> Describe for T {
    fn describe(&self) -> Result<String> {
        describe_entity(self)
    }
}

/// Live value of a field selected for a descriptor
pub enum AttrValue<'a> {
    /// Element or entry count of a collection; zero omits the attribute
    ///
    /// Collection fields should pass the collection itself (or this variant)
    /// rather than its length, which would convert to [`AttrValue::Plain`]
    /// and show `key=0`.
    Count(usize),
    /// Text, shown quoted
    Text(Cow<'a, str>),
    /// A nested type expression or entity
    Nested(&'a dyn Describe),
    /// Boolean flag
    Flag(bool),
    /// Any other value, already in display form
    Plain(String),
}

impl<'a> AttrValue<'a> {
    /// Wrap a nested describable value
    pub fn nested(value: &'a dyn Describe) -> Self {
        AttrValue::Nested(value)
    }

    /// Use the display form of any value
    pub fn plain(value: impl ToString) -> Self {
        AttrValue::Plain(value.to_string())
    }
}

impl std::fmt::Debug for AttrValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttrValue::Count(n) => f.debug_tuple("Count").field(n).finish(),
            AttrValue::Text(s) => f.debug_tuple("Text").field(s).finish(),
            AttrValue::Nested(_) => f.write_str("Nested(..)"),
            AttrValue::Flag(b) => f.debug_tuple("Flag").field(b).finish(),
            AttrValue::Plain(s) => f.debug_tuple("Plain").field(s).finish(),
        }
    }
}

impl<'a, T> From<&'a Vec<T>> for AttrValue<'a> {
    fn from(value: &'a Vec<T>) -> Self {
        AttrValue::Count(value.len())
    }
}

impl<'a, T> From<&'a [T]> for AttrValue<'a> {
    fn from(value: &'a [T]) -> Self {
        AttrValue::Count(value.len())
    }
}

impl<'a, K, V, S> From<&'a HashMap<K, V, S>> for AttrValue<'a> {
    fn from(value: &'a HashMap<K, V, S>) -> Self {
        AttrValue::Count(value.len())
    }
}

impl<'a, K, V> From<&'a BTreeMap<K, V>> for AttrValue<'a> {
    fn from(value: &'a BTreeMap<K, V>) -> Self {
        AttrValue::Count(value.len())
    }
}

impl<'a, T, S> From<&'a HashSet<T, S>> for AttrValue<'a> {
    fn from(value: &'a HashSet<T, S>) -> Self {
        AttrValue::Count(value.len())
    }
}

impl<'a, T> From<&'a BTreeSet<T>> for AttrValue<'a> {
    fn from(value: &'a BTreeSet<T>) -> Self {
        AttrValue::Count(value.len())
    }
}

impl<'a> From<&'a str> for AttrValue<'a> {
    fn from(value: &'a str) -> Self {
        AttrValue::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for AttrValue<'a> {
    fn from(value: &'a String) -> Self {
        AttrValue::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for AttrValue<'_> {
    fn from(value: String) -> Self {
        AttrValue::Text(Cow::Owned(value))
    }
}

impl From<bool> for AttrValue<'_> {
    fn from(value: bool) -> Self {
        AttrValue::Flag(value)
    }
}

// Numbers are plain values and always show, even when zero. Collection
// lengths belong in `Count`.
macro_rules! plain_attr_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AttrValue<'_> {
                fn from(value: $ty) -> Self {
                    AttrValue::Plain(value.to_string())
                }
            }
        )*
    };
}

plain_attr_value!(i32, i64, u32, u64, usize, f64, char);

/// One entry of a variant's describe list
#[derive(Debug)]
pub enum Attr<'a> {
    /// A field of the variant and its current value
    Field {
        key: &'static str,
        value: AttrValue<'a>,
    },
    /// Fixed key/value pairs; exactly one pair is valid
    Literal { pairs: Vec<(String, String)> },
}

impl<'a> Attr<'a> {
    /// Select a field by key with its current value
    pub fn field(key: &'static str, value: impl Into<AttrValue<'a>>) -> Self {
        Attr::Field {
            key,
            value: value.into(),
        }
    }

    /// Show a fixed key and value
    pub fn literal(key: impl Into<String>, value: impl Into<String>) -> Self {
        Attr::Literal {
            pairs: vec![(key.into(), value.into())],
        }
    }

    /// Build a literal selector from arbitrary pairs
    ///
    /// Anything other than a single pair is rejected by [`describe_entity`].
    pub fn literal_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Attr::Literal {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Strip module path and generic arguments from a type name
pub fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Render the descriptor of `entity`
///
/// Fails when the entity hands back a literal selector that is not exactly
/// one pair with a non-empty key, or when a nested value fails to describe.
pub fn describe_entity<E: TypedEntity + ?Sized>(entity: &E) -> Result<String> {
    let head = format!(
        "{}:{}:{}",
        entity.dialect(),
        entity.kind_name(),
        entity.name()
    );

    let mut attr_strings = Vec::new();
    for attr in entity.describe_attrs() {
        match attr {
            Attr::Field { key, value } => {
                if let Some(rendered) = render_field(key, value)? {
                    attr_strings.push(rendered);
                } else {
                    trace!("{}: omitting attribute {}", head, key);
                }
            }
            Attr::Literal { pairs } => {
                let (key, value) = single_pair(&head, pairs)?;
                attr_strings.push(format!("{}={}", key, value));
            }
        }
    }

    if attr_strings.is_empty() {
        Ok(head)
    } else {
        Ok(format!("{} {}", head, attr_strings.join(" ")))
    }
}

fn render_field(key: &str, value: AttrValue<'_>) -> Result<Option<String>> {
    let rendered = match value {
        AttrValue::Count(0) | AttrValue::Flag(false) => return Ok(None),
        AttrValue::Count(n) => format!("{}={}", key, n),
        AttrValue::Text(text) => format!("{}={:?}", key, text),
        AttrValue::Nested(inner) => format!("{}={}", key, inner.describe()?),
        AttrValue::Flag(true) => key.to_string(),
        AttrValue::Plain(text) => format!("{}={}", key, text),
    };
    Ok(Some(rendered))
}

fn single_pair(head: &str, mut pairs: Vec<(String, String)>) -> Result<(String, String)> {
    let reason = match pairs.len() {
        1 if pairs[0].0.is_empty() => "literal key is empty".to_string(),
        1 => return Ok(pairs.remove(0)),
        n => format!("literal selector must have exactly one key, got {}", n),
    };
    debug!("{}: rejecting describe selector: {}", head, reason);
    Err(TdgenError::MalformedSelector {
        entity: head.to_string(),
        reason,
    })
}
