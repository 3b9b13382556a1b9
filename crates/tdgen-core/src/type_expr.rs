//! Type expressions used in signatures
//!
//! A [`TypeExpr`] can be written out in either dialect and describes itself
//! in a dialect-neutral form for entity descriptors, so a method whose return
//! type is `T.nilable(String)` in RBI and `String?` in RBS has the same
//! `return=Nilable<String>` attribute in both.

use crate::entity::{AttrValue, Describe};
use crate::error::Result;
use crate::types::Dialect;
use serde::{Deserialize, Serialize};

/// A type appearing in a generated signature
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeExpr {
    /// Type written verbatim, e.g. `String`
    Raw(String),
    /// The inner type or nil
    Nilable(Box<TypeExpr>),
    /// Any one of the types
    Union(Vec<TypeExpr>),
    /// All of the types at once
    Intersection(Vec<TypeExpr>),
    /// Fixed-length array with per-position types
    Tuple(Vec<TypeExpr>),
    Array(Box<TypeExpr>),
    Set(Box<TypeExpr>),
    Hash(Box<TypeExpr>, Box<TypeExpr>),
    /// User-defined generic, e.g. `Box[Integer]`
    Generic {
        base: Box<TypeExpr>,
        params: Vec<TypeExpr>,
    },
    Boolean,
    SelfType,
    Untyped,
}

impl TypeExpr {
    pub fn raw(s: impl Into<String>) -> Self {
        TypeExpr::Raw(s.into())
    }

    pub fn nilable(inner: impl Into<TypeExpr>) -> Self {
        TypeExpr::Nilable(Box::new(inner.into()))
    }

    pub fn union<T: Into<TypeExpr>>(types: impl IntoIterator<Item = T>) -> Self {
        TypeExpr::Union(types.into_iter().map(Into::into).collect())
    }

    pub fn intersection<T: Into<TypeExpr>>(types: impl IntoIterator<Item = T>) -> Self {
        TypeExpr::Intersection(types.into_iter().map(Into::into).collect())
    }

    pub fn tuple<T: Into<TypeExpr>>(types: impl IntoIterator<Item = T>) -> Self {
        TypeExpr::Tuple(types.into_iter().map(Into::into).collect())
    }

    pub fn array(element: impl Into<TypeExpr>) -> Self {
        TypeExpr::Array(Box::new(element.into()))
    }

    pub fn set(element: impl Into<TypeExpr>) -> Self {
        TypeExpr::Set(Box::new(element.into()))
    }

    pub fn hash(key: impl Into<TypeExpr>, value: impl Into<TypeExpr>) -> Self {
        TypeExpr::Hash(Box::new(key.into()), Box::new(value.into()))
    }

    pub fn generic<T: Into<TypeExpr>>(
        base: impl Into<TypeExpr>,
        params: impl IntoIterator<Item = T>,
    ) -> Self {
        TypeExpr::Generic {
            base: Box::new(base.into()),
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// Dialect-neutral summary, e.g. `Hash<Symbol, Nilable<String>>`
    pub fn summary(&self) -> String {
        match self {
            TypeExpr::Raw(s) => s.clone(),
            TypeExpr::Nilable(inner) => format!("Nilable<{}>", inner.summary()),
            TypeExpr::Union(types) => format!("Union<{}>", join_summaries(types)),
            TypeExpr::Intersection(types) => {
                format!("Intersection<{}>", join_summaries(types))
            }
            TypeExpr::Tuple(types) => format!("[{}]", join_summaries(types)),
            TypeExpr::Array(element) => format!("Array<{}>", element.summary()),
            TypeExpr::Set(element) => format!("Set<{}>", element.summary()),
            TypeExpr::Hash(key, value) => {
                format!("Hash<{}, {}>", key.summary(), value.summary())
            }
            TypeExpr::Generic { base, params } => {
                format!("{}<{}>", base.summary(), join_summaries(params))
            }
            TypeExpr::Boolean => "bool".to_string(),
            TypeExpr::SelfType => "self".to_string(),
            TypeExpr::Untyped => "untyped".to_string(),
        }
    }

    /// Source text of this type in `dialect`
    pub fn generate(&self, dialect: Dialect) -> String {
        match dialect {
            Dialect::Rbi => self.generate_rbi(),
            Dialect::Rbs => self.generate_rbs(),
        }
    }

    fn generate_rbi(&self) -> String {
        let join = |types: &[TypeExpr]| {
            types
                .iter()
                .map(TypeExpr::generate_rbi)
                .collect::<Vec<_>>()
                .join(", ")
        };

        match self {
            TypeExpr::Raw(s) => s.clone(),
            TypeExpr::Nilable(inner) => format!("T.nilable({})", inner.generate_rbi()),
            TypeExpr::Union(types) => format!("T.any({})", join(types)),
            TypeExpr::Intersection(types) => format!("T.all({})", join(types)),
            TypeExpr::Tuple(types) => format!("[{}]", join(types)),
            TypeExpr::Array(element) => format!("T::Array[{}]", element.generate_rbi()),
            TypeExpr::Set(element) => format!("T::Set[{}]", element.generate_rbi()),
            TypeExpr::Hash(key, value) => {
                format!("T::Hash[{}, {}]", key.generate_rbi(), value.generate_rbi())
            }
            TypeExpr::Generic { base, params } => {
                format!("{}[{}]", base.generate_rbi(), join(params))
            }
            TypeExpr::Boolean => "T::Boolean".to_string(),
            TypeExpr::SelfType => "T.self_type".to_string(),
            TypeExpr::Untyped => "T.untyped".to_string(),
        }
    }

    fn generate_rbs(&self) -> String {
        let join = |types: &[TypeExpr], sep: &str| {
            types
                .iter()
                .map(TypeExpr::generate_rbs)
                .collect::<Vec<_>>()
                .join(sep)
        };

        match self {
            TypeExpr::Raw(s) => s.clone(),
            TypeExpr::Nilable(inner) => format!("{}?", inner.generate_rbs()),
            TypeExpr::Union(types) => format!("({})", join(types, " | ")),
            TypeExpr::Intersection(types) => format!("({})", join(types, " & ")),
            TypeExpr::Tuple(types) => format!("[{}]", join(types, ", ")),
            TypeExpr::Array(element) => format!("Array[{}]", element.generate_rbs()),
            TypeExpr::Set(element) => format!("Set[{}]", element.generate_rbs()),
            TypeExpr::Hash(key, value) => {
                format!("Hash[{}, {}]", key.generate_rbs(), value.generate_rbs())
            }
            TypeExpr::Generic { base, params } => {
                format!("{}[{}]", base.generate_rbs(), join(params, ", "))
            }
            TypeExpr::Boolean => "bool".to_string(),
            TypeExpr::SelfType => "self".to_string(),
            TypeExpr::Untyped => "untyped".to_string(),
        }
    }
}

fn join_summaries(types: &[TypeExpr]) -> String {
    types
        .iter()
        .map(TypeExpr::summary)
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<&str> for TypeExpr {
    fn from(s: &str) -> Self {
        TypeExpr::Raw(s.to_string())
    }
}

impl From<String> for TypeExpr {
    fn from(s: String) -> Self {
        TypeExpr::Raw(s)
    }
}

impl Describe for TypeExpr {
    fn describe(&self) -> Result<String> {
        Ok(self.summary())
    }
}

impl<'a> From<&'a TypeExpr> for AttrValue<'a> {
    fn from(value: &'a TypeExpr) -> Self {
        AttrValue::Nested(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_summary() {
        let ty = TypeExpr::hash("Symbol", TypeExpr::nilable("String"));
        assert_eq!(ty.summary(), "Hash<Symbol, Nilable<String>>");
        assert_eq!(
            TypeExpr::union(["Integer", "Float"]).summary(),
            "Union<Integer, Float>"
        );
        assert_eq!(TypeExpr::tuple(["A", "B"]).summary(), "[A, B]");
        assert_eq!(TypeExpr::generic("Box", ["Integer"]).summary(), "Box<Integer>");
        assert_eq!(TypeExpr::Boolean.summary(), "bool");
    }

    #[test]
    fn test_generate_rbi() {
        let ty = TypeExpr::nilable(TypeExpr::array(TypeExpr::union(["Integer", "String"])));
        assert_eq!(
            ty.generate(Dialect::Rbi),
            "T.nilable(T::Array[T.any(Integer, String)])"
        );
        assert_eq!(TypeExpr::Boolean.generate(Dialect::Rbi), "T::Boolean");
        assert_eq!(TypeExpr::SelfType.generate(Dialect::Rbi), "T.self_type");
        assert_eq!(
            TypeExpr::hash("Symbol", TypeExpr::Untyped).generate(Dialect::Rbi),
            "T::Hash[Symbol, T.untyped]"
        );
    }

    #[test]
    fn test_generate_rbs() {
        let ty = TypeExpr::nilable(TypeExpr::array(TypeExpr::union(["Integer", "String"])));
        assert_eq!(ty.generate(Dialect::Rbs), "Array[(Integer | String)]?");
        assert_eq!(
            TypeExpr::intersection(["A", "B"]).generate(Dialect::Rbs),
            "(A & B)"
        );
        assert_eq!(TypeExpr::set(TypeExpr::Boolean).generate(Dialect::Rbs), "Set[bool]");
    }

    #[test]
    fn test_describe_trait() {
        let ty = TypeExpr::set("Symbol");
        assert_eq!(Describe::describe(&ty).unwrap(), "Set<Symbol>");
    }
}
