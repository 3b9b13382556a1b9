//! RBI constant definitions

use tdgen_core::{Attr, Dialect, EntityBase, TypedEntity};

/// A constant assignment, e.g. `VERSION = T.let(T.unsafe(nil), String)`
#[derive(Debug, Clone)]
pub struct Constant {
    base: EntityBase,
    /// Right-hand side source text
    pub value: String,
    /// Defined on the singleton class
    pub eigen_constant: bool,
}

impl Constant {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            base: EntityBase::new(name),
            value: value.into(),
            eigen_constant: false,
        }
    }
}

impl TypedEntity for Constant {
    fn base(&self) -> &EntityBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut EntityBase {
        &mut self.base
    }

    fn dialect(&self) -> Dialect {
        Dialect::Rbi
    }

    fn describe_attrs(&self) -> Vec<Attr<'_>> {
        vec![
            Attr::field("value", &self.value),
            Attr::field("eigen_constant", self.eigen_constant),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tdgen_core::Describe;

    #[test]
    fn test_describe() {
        let constant = Constant::new("VERSION", "T.let(T.unsafe(nil), String)");
        assert_eq!(
            constant.describe().unwrap(),
            r#"RBI:Constant:VERSION value="T.let(T.unsafe(nil), String)""#
        );
    }

    #[test]
    fn test_eigen_constant() {
        let mut constant = Constant::new("LIMIT", "3");
        constant.eigen_constant = true;
        assert_eq!(
            constant.describe().unwrap(),
            r#"RBI:Constant:LIMIT value="3" eigen_constant"#
        );
    }
}
