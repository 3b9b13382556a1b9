//! RBS method definitions

use crate::parameter::{describe_parameters, Parameter};
use tdgen_core::{Attr, Dialect, EntityBase, TypeExpr, TypedEntity};

/// One overload of an RBS method, e.g. `(Integer x) -> String`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    pub parameters: Vec<Parameter>,
    /// `None` means `void`
    pub return_type: Option<TypeExpr>,
}

impl MethodSignature {
    pub fn new(parameters: Vec<Parameter>, return_type: Option<TypeExpr>) -> Self {
        Self {
            parameters,
            return_type,
        }
    }

    /// Short form used inside a method's descriptor
    pub fn describe_in_method(&self) -> String {
        let returns = self
            .return_type
            .as_ref()
            .map(TypeExpr::summary)
            .unwrap_or_else(|| "void".to_string());
        format!("{} -> {}", describe_parameters(&self.parameters), returns)
    }
}

/// A method with one or more overloaded signatures
#[derive(Debug, Clone)]
pub struct Method {
    base: EntityBase,
    pub signatures: Vec<MethodSignature>,
    pub class_method: bool,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: EntityBase::new(name),
            signatures: Vec::new(),
            class_method: false,
        }
    }

    /// Add an overload
    pub fn signature(mut self, signature: MethodSignature) -> Self {
        self.signatures.push(signature);
        self
    }
}

impl TypedEntity for Method {
    fn base(&self) -> &EntityBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut EntityBase {
        &mut self.base
    }

    fn dialect(&self) -> Dialect {
        Dialect::Rbs
    }

    fn describe_attrs(&self) -> Vec<Attr<'_>> {
        let signatures = self
            .signatures
            .iter()
            .map(MethodSignature::describe_in_method)
            .collect::<Vec<_>>()
            .join(", ");

        vec![
            Attr::field("class_method", self.class_method),
            Attr::literal("signatures", format!("({})", signatures)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tdgen_core::Describe;

    #[test]
    fn test_overloads() {
        let mut method = Method::new("[]")
            .signature(MethodSignature::new(
                vec![Parameter::new("index").with_type("Integer")],
                Some(TypeExpr::nilable("String")),
            ))
            .signature(MethodSignature::new(Vec::new(), None));
        method.class_method = true;

        assert_eq!(
            method.describe().unwrap(),
            "RBS:Method:[] class_method \
             signatures=((index: Integer) -> Nilable<String>, () -> void)"
        );
    }

    #[test]
    fn test_no_signatures() {
        let method = Method::new("noop");
        assert_eq!(method.describe().unwrap(), "RBS:Method:noop signatures=()");
    }
}
