//! RBI method definitions

use crate::parameter::{describe_parameters, Parameter};
use tdgen_core::{Attr, Dialect, EntityBase, TypeExpr, TypedEntity};

/// A method with a Sorbet `sig`
#[derive(Debug, Clone)]
pub struct Method {
    base: EntityBase,
    pub parameters: Vec<Parameter>,
    /// `None` means the method returns void
    pub return_type: Option<TypeExpr>,
    pub is_abstract: bool,
    pub implementation: bool,
    pub is_override: bool,
    pub overridable: bool,
    pub class_method: bool,
    pub is_final: bool,
    pub type_parameters: Vec<String>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: EntityBase::new(name),
            parameters: Vec::new(),
            return_type: None,
            is_abstract: false,
            implementation: false,
            is_override: false,
            overridable: false,
            class_method: false,
            is_final: false,
            type_parameters: Vec::new(),
        }
    }

    /// Add a parameter
    pub fn param(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Set the return type
    pub fn returns(mut self, return_type: impl Into<TypeExpr>) -> Self {
        self.return_type = Some(return_type.into());
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
        Dialect::Rbi
    }

    fn describe_attrs(&self) -> Vec<Attr<'_>> {
        let mut attrs = Vec::new();
        if !self.type_parameters.is_empty() {
            attrs.push(Attr::literal(
                "type_parameters",
                self.type_parameters.join(", "),
            ));
        }
        attrs.push(Attr::literal(
            "parameters",
            describe_parameters(&self.parameters),
        ));
        attrs.push(match &self.return_type {
            Some(ty) => Attr::field("return_type", ty),
            None => Attr::literal("return_type", "(void)"),
        });
        attrs.extend([
            Attr::field("class_method", self.class_method),
            Attr::field("abstract", self.is_abstract),
            Attr::field("implementation", self.implementation),
            Attr::field("override", self.is_override),
            Attr::field("overridable", self.overridable),
            Attr::field("final", self.is_final),
        ]);
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tdgen_core::Describe;

    #[test]
    fn test_void_method() {
        let method = Method::new("reset");
        assert_eq!(
            method.describe().unwrap(),
            "RBI:Method:reset parameters=() return_type=(void)"
        );
    }

    #[test]
    fn test_full_method() {
        let mut method = Method::new("fetch")
            .param(Parameter::new("key").with_type("Symbol"))
            .param(Parameter::new("default").with_type(TypeExpr::Untyped).with_default("nil"))
            .returns(TypeExpr::nilable("String"));
        method.is_abstract = true;
        method.class_method = true;
        method.type_parameters = vec!["K".to_string(), "V".to_string()];

        assert_eq!(
            method.describe().unwrap(),
            "RBI:Method:fetch type_parameters=K, V \
             parameters=(key: Symbol, default: untyped = nil) \
             return_type=Nilable<String> class_method abstract"
        );
    }

    #[test]
    fn test_comments() {
        let mut method = Method::new("fetch");
        method.add_comment("Looks up a key.");
        method.add_comment(vec!["", "Returns nil when missing."]);

        let options = tdgen_core::Options::default();
        assert_eq!(
            method.render_comments(1, &options),
            vec!["  # Looks up a key.", "  # ", "  # Returns nil when missing."]
        );
    }
}
