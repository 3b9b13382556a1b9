//! Method parameters

use tdgen_core::TypeExpr;

/// A parameter of a method signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Name including any `*`, `**`, `&` prefix or `:` suffix
    pub name: String,
    pub type_expr: TypeExpr,
    /// Default value source text
    pub default: Option<String>,
}

impl Parameter {
    /// Create an untyped parameter
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_expr: TypeExpr::Untyped,
            default: None,
        }
    }

    pub fn with_type(mut self, type_expr: impl Into<TypeExpr>) -> Self {
        self.type_expr = type_expr.into();
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Short form used inside a method's descriptor, e.g. `x: Integer = 1`
    pub fn describe_in_method(&self) -> String {
        let name = self.name.trim_end_matches(':');
        let ty = self.type_expr.summary();
        match &self.default {
            Some(default) => format!("{}: {} = {}", name, ty, default),
            None => format!("{}: {}", name, ty),
        }
    }
}

/// Describe parameters as `(a: A, b: B)`
pub(crate) fn describe_parameters(parameters: &[Parameter]) -> String {
    let inner = parameters
        .iter()
        .map(Parameter::describe_in_method)
        .collect::<Vec<_>>()
        .join(", ");
    format!("({})", inner)
}
