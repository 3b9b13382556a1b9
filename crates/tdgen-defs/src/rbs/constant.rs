//! RBS constant definitions

use tdgen_core::{Attr, Dialect, EntityBase, TypeExpr, TypedEntity};

/// A constant declaration, e.g. `VERSION: String`
#[derive(Debug, Clone)]
pub struct Constant {
    base: EntityBase,
    pub type_expr: TypeExpr,
}

impl Constant {
    pub fn new(name: impl Into<String>, type_expr: impl Into<TypeExpr>) -> Self {
        Self {
            base: EntityBase::new(name),
            type_expr: type_expr.into(),
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
        Dialect::Rbs
    }

    fn describe_attrs(&self) -> Vec<Attr<'_>> {
        vec![Attr::field("type", &self.type_expr)]
    }
}
