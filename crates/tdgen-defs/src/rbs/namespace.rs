//! RBS class definitions

use super::{Constant, Method};
use crate::children::ChildList;
use tdgen_core::{Attr, CommentInput, Dialect, EntityBase, TypeExpr, TypedEntity};

/// A class declaration and its members
#[derive(Debug)]
pub struct ClassNamespace {
    base: EntityBase,
    pub superclass: Option<TypeExpr>,
    children: ChildList,
}

impl ClassNamespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: EntityBase::new(name),
            superclass: None,
            children: ChildList::new(),
        }
    }

    pub fn with_superclass(mut self, superclass: impl Into<TypeExpr>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    /// Queue comments for whichever child is created next
    pub fn add_comment_to_next_child(&mut self, comment: impl Into<CommentInput>) {
        self.children.add_comment_to_next_child(comment);
    }

    pub fn add_child<E: TypedEntity + 'static>(&mut self, child: E) {
        self.children.push(child, Dialect::Rbs);
    }

    pub fn create_method(&mut self, name: impl Into<String>, configure: impl FnOnce(&mut Method)) {
        let mut method = Method::new(name);
        method.add_comment(self.children.take_pending_comments());
        configure(&mut method);
        self.children.push(method, Dialect::Rbs);
    }

    pub fn create_constant(&mut self, name: impl Into<String>, type_expr: impl Into<TypeExpr>) {
        let mut constant = Constant::new(name, type_expr);
        constant.add_comment(self.children.take_pending_comments());
        self.children.push(constant, Dialect::Rbs);
    }
}

impl TypedEntity for ClassNamespace {
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
        let mut attrs = Vec::new();
        if let Some(superclass) = &self.superclass {
            attrs.push(Attr::field("superclass", superclass));
        }
        attrs.push(Attr::field("children", &self.children));
        attrs
    }

    fn children(&self) -> Vec<&dyn TypedEntity> {
        self.children.as_refs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rbi;
    use crate::rbs::MethodSignature;
    use pretty_assertions::assert_eq;
    use tdgen_core::{Describe, Options};

    #[test]
    fn test_describe() {
        let mut class = ClassNamespace::new("Stack")
            .with_superclass(TypeExpr::generic("Base", ["Elem"]));
        class.create_constant("LIMIT", "Integer");

        assert_eq!(
            class.describe().unwrap(),
            "RBS:ClassNamespace:Stack superclass=Base<Elem> children=1"
        );
    }

    #[test]
    fn test_empty_class() {
        let class = ClassNamespace::new("Foo");
        assert_eq!(class.describe().unwrap(), "RBS:ClassNamespace:Foo");
    }

    #[test]
    fn test_conflicting_definitions_are_distinguishable() {
        let mut rbi_method = rbi::Method::new("size").returns("Integer");
        rbi_method.is_override = true;
        let rbs_method = Method::new("size").signature(MethodSignature::new(
            Vec::new(),
            Some(TypeExpr::raw("Integer")),
        ));

        let candidates: Vec<Box<dyn TypedEntity>> =
            vec![Box::new(rbi_method), Box::new(rbs_method)];
        let descriptors = candidates
            .iter()
            .map(|c| c.describe().unwrap())
            .collect::<Vec<_>>();

        assert_eq!(
            descriptors,
            vec![
                "RBI:Method:size parameters=() return_type=Integer override",
                "RBS:Method:size signatures=(() -> Integer)",
            ]
        );
    }

    #[test]
    fn test_comments_and_tree() {
        let mut class = ClassNamespace::new("Stack");
        class.add_comment("A LIFO container.");
        class.add_comment_to_next_child("Pushes an element.");
        class.create_method("push", |m| {
            m.signatures.push(MethodSignature::new(Vec::new(), None));
        });

        let options = Options::default();
        assert_eq!(class.render_comments(0, &options), vec!["# A LIFO container."]);
        assert_eq!(
            class.children()[0].render_comments(1, &options),
            vec!["  # Pushes an element."]
        );
        assert_eq!(
            class.describe_tree(&options).unwrap(),
            vec![
                "RBS:ClassNamespace:Stack children=1",
                "  RBS:Method:push signatures=(() -> void)",
            ]
        );
    }
}
