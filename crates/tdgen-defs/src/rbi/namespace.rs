//! RBI class definitions

use super::{Constant, Method};
use crate::children::ChildList;
use tdgen_core::{Attr, CommentInput, Dialect, EntityBase, TypedEntity};

/// A class and the definitions nested in it
#[derive(Debug)]
pub struct ClassNamespace {
    base: EntityBase,
    pub superclass: Option<String>,
    pub is_abstract: bool,
    pub is_final: bool,
    pub sealed: bool,
    pub includes: Vec<String>,
    pub extends: Vec<String>,
    children: ChildList,
}

impl ClassNamespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: EntityBase::new(name),
            superclass: None,
            is_abstract: false,
            is_final: false,
            sealed: false,
            includes: Vec::new(),
            extends: Vec::new(),
            children: ChildList::new(),
        }
    }

    pub fn with_superclass(mut self, superclass: impl Into<String>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    /// Queue comments for whichever child is created next
    pub fn add_comment_to_next_child(&mut self, comment: impl Into<CommentInput>) {
        self.children.add_comment_to_next_child(comment);
    }

    /// Add an already-built child
    pub fn add_child<E: TypedEntity + 'static>(&mut self, child: E) {
        self.children.push(child, Dialect::Rbi);
    }

    pub fn create_method(&mut self, name: impl Into<String>, configure: impl FnOnce(&mut Method)) {
        let mut method = Method::new(name);
        method.add_comment(self.children.take_pending_comments());
        configure(&mut method);
        self.children.push(method, Dialect::Rbi);
    }

    pub fn create_constant(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        configure: impl FnOnce(&mut Constant),
    ) {
        let mut constant = Constant::new(name, value);
        constant.add_comment(self.children.take_pending_comments());
        configure(&mut constant);
        self.children.push(constant, Dialect::Rbi);
    }

    pub fn create_class(
        &mut self,
        name: impl Into<String>,
        configure: impl FnOnce(&mut ClassNamespace),
    ) {
        let mut class = ClassNamespace::new(name);
        class.add_comment(self.children.take_pending_comments());
        configure(&mut class);
        self.children.push(class, Dialect::Rbi);
    }

    pub fn child_list(&self) -> &ChildList {
        &self.children
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
        Dialect::Rbi
    }

    fn describe_attrs(&self) -> Vec<Attr<'_>> {
        let mut attrs = Vec::new();
        if let Some(superclass) = &self.superclass {
            attrs.push(Attr::field("superclass", superclass));
        }
        attrs.extend([
            Attr::field("final", self.is_final),
            Attr::field("sealed", self.sealed),
            Attr::field("abstract", self.is_abstract),
            Attr::field("children", &self.children),
            Attr::field("includes", &self.includes),
            Attr::field("extends", &self.extends),
        ]);
        attrs
    }

    fn children(&self) -> Vec<&dyn TypedEntity> {
        self.children.as_refs()
    }
}
