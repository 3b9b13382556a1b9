//! Typed entity data model

use super::comment::{render_comment_lines, CommentInput};
use super::describe::{describe_entity, short_type_name, Attr};
use crate::config::{Indent, Options};
use crate::error::Result;
use crate::types::{Dialect, GeneratorId};
use serde::{Deserialize, Serialize};

/// State shared by every entity in a type-definition document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityBase {
    /// Name of the definition
    name: String,
    /// Leading documentation comments, one line each
    #[serde(default)]
    comments: Vec<String>,
    /// Generation pass that produced this entity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    generated_by: Option<GeneratorId>,
}

impl EntityBase {
    /// Create a base with no comments and no provenance
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comments: Vec::new(),
            generated_by: None,
        }
    }

    /// Create a base recording the generator that produced it
    pub fn generated(name: impl Into<String>, generator: GeneratorId) -> Self {
        Self {
            generated_by: Some(generator),
            ..Self::new(name)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn generated_by(&self) -> Option<GeneratorId> {
        self.generated_by
    }

    /// Record the generator that produced this entity
    pub fn set_generated_by(&mut self, generator: GeneratorId) {
        self.generated_by = Some(generator);
    }

    /// Append one comment line or a batch of lines
    pub fn add_comment(&mut self, comment: impl Into<CommentInput>) {
        comment.into().append_to(&mut self.comments);
    }

    /// Render comments as `# ...` lines at nesting depth `level`
    pub fn render_comments(&self, level: usize, indent: &dyn Indent) -> Vec<String> {
        render_comment_lines(&self.comments, level, indent)
    }

    /// Serialize to a JSON snapshot for diagnostics
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore from a JSON snapshot
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A definition that can appear in a generated type-definition document
///
/// Implementors own an [`EntityBase`] and choose which of their own fields
/// show up in descriptors through [`describe_attrs`](Self::describe_attrs).
/// Every implementor is [`Describe`](super::Describe).
pub trait TypedEntity {
    fn base(&self) -> &EntityBase;

    fn base_mut(&mut self) -> &mut EntityBase;

    /// Output dialect this entity is written in
    fn dialect(&self) -> Dialect;

    /// Attributes shown after the name in the descriptor, in order
    fn describe_attrs(&self) -> Vec<Attr<'_>>;

    /// Short type name used in descriptors
    fn kind_name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }

    /// Entities nested directly inside this one
    fn children(&self) -> Vec<&dyn TypedEntity> {
        Vec::new()
    }

    fn name(&self) -> &str {
        self.base().name()
    }

    fn comments(&self) -> &[String] {
        self.base().comments()
    }

    fn generated_by(&self) -> Option<GeneratorId> {
        self.base().generated_by()
    }

    fn add_comment(&mut self, comment: impl Into<CommentInput>)
    where
        Self: Sized,
    {
        self.base_mut().add_comment(comment);
    }

    fn render_comments(&self, level: usize, indent: &dyn Indent) -> Vec<String> {
        self.base().render_comments(level, indent)
    }

    /// Descriptor of this entity followed by its children, one per line
    fn describe_tree(&self, options: &Options) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        push_tree(self, 0, options, &mut lines)?;
        Ok(lines)
    }
}

fn push_tree<E: TypedEntity + ?Sized>(
    entity: &E,
    level: usize,
    options: &Options,
    lines: &mut Vec<String>,
) -> Result<()> {
    lines.push(options.indented(level, &describe_entity(entity)?));

    let mut children = entity.children();
    if options.sort_namespaces {
        children.sort_by(|a, b| a.name().cmp(b.name()));
    }
    for child in children {
        push_tree(child, level + 1, options, lines)?;
    }
    Ok(())
}
