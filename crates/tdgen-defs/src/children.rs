//! Child storage shared by namespace kinds

use tdgen_core::{AttrValue, CommentInput, Dialect, TypedEntity};
use tracing::{debug, warn};

/// Ordered children of a namespace
///
/// Comments queued with [`add_comment_to_next_child`](Self::add_comment_to_next_child)
/// are attached to whichever child is pushed next.
#[derive(Default)]
pub struct ChildList {
    children: Vec<Box<dyn TypedEntity>>,
    next_comments: Vec<String>,
}

impl ChildList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue comments for the next child
    pub fn add_comment_to_next_child(&mut self, comment: impl Into<CommentInput>) {
        match comment.into() {
            CommentInput::Line(line) => self.next_comments.push(line),
            CommentInput::Lines(lines) => self.next_comments.extend(lines),
        }
    }

    /// Push `child`, appending any still-queued comments to its own
    pub fn push<E: TypedEntity + 'static>(&mut self, mut child: E, parent: Dialect) {
        if child.dialect() != parent {
            warn!(
                "Adding {} child {} to {} namespace",
                child.dialect(),
                child.name(),
                parent
            );
        }

        let pending = self.take_pending_comments();
        if !pending.is_empty() {
            child.add_comment(pending);
        }

        debug!("Added child {}", child.name());
        self.children.push(Box::new(child));
    }

    /// Remove and return the queued comments
    pub(crate) fn take_pending_comments(&mut self) -> Vec<String> {
        std::mem::take(&mut self.next_comments)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Comments waiting for the next child
    pub fn pending_comments(&self) -> &[String] {
        &self.next_comments
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn TypedEntity> {
        self.children.iter().map(|c| c.as_ref())
    }

    /// Children as trait objects, for [`TypedEntity::children`]
    pub fn as_refs(&self) -> Vec<&dyn TypedEntity> {
        self.iter().collect()
    }
}

impl<'a> From<&'a ChildList> for AttrValue<'a> {
    fn from(children: &'a ChildList) -> Self {
        AttrValue::Count(children.len())
    }
}

impl std::fmt::Debug for ChildList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChildList")
            .field("children", &self.children.len())
            .field("next_comments", &self.next_comments)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rbi::Constant;

    #[test]
    fn test_counts_as_collection() {
        let mut children = ChildList::new();
        assert!(matches!(AttrValue::from(&children), AttrValue::Count(0)));

        children.push(Constant::new("A", "1"), Dialect::Rbi);
        assert!(matches!(AttrValue::from(&children), AttrValue::Count(1)));
    }
}
