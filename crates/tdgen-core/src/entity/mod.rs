//! Typed entity module
//!
//! Base model shared by every definition in a generated document: name,
//! leading comments, provenance, and the descriptor algorithm.

pub mod comment;
pub mod describe;
pub mod model;

pub use comment::{render_comment_lines, CommentInput};
pub use describe::{describe_entity, short_type_name, Attr, AttrValue, Describe};
pub use model::{EntityBase, TypedEntity};
