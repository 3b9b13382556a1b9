//! tdgen-core - Core library for tdgen
//!
//! This crate provides the entity model shared by every definition a
//! type-definition generator emits, including comment handling, type
//! expressions, formatting options and entity descriptors.

pub mod config;
pub mod entity;
pub mod error;
pub mod type_expr;
pub mod types;

pub use config::{Config, Indent, Options};
pub use entity::{Attr, AttrValue, CommentInput, Describe, EntityBase, TypedEntity};
pub use error::{Result, TdgenError};
pub use type_expr::TypeExpr;
pub use types::*;
