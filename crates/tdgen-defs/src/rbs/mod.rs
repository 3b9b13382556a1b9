//! RBS definitions

mod constant;
mod method;
mod namespace;

pub use constant::Constant;
pub use method::{Method, MethodSignature};
pub use namespace::ClassNamespace;
