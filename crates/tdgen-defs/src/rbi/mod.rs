//! Sorbet RBI definitions

mod constant;
mod method;
mod namespace;

pub use constant::Constant;
pub use method::Method;
pub use namespace::ClassNamespace;
