//! tdgen-defs - Definition kinds for tdgen
//!
//! Concrete entities for the RBI and RBS dialects built on the
//! [`tdgen_core::TypedEntity`] model.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tdgen_core::{Describe, TypeExpr};
//! use tdgen_defs::rbi::{ClassNamespace, Method};
//!
//! let mut class = ClassNamespace::new("Greeter");
//! class.create_method("greet", |m| {
//!     m.return_type = Some(TypeExpr::raw("String"));
//! });
//! println!("{}", class.describe()?);
//! ```

mod children;
pub mod parameter;
pub mod rbi;
pub mod rbs;

pub use children::ChildList;
pub use parameter::Parameter;
