//! Core type definitions for tdgen

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Output type-definition format an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Sorbet RBI files
    Rbi,
    /// Ruby 3 RBS signatures
    Rbs,
}

impl Dialect {
    /// Prefix used in entity descriptors
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Rbi => "RBI",
            Dialect::Rbs => "RBS",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = crate::TdgenError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "rbi" => Ok(Dialect::Rbi),
            "rbs" => Ok(Dialect::Rbs),
            _ => Err(crate::TdgenError::UnknownDialect(s.to_string())),
        }
    }
}

/// Identifier of the generation pass that produced an entity
///
/// Only used for provenance; entities never look the generator up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratorId(pub Uuid);

impl GeneratorId {
    /// Generate a new GeneratorId
    pub fn new() -> Self {
        GeneratorId(Uuid::new_v4())
    }
}

impl Default for GeneratorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GeneratorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_display() {
        assert_eq!(Dialect::Rbi.to_string(), "RBI");
        assert_eq!(Dialect::Rbs.to_string(), "RBS");
    }

    #[test]
    fn test_dialect_parse() {
        assert_eq!("rbi".parse::<Dialect>().unwrap(), Dialect::Rbi);
        assert_eq!("RBS".parse::<Dialect>().unwrap(), Dialect::Rbs);

        let err = "d.ts".parse::<Dialect>().unwrap_err();
        assert!(matches!(err, crate::TdgenError::UnknownDialect(ref s) if s == "d.ts"));
    }

    #[test]
    fn test_dialect_serialization() {
        let json = serde_json::to_string(&Dialect::Rbi).unwrap();
        assert_eq!(json, "\"rbi\"");
        let dialect: Dialect = serde_json::from_str("\"rbs\"").unwrap();
        assert_eq!(dialect, Dialect::Rbs);
    }

    #[test]
    fn test_generator_id_uniqueness() {
        let id1 = GeneratorId::new();
        let id2 = GeneratorId::new();
        assert_ne!(id1, id2);
    }
}
