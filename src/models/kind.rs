use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{AppError, AppResult};

/// Canonical clock event category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Clock-in.
    Entrada,
    /// Clock-out.
    Saida,
}

impl Kind {
    /// Map a free-form token to the canonical kind.
    ///
    /// Trims, folds case and accepts the short synonyms
    /// (`in`/`ent` → `entrada`, `out`/`sai` → `saida`).
    /// Blank or unknown input yields `None`.
    pub fn normalize(input: Option<&str>) -> Option<Self> {
        let s = input?.trim();
        if s.is_empty() {
            return None;
        }

        match s.to_lowercase().as_str() {
            "entrada" | "in" | "ent" => Some(Kind::Entrada),
            "saida" | "out" | "sai" => Some(Kind::Saida),
            _ => None,
        }
    }

    /// Like [`Kind::normalize`], but reports the rejected token.
    pub fn parse(input: &str) -> AppResult<Self> {
        Self::normalize(Some(input)).ok_or_else(|| AppError::InvalidKind(input.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Entrada => "entrada",
            Kind::Saida => "saida",
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, Kind::Entrada)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, Kind::Saida)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_canonical_and_synonyms() {
        assert_eq!(Kind::normalize(Some("entrada")), Some(Kind::Entrada));
        assert_eq!(Kind::normalize(Some("ENTRADA")), Some(Kind::Entrada));
        assert_eq!(Kind::normalize(Some(" in ")), Some(Kind::Entrada));
        assert_eq!(Kind::normalize(Some("ent")), Some(Kind::Entrada));
        assert_eq!(Kind::normalize(Some("sai")), Some(Kind::Saida));
        assert_eq!(Kind::normalize(Some("out")), Some(Kind::Saida));
        assert_eq!(Kind::normalize(Some("Saida")), Some(Kind::Saida));
    }

    #[test]
    fn rejects_unknown_and_blank() {
        assert_eq!(Kind::normalize(Some("foo")), None);
        assert_eq!(Kind::normalize(Some("")), None);
        assert_eq!(Kind::normalize(Some("   ")), None);
        assert_eq!(Kind::normalize(None), None);
    }

    #[test]
    fn parse_reports_invalid_kind() {
        match Kind::parse("lunch") {
            Err(AppError::InvalidKind(k)) => assert_eq!(k, "lunch"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Kind::Saida).unwrap(), "\"saida\"");
        let k: Kind = serde_json::from_str("\"entrada\"").unwrap();
        assert_eq!(k, Kind::Entrada);
    }
}
