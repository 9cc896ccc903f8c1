//! BibleVersion - Bible translation codes

use serde::{Deserialize, Serialize};

/// Bible translation offered to users
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum BibleVersion {
    #[default]
    Arc,
    Nvi,
    Acf,
}

impl BibleVersion {
    /// All translations the catalog ships texts for
    pub fn all() -> [BibleVersion; 3] {
        [BibleVersion::Arc, BibleVersion::Nvi, BibleVersion::Acf]
    }

    /// Human-readable translation name
    pub fn display_name(&self) -> &'static str {
        match self {
            BibleVersion::Arc => "Almeida Revista e Corrigida",
            BibleVersion::Nvi => "Nova Versão Internacional",
            BibleVersion::Acf => "Almeida Corrigida Fiel",
        }
    }
}

impl std::fmt::Display for BibleVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BibleVersion::Arc => write!(f, "ARC"),
            BibleVersion::Nvi => write!(f, "NVI"),
            BibleVersion::Acf => write!(f, "ACF"),
        }
    }
}

impl std::str::FromStr for BibleVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ARC" => Ok(BibleVersion::Arc),
            "NVI" => Ok(BibleVersion::Nvi),
            "ACF" => Ok(BibleVersion::Acf),
            _ => Err(format!("Unknown Bible version: {}", s)),
        }
    }
}
