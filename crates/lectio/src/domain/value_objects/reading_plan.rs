//! ReadingPlan - Annual reading plan codes

use serde::{Deserialize, Serialize};

/// Annual reading plan a user follows
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReadingPlan {
    #[default]
    Cronologico,
    Livros,
}

impl ReadingPlan {
    pub fn all() -> [ReadingPlan; 2] {
        [ReadingPlan::Cronologico, ReadingPlan::Livros]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReadingPlan::Cronologico => "Cronológico",
            ReadingPlan::Livros => "Por Livros",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ReadingPlan::Cronologico => "Leitura da Bíblia em ordem cronológica dos eventos",
            ReadingPlan::Livros => "Leitura por ordem dos livros bíblicos (NT primeiro)",
        }
    }
}

impl std::fmt::Display for ReadingPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadingPlan::Cronologico => write!(f, "cronologico"),
            ReadingPlan::Livros => write!(f, "livros"),
        }
    }
}

impl std::str::FromStr for ReadingPlan {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cronologico" => Ok(ReadingPlan::Cronologico),
            "livros" => Ok(ReadingPlan::Livros),
            _ => Err(format!("Unknown reading plan: {}", s)),
        }
    }
}
