//! ReadingOrder - Passage ordering preference

use serde::{Deserialize, Serialize};

/// Ordering preference inside a plan.
///
/// Stored per user; `Normal` follows the plan table as-is. `Alternado`
/// is reserved for alternating Old/New Testament schedules.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReadingOrder {
    #[default]
    Normal,
    Alternado,
}

impl std::fmt::Display for ReadingOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadingOrder::Normal => write!(f, "normal"),
            ReadingOrder::Alternado => write!(f, "alternado"),
        }
    }
}

impl std::str::FromStr for ReadingOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(ReadingOrder::Normal),
            "alternado" => Ok(ReadingOrder::Alternado),
            _ => Err(format!("Unknown reading order: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_orders() {
        assert_eq!(
            ReadingOrder::from_str("normal").unwrap(),
            ReadingOrder::Normal
        );
        assert_eq!(
            ReadingOrder::from_str("Alternado").unwrap(),
            ReadingOrder::Alternado
        );
        assert!(ReadingOrder::from_str("reverso").is_err());
    }
}
