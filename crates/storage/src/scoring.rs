use serde::{Deserialize, Serialize};

/// Deployment-wide score representation.
///
/// Fixed once at startup from configuration; every response built during the
/// process lifetime uses the same mode, so integer and decimal score fields
/// never mix within one deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    Integer,
    Decimal,
}

impl ScoringMode {
    pub fn from_flag(use_decimal_scores: bool) -> Self {
        if use_decimal_scores {
            Self::Decimal
        } else {
            Self::Integer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_selects_mode() {
        assert_eq!(ScoringMode::from_flag(false), ScoringMode::Integer);
        assert_eq!(ScoringMode::from_flag(true), ScoringMode::Decimal);
    }
}
