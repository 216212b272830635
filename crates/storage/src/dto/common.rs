use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use utoipa::ToSchema;

use crate::scoring::ScoringMode;

/// Counts over an entity's show appearances. `regular_shows` counts first-run
/// shows only (neither best-of nor repeat), so `all_shows >= regular_shows`
/// always holds.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct AppearanceCounts {
    pub regular_shows: i64,
    pub all_shows: i64,
}

impl AppearanceCounts {
    /// Tally `(best_of, repeat_show)` flag pairs, one per appearance.
    pub fn tally(flags: impl IntoIterator<Item = (bool, bool)>) -> Self {
        let mut counts = Self {
            regular_shows: 0,
            all_shows: 0,
        };

        for (best_of, repeat_show) in flags {
            counts.all_shows += 1;
            if !best_of && !repeat_show {
                counts.regular_shows += 1;
            }
        }

        counts
    }
}

/// A score in the deployment's active representation.
///
/// The active mode's field is always serialized, null when unrecorded; the
/// other mode's field is omitted entirely. Field presence is therefore
/// stable across requests within one deployment and the two representations
/// never appear together on one item.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScoreField {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i32>)]
    pub score: Option<Option<i32>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Decimal>)]
    pub score_decimal: Option<Option<Decimal>>,
}

impl ScoreField {
    pub fn new(mode: ScoringMode, score: Option<i32>, score_decimal: Option<Decimal>) -> Self {
        match mode {
            ScoringMode::Integer => Self {
                score: Some(score),
                score_decimal: None,
            },
            ScoringMode::Decimal => Self {
                score: None,
                score_decimal: Some(score_decimal),
            },
        }
    }

    /// The recorded value in the active mode, as a decimal, if any.
    pub fn recorded(&self) -> Option<Decimal> {
        match self {
            Self {
                score: Some(value), ..
            } => value.map(Decimal::from),
            Self {
                score_decimal: Some(value),
                ..
            } => *value,
            _ => None,
        }
    }
}

/// A numeric aggregate in the active representation. Unlike per-item scores
/// the field name stays constant; only the number shape switches with the
/// mode.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ScoreValue {
    Integer(i64),
    Decimal(Decimal),
}

impl ScoreValue {
    pub fn from_decimal(mode: ScoringMode, value: Decimal) -> Self {
        match mode {
            ScoringMode::Integer => Self::Integer(value.trunc().to_i64().unwrap_or_default()),
            ScoringMode::Decimal => Self::Decimal(value),
        }
    }
}

/// A show reference as an id/date pair (milestone markers).
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct ShowStamp {
    pub show_id: i32,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_exclude_best_of_and_repeats_from_regular() {
        let counts = AppearanceCounts::tally([
            (false, false),
            (true, false),
            (false, true),
            (true, true),
            (false, false),
        ]);
        assert_eq!(counts.all_shows, 5);
        assert_eq!(counts.regular_shows, 2);
        assert!(counts.all_shows >= counts.regular_shows);
    }

    #[test]
    fn test_zero_appearances_is_a_legitimate_tally() {
        let counts = AppearanceCounts::tally([]);
        assert_eq!(counts.regular_shows, 0);
        assert_eq!(counts.all_shows, 0);
    }

    #[test]
    fn test_integer_mode_emits_null_score_and_omits_decimal() {
        let field = ScoreField::new(ScoringMode::Integer, None, None);
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json, serde_json::json!({ "score": null }));
    }

    #[test]
    fn test_decimal_mode_emits_only_decimal_field() {
        let field = ScoreField::new(
            ScoringMode::Decimal,
            Some(14),
            Some(Decimal::new(145, 1)), // 14.5
        );
        let json = serde_json::to_value(&field).unwrap();
        assert!(json.get("score").is_none());
        assert_eq!(
            json.get("score_decimal"),
            Some(&serde_json::json!("14.5"))
        );
    }

    #[test]
    fn test_recorded_follows_active_mode() {
        let field = ScoreField::new(ScoringMode::Integer, Some(12), Some(Decimal::new(145, 1)));
        assert_eq!(field.recorded(), Some(Decimal::from(12)));

        let field = ScoreField::new(ScoringMode::Decimal, Some(12), None);
        assert_eq!(field.recorded(), None);
    }

    #[test]
    fn test_score_value_representation_switches_with_mode() {
        let v = Decimal::new(175, 1); // 17.5
        assert_eq!(
            serde_json::to_value(ScoreValue::from_decimal(ScoringMode::Integer, v)).unwrap(),
            serde_json::json!(17)
        );
        assert_eq!(
            serde_json::to_value(ScoreValue::from_decimal(ScoringMode::Decimal, v)).unwrap(),
            serde_json::json!("17.5")
        );
    }
}
