use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::dto::common::{AppearanceCounts, ScoreField, ScoreValue, ShowStamp};
use crate::models::{Panelist, PanelistAppearanceRow};
use crate::scoring::ScoringMode;
use crate::services::stats::{self, RankTally, ScoreSummary};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PanelistResponse {
    pub id: i32,
    pub name: String,
    pub slug: Option<String>,
    pub gender: Option<String>,
    pub pronouns: Option<String>,
}

impl From<Panelist> for PanelistResponse {
    fn from(panelist: Panelist) -> Self {
        Self {
            id: panelist.id,
            name: panelist.name,
            slug: panelist.slug,
            gender: panelist.gender,
            pronouns: panelist.pronouns,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PanelistAppearance {
    pub show_id: i32,
    pub date: NaiveDate,
    pub best_of: bool,
    pub repeat_show: bool,
    pub lightning_round_start: Option<i32>,
    pub lightning_round_correct: Option<i32>,
    #[serde(flatten)]
    #[schema(inline)]
    pub score: ScoreField,
    pub rank: Option<String>,
}

impl PanelistAppearance {
    fn from_row(row: PanelistAppearanceRow, mode: ScoringMode) -> Self {
        Self {
            show_id: row.show_id,
            date: row.date,
            best_of: row.best_of,
            repeat_show: row.repeat_show,
            lightning_round_start: row.lightning_round_start,
            lightning_round_correct: row.lightning_round_correct,
            score: ScoreField::new(mode, row.score, row.score_decimal),
            rank: row.rank,
        }
    }
}

/// First and most recent appearance markers; absent for panelists who have
/// never appeared.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct AppearanceMilestones {
    pub first: ShowStamp,
    pub most_recent: ShowStamp,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PanelistAppearances {
    pub count: AppearanceCounts,
    pub milestones: Option<AppearanceMilestones>,
    pub shows: Vec<PanelistAppearance>,
}

impl PanelistAppearances {
    pub fn from_rows(rows: Vec<PanelistAppearanceRow>, mode: ScoringMode) -> Self {
        let count = AppearanceCounts::tally(rows.iter().map(|r| (r.best_of, r.repeat_show)));

        // Rows are ordered ascending by date, so the ends are the milestones.
        let milestones = match (rows.first(), rows.last()) {
            (Some(first), Some(last)) => Some(AppearanceMilestones {
                first: ShowStamp {
                    show_id: first.show_id,
                    date: first.date,
                },
                most_recent: ShowStamp {
                    show_id: last.show_id,
                    date: last.date,
                },
            }),
            _ => None,
        };

        Self {
            count,
            milestones,
            shows: rows
                .into_iter()
                .map(|row| PanelistAppearance::from_row(row, mode))
                .collect(),
        }
    }
}

/// Scoring statistics over all recorded scores, in the active
/// representation.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScoringStats {
    pub count: i64,
    pub minimum: ScoreValue,
    pub maximum: ScoreValue,
    pub mean: Decimal,
    pub median: Decimal,
    pub standard_deviation: Decimal,
    pub total: ScoreValue,
}

impl ScoringStats {
    fn new(summary: ScoreSummary, mode: ScoringMode) -> Self {
        Self {
            count: summary.count,
            minimum: ScoreValue::from_decimal(mode, summary.minimum),
            maximum: ScoreValue::from_decimal(mode, summary.maximum),
            mean: summary.mean,
            median: summary.median,
            standard_deviation: summary.standard_deviation,
            total: ScoreValue::from_decimal(mode, summary.total),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct RankCounts {
    pub first: i64,
    pub first_tied: i64,
    pub second: i64,
    pub second_tied: i64,
    pub third: i64,
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct RankPercentages {
    pub first: Decimal,
    pub first_tied: Decimal,
    pub second: Decimal,
    pub second_tied: Decimal,
    pub third: Decimal,
}

/// Ranking counts and percentages over appearances with a recorded rank.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct RankStats {
    pub total_ranked: i64,
    pub counts: RankCounts,
    pub percentages: RankPercentages,
}

impl RankStats {
    fn from_tally(tally: RankTally) -> Self {
        let total = tally.total();
        Self {
            total_ranked: total,
            counts: RankCounts {
                first: tally.first,
                first_tied: tally.first_tied,
                second: tally.second,
                second_tied: tally.second_tied,
                third: tally.third,
            },
            percentages: RankPercentages {
                first: stats::rank_percentage(tally.first, total),
                first_tied: stats::rank_percentage(tally.first_tied, total),
                second: stats::rank_percentage(tally.second, total),
                second_tied: stats::rank_percentage(tally.second_tied, total),
                third: stats::rank_percentage(tally.third, total),
            },
        }
    }
}

/// Bluff the Listener outcome counts for one panelist.
#[derive(Debug, Clone, Copy, Serialize, FromRow, ToSchema)]
pub struct BluffCounts {
    pub chosen: i64,
    pub correct: i64,
}

/// Panelist plus statistics and appearance history.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PanelistDetailResponse {
    pub id: i32,
    pub name: String,
    pub slug: Option<String>,
    pub gender: Option<String>,
    pub pronouns: Option<String>,
    /// Null when the panelist has no recorded scores.
    pub statistics: Option<ScoringStats>,
    pub ranks: RankStats,
    pub bluffs: BluffCounts,
    pub appearances: PanelistAppearances,
}

impl PanelistDetailResponse {
    pub fn compose(
        panelist: Panelist,
        rows: Vec<PanelistAppearanceRow>,
        bluffs: BluffCounts,
        mode: ScoringMode,
    ) -> Self {
        let scores: Vec<Decimal> = rows
            .iter()
            .filter_map(|row| match mode {
                ScoringMode::Integer => row.score.map(Decimal::from),
                ScoringMode::Decimal => row.score_decimal,
            })
            .collect();

        let statistics =
            stats::summarize_scores(&scores).map(|summary| ScoringStats::new(summary, mode));

        let tally = stats::tally_ranks(rows.iter().filter_map(|row| row.rank.as_deref()));

        Self {
            id: panelist.id,
            name: panelist.name,
            slug: panelist.slug,
            gender: panelist.gender,
            pronouns: panelist.pronouns,
            statistics,
            ranks: RankStats::from_tally(tally),
            bluffs,
            appearances: PanelistAppearances::from_rows(rows, mode),
        }
    }
}

/// Ordered (date, score) pairs for a panelist's scored appearances.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PanelistScoreEntry {
    pub date: NaiveDate,
    #[serde(flatten)]
    #[schema(inline)]
    pub score: ScoreField,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PanelistScoresResponse {
    pub id: i32,
    pub scores: Vec<PanelistScoreEntry>,
}

impl PanelistScoresResponse {
    /// Keeps only appearances whose score is recorded in the active mode.
    pub fn from_rows(id: i32, rows: Vec<PanelistAppearanceRow>, mode: ScoringMode) -> Self {
        let scores = rows
            .into_iter()
            .filter_map(|row| {
                let score = ScoreField::new(mode, row.score, row.score_decimal);
                score.recorded().is_some().then(|| PanelistScoreEntry {
                    date: row.date,
                    score,
                })
            })
            .collect();

        Self { id, scores }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panelist() -> Panelist {
        Panelist {
            id: 14,
            name: "Paula Poundstone".into(),
            slug: Some("paula-poundstone".into()),
            gender: Some("F".into()),
            pronouns: Some("she/her".into()),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn row(
        show_id: i32,
        d: NaiveDate,
        score: Option<i32>,
        rank: Option<&str>,
    ) -> PanelistAppearanceRow {
        PanelistAppearanceRow {
            show_id,
            date: d,
            best_of: false,
            repeat_show: false,
            lightning_round_start: Some(2),
            lightning_round_correct: Some(4),
            score,
            score_decimal: score.map(Decimal::from),
            rank: rank.map(String::from),
        }
    }

    #[test]
    fn test_compose_builds_statistics_and_milestones() {
        let rows = vec![
            row(10, date(2010, 1, 2), Some(10), Some("3")),
            row(20, date(2011, 5, 7), Some(12), Some("2")),
            row(30, date(2012, 9, 8), Some(14), Some("1")),
            row(40, date(2013, 3, 1), Some(18), Some("1")),
        ];

        let detail = PanelistDetailResponse::compose(
            panelist(),
            rows,
            BluffCounts {
                chosen: 3,
                correct: 2,
            },
            ScoringMode::Integer,
        );

        let statistics = detail.statistics.unwrap();
        assert_eq!(statistics.count, 4);
        assert_eq!(statistics.mean, Decimal::new(135, 1));

        assert_eq!(detail.ranks.total_ranked, 4);
        assert_eq!(detail.ranks.counts.first, 2);
        assert_eq!(detail.ranks.percentages.first, Decimal::new(50, 0));

        let milestones = detail.appearances.milestones.unwrap();
        assert_eq!(milestones.first.show_id, 10);
        assert_eq!(milestones.most_recent.show_id, 40);
    }

    #[test]
    fn test_compose_without_appearances_has_no_statistics() {
        let detail = PanelistDetailResponse::compose(
            panelist(),
            Vec::new(),
            BluffCounts {
                chosen: 0,
                correct: 0,
            },
            ScoringMode::Integer,
        );

        assert!(detail.statistics.is_none());
        assert!(detail.appearances.milestones.is_none());
        assert_eq!(detail.ranks.total_ranked, 0);
        assert_eq!(detail.ranks.percentages.first, Decimal::ZERO);
        assert_eq!(detail.appearances.count.all_shows, 0);
    }

    #[test]
    fn test_unscored_appearances_are_listed_but_not_counted_in_stats() {
        let rows = vec![
            row(10, date(2010, 1, 2), Some(10), Some("1")),
            row(20, date(2011, 5, 7), None, None),
        ];

        let detail = PanelistDetailResponse::compose(
            panelist(),
            rows,
            BluffCounts {
                chosen: 0,
                correct: 0,
            },
            ScoringMode::Integer,
        );

        assert_eq!(detail.statistics.unwrap().count, 1);
        assert_eq!(detail.appearances.shows.len(), 2);
    }

    #[test]
    fn test_scores_list_skips_unrecorded_entries() {
        let rows = vec![
            row(10, date(2010, 1, 2), Some(10), Some("1")),
            row(20, date(2011, 5, 7), None, None),
            row(30, date(2012, 9, 8), Some(16), Some("1")),
        ];

        let scores = PanelistScoresResponse::from_rows(14, rows, ScoringMode::Integer);
        assert_eq!(scores.scores.len(), 2);
        assert_eq!(scores.scores[0].date, date(2010, 1, 2));
    }

    #[test]
    fn test_mode_switch_keeps_the_same_appearances() {
        let rows = vec![
            row(10, date(2010, 1, 2), Some(10), Some("1")),
            row(20, date(2011, 5, 7), Some(12), Some("2")),
        ];

        let integer = PanelistDetailResponse::compose(
            panelist(),
            rows.clone(),
            BluffCounts {
                chosen: 0,
                correct: 0,
            },
            ScoringMode::Integer,
        );
        let decimal = PanelistDetailResponse::compose(
            panelist(),
            rows,
            BluffCounts {
                chosen: 0,
                correct: 0,
            },
            ScoringMode::Decimal,
        );

        let int_ids: Vec<i32> = integer.appearances.shows.iter().map(|s| s.show_id).collect();
        let dec_ids: Vec<i32> = decimal.appearances.shows.iter().map(|s| s.show_id).collect();
        assert_eq!(int_ids, dec_ids);

        for show in &integer.appearances.shows {
            assert!(show.score.score.is_some());
            assert!(show.score.score_decimal.is_none());
        }
        for show in &decimal.appearances.shows {
            assert!(show.score.score.is_none());
            assert!(show.score.score_decimal.is_some());
        }
    }
}
