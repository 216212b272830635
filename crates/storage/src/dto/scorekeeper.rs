use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::common::AppearanceCounts;
use crate::models::{Scorekeeper, ScorekeeperAppearanceRow};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScorekeeperResponse {
    pub id: i32,
    pub name: String,
    pub slug: Option<String>,
    pub gender: Option<String>,
    pub pronouns: Option<String>,
}

impl From<Scorekeeper> for ScorekeeperResponse {
    fn from(scorekeeper: Scorekeeper) -> Self {
        Self {
            id: scorekeeper.id,
            name: scorekeeper.name,
            slug: scorekeeper.slug,
            gender: scorekeeper.gender,
            pronouns: scorekeeper.pronouns,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScorekeeperAppearance {
    pub show_id: i32,
    pub date: NaiveDate,
    pub best_of: bool,
    pub repeat_show: bool,
    pub guest: bool,
    /// On-air introduction used for the scorekeeper that show.
    pub description: Option<String>,
}

impl From<ScorekeeperAppearanceRow> for ScorekeeperAppearance {
    fn from(row: ScorekeeperAppearanceRow) -> Self {
        Self {
            show_id: row.show_id,
            date: row.date,
            best_of: row.best_of,
            repeat_show: row.repeat_show,
            guest: row.guest,
            description: row.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScorekeeperAppearances {
    pub count: AppearanceCounts,
    pub shows: Vec<ScorekeeperAppearance>,
}

impl ScorekeeperAppearances {
    pub fn from_rows(rows: Vec<ScorekeeperAppearanceRow>) -> Self {
        let count = AppearanceCounts::tally(rows.iter().map(|r| (r.best_of, r.repeat_show)));
        Self {
            count,
            shows: rows.into_iter().map(ScorekeeperAppearance::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScorekeeperDetailResponse {
    pub id: i32,
    pub name: String,
    pub slug: Option<String>,
    pub gender: Option<String>,
    pub pronouns: Option<String>,
    pub appearances: ScorekeeperAppearances,
}

impl ScorekeeperDetailResponse {
    pub fn compose(scorekeeper: Scorekeeper, rows: Vec<ScorekeeperAppearanceRow>) -> Self {
        Self {
            id: scorekeeper.id,
            name: scorekeeper.name,
            slug: scorekeeper.slug,
            gender: scorekeeper.gender,
            pronouns: scorekeeper.pronouns,
            appearances: ScorekeeperAppearances::from_rows(rows),
        }
    }
}
