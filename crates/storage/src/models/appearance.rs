//! Row shapes produced by the per-resource appearance queries.
//!
//! Every query orders by show date ascending; the `repeat_show` flag is
//! derived in SQL from the nullable repeat pointer on the show row.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct GuestAppearanceRow {
    pub show_id: i32,
    pub date: NaiveDate,
    pub best_of: bool,
    pub repeat_show: bool,
    pub score: Option<i32>,
    pub score_decimal: Option<Decimal>,
    /// Non-numeric outcome (e.g. disqualification) scored by exception.
    pub score_exception: bool,
}

#[derive(Debug, Clone, FromRow)]
pub struct HostAppearanceRow {
    pub show_id: i32,
    pub date: NaiveDate,
    pub best_of: bool,
    pub repeat_show: bool,
    pub guest_host: bool,
}

#[derive(Debug, Clone, FromRow)]
pub struct ScorekeeperAppearanceRow {
    pub show_id: i32,
    pub date: NaiveDate,
    pub best_of: bool,
    pub repeat_show: bool,
    pub guest: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct PanelistAppearanceRow {
    pub show_id: i32,
    pub date: NaiveDate,
    pub best_of: bool,
    pub repeat_show: bool,
    pub lightning_round_start: Option<i32>,
    pub lightning_round_correct: Option<i32>,
    pub score: Option<i32>,
    pub score_decimal: Option<Decimal>,
    /// Rank code: `1`, `1t`, `2`, `2t` or `3`.
    pub rank: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct LocationRecordingRow {
    pub show_id: i32,
    pub date: NaiveDate,
    pub best_of: bool,
    pub repeat_show: bool,
}
