use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::common::{AppearanceCounts, ScoreField};
use crate::models::{Guest, GuestAppearanceRow};
use crate::scoring::ScoringMode;

/// Basic guest record.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GuestResponse {
    pub id: i32,
    pub name: String,
    pub slug: Option<String>,
}

impl From<Guest> for GuestResponse {
    fn from(guest: Guest) -> Self {
        Self {
            id: guest.id,
            name: guest.name,
            slug: guest.slug,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GuestAppearance {
    pub show_id: i32,
    pub date: NaiveDate,
    pub best_of: bool,
    pub repeat_show: bool,
    #[serde(flatten)]
    #[schema(inline)]
    pub score: ScoreField,
    pub score_exception: bool,
}

impl GuestAppearance {
    fn from_row(row: GuestAppearanceRow, mode: ScoringMode) -> Self {
        Self {
            show_id: row.show_id,
            date: row.date,
            best_of: row.best_of,
            repeat_show: row.repeat_show,
            score: ScoreField::new(mode, row.score, row.score_decimal),
            score_exception: row.score_exception,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GuestAppearances {
    pub count: AppearanceCounts,
    pub shows: Vec<GuestAppearance>,
}

impl GuestAppearances {
    /// Rows arrive ordered ascending by date; that order is preserved.
    pub fn from_rows(rows: Vec<GuestAppearanceRow>, mode: ScoringMode) -> Self {
        let count = AppearanceCounts::tally(rows.iter().map(|r| (r.best_of, r.repeat_show)));
        let shows = rows
            .into_iter()
            .map(|row| GuestAppearance::from_row(row, mode))
            .collect();

        Self { count, shows }
    }
}

/// Guest plus appearance history.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GuestDetailResponse {
    pub id: i32,
    pub name: String,
    pub slug: Option<String>,
    pub appearances: GuestAppearances,
}

impl GuestDetailResponse {
    pub fn compose(guest: Guest, rows: Vec<GuestAppearanceRow>, mode: ScoringMode) -> Self {
        Self {
            id: guest.id,
            name: guest.name,
            slug: guest.slug,
            appearances: GuestAppearances::from_rows(rows, mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn row(show_id: i32, date: NaiveDate, best_of: bool, repeat_show: bool) -> GuestAppearanceRow {
        GuestAppearanceRow {
            show_id,
            date,
            best_of,
            repeat_show,
            score: Some(2),
            score_decimal: Some(Decimal::TWO),
            score_exception: false,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_compose_preserves_row_order_and_counts() {
        let guest = Guest {
            id: 7,
            name: "Tom Hanks".into(),
            slug: Some("tom-hanks".into()),
        };
        let rows = vec![
            row(100, date(2018, 3, 3), false, false),
            row(150, date(2019, 7, 20), true, false),
            row(180, date(2020, 1, 11), false, true),
        ];

        let detail = GuestDetailResponse::compose(guest, rows, ScoringMode::Integer);

        assert_eq!(detail.appearances.count.all_shows, 3);
        assert_eq!(detail.appearances.count.regular_shows, 1);
        let ids: Vec<i32> = detail.appearances.shows.iter().map(|s| s.show_id).collect();
        assert_eq!(ids, vec![100, 150, 180]);
    }

    #[test]
    fn test_compose_with_no_appearances() {
        let guest = Guest {
            id: 9,
            name: "Unknown".into(),
            slug: None,
        };
        let detail = GuestDetailResponse::compose(guest, Vec::new(), ScoringMode::Decimal);

        assert_eq!(detail.appearances.count.all_shows, 0);
        assert!(detail.appearances.shows.is_empty());
    }
}
