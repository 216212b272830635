use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Base show record.
///
/// `repeat_show_id` points at the earliest airing when this row is a repeat;
/// `original_show_date` is resolved by the same query via self-join so the
/// pair is always populated together.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Show {
    pub id: i32,
    pub date: NaiveDate,
    pub best_of: bool,
    pub repeat_show_id: Option<i32>,
    pub original_show_date: Option<NaiveDate>,
    pub show_url: Option<String>,
}

impl Show {
    pub fn is_repeat(&self) -> bool {
        self.repeat_show_id.is_some()
    }
}
