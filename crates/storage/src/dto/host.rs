use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::common::AppearanceCounts;
use crate::models::{Host, HostAppearanceRow};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HostResponse {
    pub id: i32,
    pub name: String,
    pub slug: Option<String>,
    pub gender: Option<String>,
    pub pronouns: Option<String>,
}

impl From<Host> for HostResponse {
    fn from(host: Host) -> Self {
        Self {
            id: host.id,
            name: host.name,
            slug: host.slug,
            gender: host.gender,
            pronouns: host.pronouns,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HostAppearance {
    pub show_id: i32,
    pub date: NaiveDate,
    pub best_of: bool,
    pub repeat_show: bool,
    /// True when this was a fill-in (guest host) appearance.
    pub guest_host: bool,
}

impl From<HostAppearanceRow> for HostAppearance {
    fn from(row: HostAppearanceRow) -> Self {
        Self {
            show_id: row.show_id,
            date: row.date,
            best_of: row.best_of,
            repeat_show: row.repeat_show,
            guest_host: row.guest_host,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HostAppearances {
    pub count: AppearanceCounts,
    pub shows: Vec<HostAppearance>,
}

impl HostAppearances {
    pub fn from_rows(rows: Vec<HostAppearanceRow>) -> Self {
        let count = AppearanceCounts::tally(rows.iter().map(|r| (r.best_of, r.repeat_show)));
        Self {
            count,
            shows: rows.into_iter().map(HostAppearance::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HostDetailResponse {
    pub id: i32,
    pub name: String,
    pub slug: Option<String>,
    pub gender: Option<String>,
    pub pronouns: Option<String>,
    pub appearances: HostAppearances,
}

impl HostDetailResponse {
    pub fn compose(host: Host, rows: Vec<HostAppearanceRow>) -> Self {
        Self {
            id: host.id,
            name: host.name,
            slug: host.slug,
            gender: host.gender,
            pronouns: host.pronouns,
            appearances: HostAppearances::from_rows(rows),
        }
    }
}
