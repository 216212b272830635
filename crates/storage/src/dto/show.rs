use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::common::ScoreField;
use crate::dto::location::LocationResponse;
use crate::models::Show;

/// Basic show record. `original_show_id`/`original_show_date` are populated
/// if and only if `repeat_show` is true.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShowResponse {
    pub id: i32,
    pub date: NaiveDate,
    pub best_of: bool,
    pub repeat_show: bool,
    pub original_show_id: Option<i32>,
    pub original_show_date: Option<NaiveDate>,
    pub show_url: Option<String>,
}

impl From<Show> for ShowResponse {
    fn from(show: Show) -> Self {
        Self {
            id: show.id,
            date: show.date,
            best_of: show.best_of,
            repeat_show: show.is_repeat(),
            original_show_id: show.repeat_show_id,
            original_show_date: show.original_show_date,
            show_url: show.show_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShowHost {
    pub id: i32,
    pub name: String,
    pub slug: Option<String>,
    pub guest_host: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShowScorekeeper {
    pub id: i32,
    pub name: String,
    pub slug: Option<String>,
    pub guest: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShowPanelist {
    pub id: i32,
    pub name: String,
    pub slug: Option<String>,
    pub lightning_round_start: Option<i32>,
    pub lightning_round_correct: Option<i32>,
    #[serde(flatten)]
    #[schema(inline)]
    pub score: ScoreField,
    pub rank: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BluffPanelist {
    pub id: i32,
    pub name: String,
    pub slug: Option<String>,
}

/// One Bluff the Listener segment. Either panelist may be unrecorded.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BluffSegment {
    pub segment: i32,
    pub chosen_panelist: Option<BluffPanelist>,
    pub correct_panelist: Option<BluffPanelist>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShowGuest {
    pub id: i32,
    pub name: String,
    pub slug: Option<String>,
    #[serde(flatten)]
    #[schema(inline)]
    pub score: ScoreField,
    pub score_exception: bool,
}

/// Show plus everyone and everything attached to it. Optional related
/// entities degrade to null when unresolved; only the show itself is
/// required.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShowDetailResponse {
    pub id: i32,
    pub date: NaiveDate,
    pub best_of: bool,
    pub repeat_show: bool,
    pub original_show_id: Option<i32>,
    pub original_show_date: Option<NaiveDate>,
    pub show_url: Option<String>,
    pub location: Option<LocationResponse>,
    pub host: Option<ShowHost>,
    pub scorekeeper: Option<ShowScorekeeper>,
    pub panelists: Vec<ShowPanelist>,
    pub bluffs: Vec<BluffSegment>,
    pub guests: Vec<ShowGuest>,
}

impl ShowDetailResponse {
    #[allow(clippy::too_many_arguments)]
    pub fn compose(
        show: Show,
        location: Option<LocationResponse>,
        host: Option<ShowHost>,
        scorekeeper: Option<ShowScorekeeper>,
        panelists: Vec<ShowPanelist>,
        bluffs: Vec<BluffSegment>,
        guests: Vec<ShowGuest>,
    ) -> Self {
        let base = ShowResponse::from(show);
        Self {
            id: base.id,
            date: base.date,
            best_of: base.best_of,
            repeat_show: base.repeat_show,
            original_show_id: base.original_show_id,
            original_show_date: base.original_show_date,
            show_url: base.show_url,
            location,
            host,
            scorekeeper,
            panelists,
            bluffs,
            guests,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_run_show_has_no_original_reference() {
        let show = Show {
            id: 1000,
            date: date(2015, 4, 18),
            best_of: false,
            repeat_show_id: None,
            original_show_date: None,
            show_url: None,
        };

        let response = ShowResponse::from(show);
        assert!(!response.repeat_show);
        assert!(response.original_show_id.is_none());
        assert!(response.original_show_date.is_none());
    }

    #[test]
    fn test_repeat_show_carries_original_reference() {
        let show = Show {
            id: 1010,
            date: date(2015, 8, 1),
            best_of: false,
            repeat_show_id: Some(1000),
            original_show_date: Some(date(2015, 4, 18)),
            show_url: None,
        };

        let response = ShowResponse::from(show);
        assert!(response.repeat_show);
        assert_eq!(response.original_show_id, Some(1000));
        assert_eq!(response.original_show_date, Some(date(2015, 4, 18)));
    }

    #[test]
    fn test_compose_degrades_missing_relations_to_null() {
        let show = Show {
            id: 1020,
            date: date(2016, 2, 6),
            best_of: false,
            repeat_show_id: None,
            original_show_date: None,
            show_url: None,
        };

        let detail =
            ShowDetailResponse::compose(show, None, None, None, Vec::new(), Vec::new(), Vec::new());

        assert!(detail.location.is_none());
        assert!(detail.host.is_none());
        assert!(detail.scorekeeper.is_none());
        assert!(detail.panelists.is_empty());
    }
}
