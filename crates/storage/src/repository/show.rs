use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use crate::dto::common::ScoreField;
use crate::dto::location::LocationResponse;
use crate::dto::show::{
    BluffPanelist, BluffSegment, ShowDetailResponse, ShowGuest, ShowHost, ShowPanelist,
    ShowScorekeeper,
};
use crate::error::{Result, StorageError};
use crate::models::{Location, Show};
use crate::scoring::ScoringMode;

/// Base show projection, self-joined so a repeat's original air date comes
/// back with the row.
const SHOW_SELECT: &str = r#"
    SELECT s.showid AS id,
           s.showdate AS date,
           s.bestof AS best_of,
           s.repeatshowid AS repeat_show_id,
           o.showdate AS original_show_date,
           s.showurl AS show_url
    FROM ww_shows s
    LEFT JOIN ww_shows o ON o.showid = s.repeatshowid
"#;

pub struct ShowRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ShowRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all shows in air-date order
    pub async fn list(&self) -> Result<Vec<Show>> {
        let shows =
            sqlx::query_as::<_, Show>(&format!("{SHOW_SELECT} ORDER BY s.showdate ASC"))
                .fetch_all(self.pool)
                .await?;

        Ok(shows)
    }

    /// List all show dates in air-date order
    pub async fn list_dates(&self) -> Result<Vec<NaiveDate>> {
        let dates =
            sqlx::query_scalar::<_, NaiveDate>("SELECT showdate FROM ww_shows ORDER BY showdate")
                .fetch_all(self.pool)
                .await?;

        Ok(dates)
    }

    /// Find show by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Show> {
        let show = sqlx::query_as::<_, Show>(&format!("{SHOW_SELECT} WHERE s.showid = $1"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(show)
    }

    /// Find the show that aired on an exact date. An impossible calendar
    /// combination (e.g. February 31st) matches nothing.
    pub async fn find_by_date(&self, year: i32, month: i32, day: i32) -> Result<Show> {
        let date = NaiveDate::from_ymd_opt(year, month as u32, day as u32)
            .ok_or(StorageError::NotFound)?;

        let show = sqlx::query_as::<_, Show>(&format!("{SHOW_SELECT} WHERE s.showdate = $1"))
            .bind(date)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(show)
    }

    /// Shows within one year; NotFound rather than an empty list when the
    /// year has no recorded shows.
    pub async fn list_by_year(&self, year: i32) -> Result<Vec<Show>> {
        let shows = sqlx::query_as::<_, Show>(&format!(
            "{SHOW_SELECT} WHERE EXTRACT(YEAR FROM s.showdate)::int = $1 ORDER BY s.showdate ASC"
        ))
        .bind(year)
        .fetch_all(self.pool)
        .await?;

        Self::non_empty(shows)
    }

    pub async fn list_by_year_month(&self, year: i32, month: i32) -> Result<Vec<Show>> {
        let shows = sqlx::query_as::<_, Show>(&format!(
            "{SHOW_SELECT} \
             WHERE EXTRACT(YEAR FROM s.showdate)::int = $1 \
               AND EXTRACT(MONTH FROM s.showdate)::int = $2 \
             ORDER BY s.showdate ASC"
        ))
        .bind(year)
        .bind(month)
        .fetch_all(self.pool)
        .await?;

        Self::non_empty(shows)
    }

    /// Shows airing on a calendar day across all years
    pub async fn list_by_month_day(&self, month: i32, day: i32) -> Result<Vec<Show>> {
        let shows = sqlx::query_as::<_, Show>(&format!(
            "{SHOW_SELECT} \
             WHERE EXTRACT(MONTH FROM s.showdate)::int = $1 \
               AND EXTRACT(DAY FROM s.showdate)::int = $2 \
             ORDER BY s.showdate ASC"
        ))
        .bind(month)
        .bind(day)
        .fetch_all(self.pool)
        .await?;

        Self::non_empty(shows)
    }

    /// Uniformly random show ID; NotFound when the table is empty
    pub async fn random_id(&self) -> Result<i32> {
        let id =
            sqlx::query_scalar::<_, i32>("SELECT showid FROM ww_shows ORDER BY RANDOM() LIMIT 1")
                .fetch_optional(self.pool)
                .await?
                .ok_or(StorageError::NotFound)?;

        Ok(id)
    }

    /// Uniformly random show ID within a year; NotFound when the candidate
    /// pool is empty
    pub async fn random_id_by_year(&self, year: i32) -> Result<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            "SELECT showid FROM ww_shows \
             WHERE EXTRACT(YEAR FROM showdate)::int = $1 \
             ORDER BY RANDOM() LIMIT 1",
        )
        .bind(year)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(id)
    }

    /// Get one show with all related entities attached
    pub async fn find_detail_by_id(&self, id: i32, mode: ScoringMode) -> Result<ShowDetailResponse> {
        let show = self.find_by_id(id).await?;
        self.compose_detail(show, mode).await
    }

    pub async fn find_detail_by_date(
        &self,
        year: i32,
        month: i32,
        day: i32,
        mode: ScoringMode,
    ) -> Result<ShowDetailResponse> {
        let show = self.find_by_date(year, month, day).await?;
        self.compose_detail(show, mode).await
    }

    pub async fn list_details(&self, mode: ScoringMode) -> Result<Vec<ShowDetailResponse>> {
        let shows = self.list().await?;
        self.compose_details(shows, mode).await
    }

    pub async fn details_by_year(
        &self,
        year: i32,
        mode: ScoringMode,
    ) -> Result<Vec<ShowDetailResponse>> {
        let shows = self.list_by_year(year).await?;
        self.compose_details(shows, mode).await
    }

    pub async fn details_by_year_month(
        &self,
        year: i32,
        month: i32,
        mode: ScoringMode,
    ) -> Result<Vec<ShowDetailResponse>> {
        let shows = self.list_by_year_month(year, month).await?;
        self.compose_details(shows, mode).await
    }

    pub async fn details_by_month_day(
        &self,
        month: i32,
        day: i32,
        mode: ScoringMode,
    ) -> Result<Vec<ShowDetailResponse>> {
        let shows = self.list_by_month_day(month, day).await?;
        self.compose_details(shows, mode).await
    }

    async fn compose_details(
        &self,
        shows: Vec<Show>,
        mode: ScoringMode,
    ) -> Result<Vec<ShowDetailResponse>> {
        let mut details = Vec::with_capacity(shows.len());
        for show in shows {
            details.push(self.compose_detail(show, mode).await?);
        }

        Ok(details)
    }

    /// Attach related entities in a fixed order. A missing optional relation
    /// degrades to null; only store failures propagate.
    async fn compose_detail(&self, show: Show, mode: ScoringMode) -> Result<ShowDetailResponse> {
        let location = self.location_for_show(show.id).await?;
        let host = self.host_for_show(show.id).await?;
        let scorekeeper = self.scorekeeper_for_show(show.id).await?;
        let panelists = self.panelists_for_show(show.id, mode).await?;
        let bluffs = self.bluffs_for_show(show.id).await?;
        let guests = self.guests_for_show(show.id, mode).await?;

        Ok(ShowDetailResponse::compose(
            show,
            location,
            host,
            scorekeeper,
            panelists,
            bluffs,
            guests,
        ))
    }

    async fn location_for_show(&self, show_id: i32) -> Result<Option<LocationResponse>> {
        let location = sqlx::query_as::<_, Location>(
            r#"
            SELECT l.locationid AS id, l.city, l.state, l.venue,
                   l.locationslug AS slug, l.latitude, l.longitude
            FROM ww_showlocationmap lm
            JOIN ww_locations l ON l.locationid = lm.locationid
            WHERE lm.showid = $1
            "#,
        )
        .bind(show_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(location.map(LocationResponse::from))
    }

    async fn host_for_show(&self, show_id: i32) -> Result<Option<ShowHost>> {
        let row = sqlx::query_as::<_, ShowHostRow>(
            r#"
            SELECT h.hostid AS id, h.host AS name, h.hostslug AS slug,
                   hm.guest AS guest_host
            FROM ww_showhostmap hm
            JOIN ww_hosts h ON h.hostid = hm.hostid
            WHERE hm.showid = $1
            "#,
        )
        .bind(show_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|r| ShowHost {
            id: r.id,
            name: r.name,
            slug: r.slug,
            guest_host: r.guest_host,
        }))
    }

    async fn scorekeeper_for_show(&self, show_id: i32) -> Result<Option<ShowScorekeeper>> {
        let row = sqlx::query_as::<_, ShowScorekeeperRow>(
            r#"
            SELECT sk.scorekeeperid AS id, sk.scorekeeper AS name,
                   sk.scorekeeperslug AS slug, skm.guest AS guest,
                   skm.description AS description
            FROM ww_showskmap skm
            JOIN ww_scorekeepers sk ON sk.scorekeeperid = skm.scorekeeperid
            WHERE skm.showid = $1
            "#,
        )
        .bind(show_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|r| ShowScorekeeper {
            id: r.id,
            name: r.name,
            slug: r.slug,
            guest: r.guest,
            description: r.description,
        }))
    }

    /// Panelists in seat order
    async fn panelists_for_show(
        &self,
        show_id: i32,
        mode: ScoringMode,
    ) -> Result<Vec<ShowPanelist>> {
        let rows = sqlx::query_as::<_, ShowPanelistRow>(
            r#"
            SELECT pn.panelistid AS id, pn.panelist AS name, pn.panelistslug AS slug,
                   pm.panelistlrndstart AS lightning_round_start,
                   pm.panelistlrndcorrect AS lightning_round_correct,
                   pm.panelistscore AS score,
                   pm.panelistscore_decimal AS score_decimal,
                   pm.showpnlrank AS rank
            FROM ww_showpnlmap pm
            JOIN ww_panelists pn ON pn.panelistid = pm.panelistid
            WHERE pm.showid = $1
            ORDER BY pm.showpnlmapid ASC
            "#,
        )
        .bind(show_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| ShowPanelist {
                id: r.id,
                name: r.name,
                slug: r.slug,
                lightning_round_start: r.lightning_round_start,
                lightning_round_correct: r.lightning_round_correct,
                score: ScoreField::new(mode, r.score, r.score_decimal),
                rank: r.rank,
            })
            .collect())
    }

    /// Bluff segments in segment order; either panelist may be unrecorded
    async fn bluffs_for_show(&self, show_id: i32) -> Result<Vec<BluffSegment>> {
        let rows = sqlx::query_as::<_, ShowBluffRow>(
            r#"
            SELECT bm.segment AS segment,
                   cp.panelistid AS chosen_id, cp.panelist AS chosen_name,
                   cp.panelistslug AS chosen_slug,
                   tp.panelistid AS correct_id, tp.panelist AS correct_name,
                   tp.panelistslug AS correct_slug
            FROM ww_showbluffmap bm
            LEFT JOIN ww_panelists cp ON cp.panelistid = bm.chosenbluffpnlid
            LEFT JOIN ww_panelists tp ON tp.panelistid = bm.correctbluffpnlid
            WHERE bm.showid = $1
            ORDER BY bm.segment ASC
            "#,
        )
        .bind(show_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| BluffSegment {
                segment: r.segment,
                chosen_panelist: match (r.chosen_id, r.chosen_name) {
                    (Some(id), Some(name)) => Some(BluffPanelist {
                        id,
                        name,
                        slug: r.chosen_slug,
                    }),
                    _ => None,
                },
                correct_panelist: match (r.correct_id, r.correct_name) {
                    (Some(id), Some(name)) => Some(BluffPanelist {
                        id,
                        name,
                        slug: r.correct_slug,
                    }),
                    _ => None,
                },
            })
            .collect())
    }

    /// Guests in billing order
    async fn guests_for_show(&self, show_id: i32, mode: ScoringMode) -> Result<Vec<ShowGuest>> {
        let rows = sqlx::query_as::<_, ShowGuestRow>(
            r#"
            SELECT g.guestid AS id, g.guest AS name, g.guestslug AS slug,
                   gm.guestscore AS score,
                   gm.guestscore_decimal AS score_decimal,
                   gm.exception AS score_exception
            FROM ww_showguestmap gm
            JOIN ww_guests g ON g.guestid = gm.guestid
            WHERE gm.showid = $1
            ORDER BY gm.showguestmapid ASC
            "#,
        )
        .bind(show_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| ShowGuest {
                id: r.id,
                name: r.name,
                slug: r.slug,
                score: ScoreField::new(mode, r.score, r.score_decimal),
                score_exception: r.score_exception,
            })
            .collect())
    }

    fn non_empty(shows: Vec<Show>) -> Result<Vec<Show>> {
        if shows.is_empty() {
            return Err(StorageError::NotFound);
        }
        Ok(shows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_year_scope_is_not_found() {
        assert!(matches!(
            ShowRepository::non_empty(Vec::new()),
            Err(StorageError::NotFound)
        ));
    }

    #[test]
    fn test_non_empty_year_scope_passes_through() {
        let show = Show {
            id: 1000,
            date: chrono::NaiveDate::from_ymd_opt(2015, 4, 18).unwrap(),
            best_of: false,
            repeat_show_id: None,
            original_show_date: None,
            show_url: None,
        };

        let shows = ShowRepository::non_empty(vec![show]).unwrap();
        assert_eq!(shows.len(), 1);
        assert_eq!(shows[0].id, 1000);
    }
}

#[derive(Debug, FromRow)]
struct ShowHostRow {
    id: i32,
    name: String,
    slug: Option<String>,
    guest_host: bool,
}

#[derive(Debug, FromRow)]
struct ShowScorekeeperRow {
    id: i32,
    name: String,
    slug: Option<String>,
    guest: bool,
    description: Option<String>,
}

#[derive(Debug, FromRow)]
struct ShowPanelistRow {
    id: i32,
    name: String,
    slug: Option<String>,
    lightning_round_start: Option<i32>,
    lightning_round_correct: Option<i32>,
    score: Option<i32>,
    score_decimal: Option<Decimal>,
    rank: Option<String>,
}

#[derive(Debug, FromRow)]
struct ShowBluffRow {
    segment: i32,
    chosen_id: Option<i32>,
    chosen_name: Option<String>,
    chosen_slug: Option<String>,
    correct_id: Option<i32>,
    correct_name: Option<String>,
    correct_slug: Option<String>,
}

#[derive(Debug, FromRow)]
struct ShowGuestRow {
    id: i32,
    name: String,
    slug: Option<String>,
    score: Option<i32>,
    score_decimal: Option<Decimal>,
    score_exception: bool,
}
