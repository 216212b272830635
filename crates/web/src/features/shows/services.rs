use chrono::NaiveDate;
use sqlx::PgPool;
use storage::{
    dto::show::ShowDetailResponse, error::Result, models::Show, repository::show::ShowRepository,
    resolve, scoring::ScoringMode,
};

/// List all shows in air-date order
pub async fn list_shows(pool: &PgPool) -> Result<Vec<Show>> {
    ShowRepository::new(pool).list().await
}

/// List all show dates in air-date order
pub async fn list_show_dates(pool: &PgPool) -> Result<Vec<NaiveDate>> {
    ShowRepository::new(pool).list_dates().await
}

/// Get show by ID
pub async fn get_show_by_id(pool: &PgPool, id: i32) -> Result<Show> {
    let id = resolve::entity_id(id)?;
    ShowRepository::new(pool).find_by_id(id).await
}

/// Shows within one year
pub async fn get_shows_by_year(pool: &PgPool, year: i32) -> Result<Vec<Show>> {
    let year = resolve::year(year)?;
    ShowRepository::new(pool).list_by_year(year).await
}

/// Shows within one month of one year
pub async fn get_shows_by_year_month(pool: &PgPool, year: i32, month: i32) -> Result<Vec<Show>> {
    let year = resolve::year(year)?;
    let month = resolve::month(month)?;
    ShowRepository::new(pool).list_by_year_month(year, month).await
}

/// The show that aired on an exact date
pub async fn get_show_by_date(pool: &PgPool, year: i32, month: i32, day: i32) -> Result<Show> {
    let year = resolve::year(year)?;
    let month = resolve::month(month)?;
    let day = resolve::day(day)?;
    ShowRepository::new(pool).find_by_date(year, month, day).await
}

/// Shows airing on a calendar day across all years
pub async fn get_shows_by_month_day(pool: &PgPool, month: i32, day: i32) -> Result<Vec<Show>> {
    let month = resolve::month(month)?;
    let day = resolve::day(day)?;
    ShowRepository::new(pool).list_by_month_day(month, day).await
}

/// Get a uniformly random show
pub async fn get_random_show(pool: &PgPool) -> Result<Show> {
    let repo = ShowRepository::new(pool);
    let id = repo.random_id().await?;
    repo.find_by_id(id).await
}

/// Get a uniformly random show within a year
pub async fn get_random_show_by_year(pool: &PgPool, year: i32) -> Result<Show> {
    let year = resolve::year(year)?;
    let repo = ShowRepository::new(pool);
    let id = repo.random_id_by_year(year).await?;
    repo.find_by_id(id).await
}

/// List details for all shows
pub async fn list_show_details(pool: &PgPool, mode: ScoringMode) -> Result<Vec<ShowDetailResponse>> {
    ShowRepository::new(pool).list_details(mode).await
}

/// Get one show with all related entities attached
pub async fn get_show_details_by_id(
    pool: &PgPool,
    id: i32,
    mode: ScoringMode,
) -> Result<ShowDetailResponse> {
    let id = resolve::entity_id(id)?;
    ShowRepository::new(pool).find_detail_by_id(id, mode).await
}

pub async fn get_show_details_by_year(
    pool: &PgPool,
    year: i32,
    mode: ScoringMode,
) -> Result<Vec<ShowDetailResponse>> {
    let year = resolve::year(year)?;
    ShowRepository::new(pool).details_by_year(year, mode).await
}

pub async fn get_show_details_by_year_month(
    pool: &PgPool,
    year: i32,
    month: i32,
    mode: ScoringMode,
) -> Result<Vec<ShowDetailResponse>> {
    let year = resolve::year(year)?;
    let month = resolve::month(month)?;
    ShowRepository::new(pool)
        .details_by_year_month(year, month, mode)
        .await
}

pub async fn get_show_details_by_date(
    pool: &PgPool,
    year: i32,
    month: i32,
    day: i32,
    mode: ScoringMode,
) -> Result<ShowDetailResponse> {
    let year = resolve::year(year)?;
    let month = resolve::month(month)?;
    let day = resolve::day(day)?;
    ShowRepository::new(pool)
        .find_detail_by_date(year, month, day, mode)
        .await
}

pub async fn get_show_details_by_month_day(
    pool: &PgPool,
    month: i32,
    day: i32,
    mode: ScoringMode,
) -> Result<Vec<ShowDetailResponse>> {
    let month = resolve::month(month)?;
    let day = resolve::day(day)?;
    ShowRepository::new(pool)
        .details_by_month_day(month, day, mode)
        .await
}

/// Get details for a uniformly random show
pub async fn get_random_show_details(
    pool: &PgPool,
    mode: ScoringMode,
) -> Result<ShowDetailResponse> {
    let repo = ShowRepository::new(pool);
    let id = repo.random_id().await?;
    repo.find_detail_by_id(id, mode).await
}

/// Get details for a uniformly random show within a year
pub async fn get_random_show_details_by_year(
    pool: &PgPool,
    year: i32,
    mode: ScoringMode,
) -> Result<ShowDetailResponse> {
    let year = resolve::year(year)?;
    let repo = ShowRepository::new(pool);
    let id = repo.random_id_by_year(year).await?;
    repo.find_detail_by_id(id, mode).await
}
