use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::dto::show::{ShowDetailResponse, ShowResponse};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/v2.0/shows",
    responses(
        (status = 200, description = "List all shows in air-date order", body = Vec<ShowResponse>)
    ),
    tag = "shows"
)]
pub async fn list_shows(State(state): State<AppState>) -> Result<Response, WebError> {
    let shows = services::list_shows(state.db.pool()).await?;

    let response: Vec<ShowResponse> = shows.into_iter().map(ShowResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/shows/dates",
    responses(
        (status = 200, description = "All show dates in air-date order", body = Vec<String>)
    ),
    tag = "shows"
)]
pub async fn list_show_dates(State(state): State<AppState>) -> Result<Response, WebError> {
    let dates = services::list_show_dates(state.db.pool()).await?;

    Ok(Json(dates).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/shows/id/{id}",
    params(
        ("id" = i32, Path, description = "Show ID")
    ),
    responses(
        (status = 200, description = "Show found", body = ShowResponse),
        (status = 404, description = "Show not found")
    ),
    tag = "shows"
)]
pub async fn get_show_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let show = services::get_show_by_id(state.db.pool(), id).await?;

    Ok(Json(ShowResponse::from(show)).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/shows/date/{year}",
    params(
        ("year" = i32, Path, description = "Four-digit year")
    ),
    responses(
        (status = 200, description = "Shows within the year", body = Vec<ShowResponse>),
        (status = 404, description = "No shows in the year")
    ),
    tag = "shows"
)]
pub async fn get_shows_by_year(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Result<Response, WebError> {
    let shows = services::get_shows_by_year(state.db.pool(), year).await?;

    let response: Vec<ShowResponse> = shows.into_iter().map(ShowResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/shows/date/{year}/{month}",
    params(
        ("year" = i32, Path, description = "Four-digit year"),
        ("month" = i32, Path, description = "Month, 1 through 12")
    ),
    responses(
        (status = 200, description = "Shows within the month", body = Vec<ShowResponse>),
        (status = 404, description = "No shows in the month")
    ),
    tag = "shows"
)]
pub async fn get_shows_by_year_month(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, i32)>,
) -> Result<Response, WebError> {
    let shows = services::get_shows_by_year_month(state.db.pool(), year, month).await?;

    let response: Vec<ShowResponse> = shows.into_iter().map(ShowResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/shows/date/{year}/{month}/{day}",
    params(
        ("year" = i32, Path, description = "Four-digit year"),
        ("month" = i32, Path, description = "Month, 1 through 12"),
        ("day" = i32, Path, description = "Day of month, 1 through 31")
    ),
    responses(
        (status = 200, description = "The show that aired on the date", body = ShowResponse),
        (status = 404, description = "No show aired on the date")
    ),
    tag = "shows"
)]
pub async fn get_show_by_date(
    State(state): State<AppState>,
    Path((year, month, day)): Path<(i32, i32, i32)>,
) -> Result<Response, WebError> {
    let show = services::get_show_by_date(state.db.pool(), year, month, day).await?;

    Ok(Json(ShowResponse::from(show)).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/shows/month-day/{month}/{day}",
    params(
        ("month" = i32, Path, description = "Month, 1 through 12"),
        ("day" = i32, Path, description = "Day of month, 1 through 31")
    ),
    responses(
        (status = 200, description = "Shows airing on the calendar day across all years", body = Vec<ShowResponse>),
        (status = 404, description = "No shows aired on the calendar day")
    ),
    tag = "shows"
)]
pub async fn get_shows_by_month_day(
    State(state): State<AppState>,
    Path((month, day)): Path<(i32, i32)>,
) -> Result<Response, WebError> {
    let shows = services::get_shows_by_month_day(state.db.pool(), month, day).await?;

    let response: Vec<ShowResponse> = shows.into_iter().map(ShowResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/shows/random",
    responses(
        (status = 200, description = "Random show", body = ShowResponse),
        (status = 404, description = "No shows recorded")
    ),
    tag = "shows"
)]
pub async fn get_random_show(State(state): State<AppState>) -> Result<Response, WebError> {
    let show = services::get_random_show(state.db.pool()).await?;

    Ok(Json(ShowResponse::from(show)).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/shows/random/{year}",
    params(
        ("year" = i32, Path, description = "Four-digit year")
    ),
    responses(
        (status = 200, description = "Random show within the year", body = ShowResponse),
        (status = 404, description = "No shows in the year")
    ),
    tag = "shows"
)]
pub async fn get_random_show_by_year(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Result<Response, WebError> {
    let show = services::get_random_show_by_year(state.db.pool(), year).await?;

    Ok(Json(ShowResponse::from(show)).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/shows/details",
    responses(
        (status = 200, description = "Details for all shows", body = Vec<ShowDetailResponse>)
    ),
    tag = "shows"
)]
pub async fn list_show_details(State(state): State<AppState>) -> Result<Response, WebError> {
    let details = services::list_show_details(state.db.pool(), state.scoring).await?;

    Ok(Json(details).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/shows/details/id/{id}",
    params(
        ("id" = i32, Path, description = "Show ID")
    ),
    responses(
        (status = 200, description = "Show with all related entities", body = ShowDetailResponse),
        (status = 404, description = "Show not found")
    ),
    tag = "shows"
)]
pub async fn get_show_details_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let detail = services::get_show_details_by_id(state.db.pool(), id, state.scoring).await?;

    Ok(Json(detail).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/shows/details/date/{year}",
    params(
        ("year" = i32, Path, description = "Four-digit year")
    ),
    responses(
        (status = 200, description = "Details for shows within the year", body = Vec<ShowDetailResponse>),
        (status = 404, description = "No shows in the year")
    ),
    tag = "shows"
)]
pub async fn get_show_details_by_year(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Result<Response, WebError> {
    let details = services::get_show_details_by_year(state.db.pool(), year, state.scoring).await?;

    Ok(Json(details).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/shows/details/date/{year}/{month}",
    params(
        ("year" = i32, Path, description = "Four-digit year"),
        ("month" = i32, Path, description = "Month, 1 through 12")
    ),
    responses(
        (status = 200, description = "Details for shows within the month", body = Vec<ShowDetailResponse>),
        (status = 404, description = "No shows in the month")
    ),
    tag = "shows"
)]
pub async fn get_show_details_by_year_month(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, i32)>,
) -> Result<Response, WebError> {
    let details =
        services::get_show_details_by_year_month(state.db.pool(), year, month, state.scoring)
            .await?;

    Ok(Json(details).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/shows/details/date/{year}/{month}/{day}",
    params(
        ("year" = i32, Path, description = "Four-digit year"),
        ("month" = i32, Path, description = "Month, 1 through 12"),
        ("day" = i32, Path, description = "Day of month, 1 through 31")
    ),
    responses(
        (status = 200, description = "Details for the show that aired on the date", body = ShowDetailResponse),
        (status = 404, description = "No show aired on the date")
    ),
    tag = "shows"
)]
pub async fn get_show_details_by_date(
    State(state): State<AppState>,
    Path((year, month, day)): Path<(i32, i32, i32)>,
) -> Result<Response, WebError> {
    let detail =
        services::get_show_details_by_date(state.db.pool(), year, month, day, state.scoring)
            .await?;

    Ok(Json(detail).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/shows/details/month-day/{month}/{day}",
    params(
        ("month" = i32, Path, description = "Month, 1 through 12"),
        ("day" = i32, Path, description = "Day of month, 1 through 31")
    ),
    responses(
        (status = 200, description = "Details for shows airing on the calendar day", body = Vec<ShowDetailResponse>),
        (status = 404, description = "No shows aired on the calendar day")
    ),
    tag = "shows"
)]
pub async fn get_show_details_by_month_day(
    State(state): State<AppState>,
    Path((month, day)): Path<(i32, i32)>,
) -> Result<Response, WebError> {
    let details =
        services::get_show_details_by_month_day(state.db.pool(), month, day, state.scoring)
            .await?;

    Ok(Json(details).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/shows/details/random",
    responses(
        (status = 200, description = "Details for a random show", body = ShowDetailResponse),
        (status = 404, description = "No shows recorded")
    ),
    tag = "shows"
)]
pub async fn get_random_show_details(State(state): State<AppState>) -> Result<Response, WebError> {
    let detail = services::get_random_show_details(state.db.pool(), state.scoring).await?;

    Ok(Json(detail).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/shows/details/random/{year}",
    params(
        ("year" = i32, Path, description = "Four-digit year")
    ),
    responses(
        (status = 200, description = "Details for a random show within the year", body = ShowDetailResponse),
        (status = 404, description = "No shows in the year")
    ),
    tag = "shows"
)]
pub async fn get_random_show_details_by_year(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Result<Response, WebError> {
    let detail =
        services::get_random_show_details_by_year(state.db.pool(), year, state.scoring).await?;

    Ok(Json(detail).into_response())
}
