use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::dto::scorekeeper::{ScorekeeperDetailResponse, ScorekeeperResponse};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/v2.0/scorekeepers",
    responses(
        (status = 200, description = "List all scorekeepers", body = Vec<ScorekeeperResponse>)
    ),
    tag = "scorekeepers"
)]
pub async fn list_scorekeepers(State(state): State<AppState>) -> Result<Response, WebError> {
    let scorekeepers = services::list_scorekeepers(state.db.pool()).await?;

    let response: Vec<ScorekeeperResponse> = scorekeepers
        .into_iter()
        .map(ScorekeeperResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/scorekeepers/id/{id}",
    params(
        ("id" = i32, Path, description = "Scorekeeper ID")
    ),
    responses(
        (status = 200, description = "Scorekeeper found", body = ScorekeeperResponse),
        (status = 404, description = "Scorekeeper not found")
    ),
    tag = "scorekeepers"
)]
pub async fn get_scorekeeper_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let scorekeeper = services::get_scorekeeper_by_id(state.db.pool(), id).await?;

    Ok(Json(ScorekeeperResponse::from(scorekeeper)).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/scorekeepers/slug/{slug}",
    params(
        ("slug" = String, Path, description = "Scorekeeper slug")
    ),
    responses(
        (status = 200, description = "Scorekeeper found", body = ScorekeeperResponse),
        (status = 404, description = "Scorekeeper not found")
    ),
    tag = "scorekeepers"
)]
pub async fn get_scorekeeper_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let scorekeeper = services::get_scorekeeper_by_slug(state.db.pool(), &slug).await?;

    Ok(Json(ScorekeeperResponse::from(scorekeeper)).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/scorekeepers/random",
    responses(
        (status = 200, description = "Random scorekeeper", body = ScorekeeperResponse),
        (status = 404, description = "No scorekeepers recorded")
    ),
    tag = "scorekeepers"
)]
pub async fn get_random_scorekeeper(State(state): State<AppState>) -> Result<Response, WebError> {
    let scorekeeper = services::get_random_scorekeeper(state.db.pool()).await?;

    Ok(Json(ScorekeeperResponse::from(scorekeeper)).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/scorekeepers/details",
    responses(
        (status = 200, description = "Details for all scorekeepers", body = Vec<ScorekeeperDetailResponse>)
    ),
    tag = "scorekeepers"
)]
pub async fn list_scorekeeper_details(State(state): State<AppState>) -> Result<Response, WebError> {
    let details = services::list_scorekeeper_details(state.db.pool()).await?;

    Ok(Json(details).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/scorekeepers/details/id/{id}",
    params(
        ("id" = i32, Path, description = "Scorekeeper ID")
    ),
    responses(
        (status = 200, description = "Scorekeeper with appearance history", body = ScorekeeperDetailResponse),
        (status = 404, description = "Scorekeeper not found")
    ),
    tag = "scorekeepers"
)]
pub async fn get_scorekeeper_details_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let detail = services::get_scorekeeper_details_by_id(state.db.pool(), id).await?;

    Ok(Json(detail).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/scorekeepers/details/slug/{slug}",
    params(
        ("slug" = String, Path, description = "Scorekeeper slug")
    ),
    responses(
        (status = 200, description = "Scorekeeper with appearance history", body = ScorekeeperDetailResponse),
        (status = 404, description = "Scorekeeper not found")
    ),
    tag = "scorekeepers"
)]
pub async fn get_scorekeeper_details_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let detail = services::get_scorekeeper_details_by_slug(state.db.pool(), &slug).await?;

    Ok(Json(detail).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/scorekeepers/details/random",
    responses(
        (status = 200, description = "Details for a random scorekeeper", body = ScorekeeperDetailResponse),
        (status = 404, description = "No scorekeepers recorded")
    ),
    tag = "scorekeepers"
)]
pub async fn get_random_scorekeeper_details(
    State(state): State<AppState>,
) -> Result<Response, WebError> {
    let detail = services::get_random_scorekeeper_details(state.db.pool()).await?;

    Ok(Json(detail).into_response())
}
