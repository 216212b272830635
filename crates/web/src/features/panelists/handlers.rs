use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::dto::panelist::{PanelistDetailResponse, PanelistResponse, PanelistScoresResponse};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/v2.0/panelists",
    responses(
        (status = 200, description = "List all panelists", body = Vec<PanelistResponse>)
    ),
    tag = "panelists"
)]
pub async fn list_panelists(State(state): State<AppState>) -> Result<Response, WebError> {
    let panelists = services::list_panelists(state.db.pool()).await?;

    let response: Vec<PanelistResponse> =
        panelists.into_iter().map(PanelistResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/panelists/id/{id}",
    params(
        ("id" = i32, Path, description = "Panelist ID")
    ),
    responses(
        (status = 200, description = "Panelist found", body = PanelistResponse),
        (status = 404, description = "Panelist not found")
    ),
    tag = "panelists"
)]
pub async fn get_panelist_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let panelist = services::get_panelist_by_id(state.db.pool(), id).await?;

    Ok(Json(PanelistResponse::from(panelist)).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/panelists/slug/{slug}",
    params(
        ("slug" = String, Path, description = "Panelist slug")
    ),
    responses(
        (status = 200, description = "Panelist found", body = PanelistResponse),
        (status = 404, description = "Panelist not found")
    ),
    tag = "panelists"
)]
pub async fn get_panelist_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let panelist = services::get_panelist_by_slug(state.db.pool(), &slug).await?;

    Ok(Json(PanelistResponse::from(panelist)).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/panelists/random",
    responses(
        (status = 200, description = "Random panelist", body = PanelistResponse),
        (status = 404, description = "No panelists recorded")
    ),
    tag = "panelists"
)]
pub async fn get_random_panelist(State(state): State<AppState>) -> Result<Response, WebError> {
    let panelist = services::get_random_panelist(state.db.pool()).await?;

    Ok(Json(PanelistResponse::from(panelist)).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/panelists/details",
    responses(
        (status = 200, description = "Details for all panelists", body = Vec<PanelistDetailResponse>)
    ),
    tag = "panelists"
)]
pub async fn list_panelist_details(State(state): State<AppState>) -> Result<Response, WebError> {
    let details = services::list_panelist_details(state.db.pool(), state.scoring).await?;

    Ok(Json(details).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/panelists/details/id/{id}",
    params(
        ("id" = i32, Path, description = "Panelist ID")
    ),
    responses(
        (status = 200, description = "Panelist with statistics and appearance history", body = PanelistDetailResponse),
        (status = 404, description = "Panelist not found")
    ),
    tag = "panelists"
)]
pub async fn get_panelist_details_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let detail = services::get_panelist_details_by_id(state.db.pool(), id, state.scoring).await?;

    Ok(Json(detail).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/panelists/details/slug/{slug}",
    params(
        ("slug" = String, Path, description = "Panelist slug")
    ),
    responses(
        (status = 200, description = "Panelist with statistics and appearance history", body = PanelistDetailResponse),
        (status = 404, description = "Panelist not found")
    ),
    tag = "panelists"
)]
pub async fn get_panelist_details_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let detail =
        services::get_panelist_details_by_slug(state.db.pool(), &slug, state.scoring).await?;

    Ok(Json(detail).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/panelists/details/random",
    responses(
        (status = 200, description = "Details for a random panelist", body = PanelistDetailResponse),
        (status = 404, description = "No panelists recorded")
    ),
    tag = "panelists"
)]
pub async fn get_random_panelist_details(
    State(state): State<AppState>,
) -> Result<Response, WebError> {
    let detail = services::get_random_panelist_details(state.db.pool(), state.scoring).await?;

    Ok(Json(detail).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/panelists/scores/id/{id}",
    params(
        ("id" = i32, Path, description = "Panelist ID")
    ),
    responses(
        (status = 200, description = "Scored appearances in air-date order", body = PanelistScoresResponse),
        (status = 404, description = "Panelist not found")
    ),
    tag = "panelists"
)]
pub async fn get_panelist_scores_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let scores = services::get_panelist_scores_by_id(state.db.pool(), id, state.scoring).await?;

    Ok(Json(scores).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/panelists/scores/slug/{slug}",
    params(
        ("slug" = String, Path, description = "Panelist slug")
    ),
    responses(
        (status = 200, description = "Scored appearances in air-date order", body = PanelistScoresResponse),
        (status = 404, description = "Panelist not found")
    ),
    tag = "panelists"
)]
pub async fn get_panelist_scores_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let scores =
        services::get_panelist_scores_by_slug(state.db.pool(), &slug, state.scoring).await?;

    Ok(Json(scores).into_response())
}
