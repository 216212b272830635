use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::dto::guest::{GuestDetailResponse, GuestResponse};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/v2.0/guests",
    responses(
        (status = 200, description = "List all guests", body = Vec<GuestResponse>)
    ),
    tag = "guests"
)]
pub async fn list_guests(State(state): State<AppState>) -> Result<Response, WebError> {
    let guests = services::list_guests(state.db.pool()).await?;

    let response: Vec<GuestResponse> = guests.into_iter().map(GuestResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/guests/id/{id}",
    params(
        ("id" = i32, Path, description = "Guest ID")
    ),
    responses(
        (status = 200, description = "Guest found", body = GuestResponse),
        (status = 404, description = "Guest not found")
    ),
    tag = "guests"
)]
pub async fn get_guest_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let guest = services::get_guest_by_id(state.db.pool(), id).await?;

    Ok(Json(GuestResponse::from(guest)).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/guests/slug/{slug}",
    params(
        ("slug" = String, Path, description = "Guest slug")
    ),
    responses(
        (status = 200, description = "Guest found", body = GuestResponse),
        (status = 404, description = "Guest not found")
    ),
    tag = "guests"
)]
pub async fn get_guest_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let guest = services::get_guest_by_slug(state.db.pool(), &slug).await?;

    Ok(Json(GuestResponse::from(guest)).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/guests/random",
    responses(
        (status = 200, description = "Random guest", body = GuestResponse),
        (status = 404, description = "No guests recorded")
    ),
    tag = "guests"
)]
pub async fn get_random_guest(State(state): State<AppState>) -> Result<Response, WebError> {
    let guest = services::get_random_guest(state.db.pool()).await?;

    Ok(Json(GuestResponse::from(guest)).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/guests/details",
    responses(
        (status = 200, description = "Details for all guests", body = Vec<GuestDetailResponse>)
    ),
    tag = "guests"
)]
pub async fn list_guest_details(State(state): State<AppState>) -> Result<Response, WebError> {
    let details = services::list_guest_details(state.db.pool(), state.scoring).await?;

    Ok(Json(details).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/guests/details/id/{id}",
    params(
        ("id" = i32, Path, description = "Guest ID")
    ),
    responses(
        (status = 200, description = "Guest with appearance history", body = GuestDetailResponse),
        (status = 404, description = "Guest not found")
    ),
    tag = "guests"
)]
pub async fn get_guest_details_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let detail = services::get_guest_details_by_id(state.db.pool(), id, state.scoring).await?;

    Ok(Json(detail).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/guests/details/slug/{slug}",
    params(
        ("slug" = String, Path, description = "Guest slug")
    ),
    responses(
        (status = 200, description = "Guest with appearance history", body = GuestDetailResponse),
        (status = 404, description = "Guest not found")
    ),
    tag = "guests"
)]
pub async fn get_guest_details_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let detail = services::get_guest_details_by_slug(state.db.pool(), &slug, state.scoring).await?;

    Ok(Json(detail).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/guests/details/random",
    responses(
        (status = 200, description = "Details for a random guest", body = GuestDetailResponse),
        (status = 404, description = "No guests recorded")
    ),
    tag = "guests"
)]
pub async fn get_random_guest_details(State(state): State<AppState>) -> Result<Response, WebError> {
    let detail = services::get_random_guest_details(state.db.pool(), state.scoring).await?;

    Ok(Json(detail).into_response())
}
