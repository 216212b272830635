use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::dto::location::{LocationDetailResponse, LocationResponse};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/v2.0/locations",
    responses(
        (status = 200, description = "List all locations", body = Vec<LocationResponse>)
    ),
    tag = "locations"
)]
pub async fn list_locations(State(state): State<AppState>) -> Result<Response, WebError> {
    let locations = services::list_locations(state.db.pool()).await?;

    let response: Vec<LocationResponse> =
        locations.into_iter().map(LocationResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/locations/id/{id}",
    params(
        ("id" = i32, Path, description = "Location ID")
    ),
    responses(
        (status = 200, description = "Location found", body = LocationResponse),
        (status = 404, description = "Location not found")
    ),
    tag = "locations"
)]
pub async fn get_location_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let location = services::get_location_by_id(state.db.pool(), id).await?;

    Ok(Json(LocationResponse::from(location)).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/locations/slug/{slug}",
    params(
        ("slug" = String, Path, description = "Location slug")
    ),
    responses(
        (status = 200, description = "Location found", body = LocationResponse),
        (status = 404, description = "Location not found")
    ),
    tag = "locations"
)]
pub async fn get_location_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let location = services::get_location_by_slug(state.db.pool(), &slug).await?;

    Ok(Json(LocationResponse::from(location)).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/locations/random",
    responses(
        (status = 200, description = "Random location", body = LocationResponse),
        (status = 404, description = "No locations recorded")
    ),
    tag = "locations"
)]
pub async fn get_random_location(State(state): State<AppState>) -> Result<Response, WebError> {
    let location = services::get_random_location(state.db.pool()).await?;

    Ok(Json(LocationResponse::from(location)).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/locations/details",
    responses(
        (status = 200, description = "Details for all locations", body = Vec<LocationDetailResponse>)
    ),
    tag = "locations"
)]
pub async fn list_location_details(State(state): State<AppState>) -> Result<Response, WebError> {
    let details = services::list_location_details(state.db.pool()).await?;

    Ok(Json(details).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/locations/details/id/{id}",
    params(
        ("id" = i32, Path, description = "Location ID")
    ),
    responses(
        (status = 200, description = "Location with recording history", body = LocationDetailResponse),
        (status = 404, description = "Location not found")
    ),
    tag = "locations"
)]
pub async fn get_location_details_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let detail = services::get_location_details_by_id(state.db.pool(), id).await?;

    Ok(Json(detail).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/locations/details/slug/{slug}",
    params(
        ("slug" = String, Path, description = "Location slug")
    ),
    responses(
        (status = 200, description = "Location with recording history", body = LocationDetailResponse),
        (status = 404, description = "Location not found")
    ),
    tag = "locations"
)]
pub async fn get_location_details_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let detail = services::get_location_details_by_slug(state.db.pool(), &slug).await?;

    Ok(Json(detail).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/locations/details/random",
    responses(
        (status = 200, description = "Details for a random location", body = LocationDetailResponse),
        (status = 404, description = "No locations recorded")
    ),
    tag = "locations"
)]
pub async fn get_random_location_details(
    State(state): State<AppState>,
) -> Result<Response, WebError> {
    let detail = services::get_random_location_details(state.db.pool()).await?;

    Ok(Json(detail).into_response())
}
