use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::dto::host::{HostDetailResponse, HostResponse};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/v2.0/hosts",
    responses(
        (status = 200, description = "List all hosts", body = Vec<HostResponse>)
    ),
    tag = "hosts"
)]
pub async fn list_hosts(State(state): State<AppState>) -> Result<Response, WebError> {
    let hosts = services::list_hosts(state.db.pool()).await?;

    let response: Vec<HostResponse> = hosts.into_iter().map(HostResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/hosts/id/{id}",
    params(
        ("id" = i32, Path, description = "Host ID")
    ),
    responses(
        (status = 200, description = "Host found", body = HostResponse),
        (status = 404, description = "Host not found")
    ),
    tag = "hosts"
)]
pub async fn get_host_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let host = services::get_host_by_id(state.db.pool(), id).await?;

    Ok(Json(HostResponse::from(host)).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/hosts/slug/{slug}",
    params(
        ("slug" = String, Path, description = "Host slug")
    ),
    responses(
        (status = 200, description = "Host found", body = HostResponse),
        (status = 404, description = "Host not found")
    ),
    tag = "hosts"
)]
pub async fn get_host_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let host = services::get_host_by_slug(state.db.pool(), &slug).await?;

    Ok(Json(HostResponse::from(host)).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/hosts/random",
    responses(
        (status = 200, description = "Random host", body = HostResponse),
        (status = 404, description = "No hosts recorded")
    ),
    tag = "hosts"
)]
pub async fn get_random_host(State(state): State<AppState>) -> Result<Response, WebError> {
    let host = services::get_random_host(state.db.pool()).await?;

    Ok(Json(HostResponse::from(host)).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/hosts/details",
    responses(
        (status = 200, description = "Details for all hosts", body = Vec<HostDetailResponse>)
    ),
    tag = "hosts"
)]
pub async fn list_host_details(State(state): State<AppState>) -> Result<Response, WebError> {
    let details = services::list_host_details(state.db.pool()).await?;

    Ok(Json(details).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/hosts/details/id/{id}",
    params(
        ("id" = i32, Path, description = "Host ID")
    ),
    responses(
        (status = 200, description = "Host with appearance history", body = HostDetailResponse),
        (status = 404, description = "Host not found")
    ),
    tag = "hosts"
)]
pub async fn get_host_details_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let detail = services::get_host_details_by_id(state.db.pool(), id).await?;

    Ok(Json(detail).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/hosts/details/slug/{slug}",
    params(
        ("slug" = String, Path, description = "Host slug")
    ),
    responses(
        (status = 200, description = "Host with appearance history", body = HostDetailResponse),
        (status = 404, description = "Host not found")
    ),
    tag = "hosts"
)]
pub async fn get_host_details_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let detail = services::get_host_details_by_slug(state.db.pool(), &slug).await?;

    Ok(Json(detail).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/hosts/details/random",
    responses(
        (status = 200, description = "Details for a random host", body = HostDetailResponse),
        (status = 404, description = "No hosts recorded")
    ),
    tag = "hosts"
)]
pub async fn get_random_host_details(State(state): State<AppState>) -> Result<Response, WebError> {
    let detail = services::get_random_host_details(state.db.pool()).await?;

    Ok(Json(detail).into_response())
}
