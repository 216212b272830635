use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::models::PostalAbbreviation;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/v2.0/postal-abbreviations",
    responses(
        (status = 200, description = "All postal abbreviation strings", body = Vec<String>)
    ),
    tag = "postal-abbreviations"
)]
pub async fn list_abbreviations(State(state): State<AppState>) -> Result<Response, WebError> {
    let abbreviations = services::list_abbreviations(state.db.pool()).await?;

    Ok(Json(abbreviations).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/postal-abbreviations/details",
    responses(
        (status = 200, description = "All abbreviations with names and countries", body = Vec<PostalAbbreviation>)
    ),
    tag = "postal-abbreviations"
)]
pub async fn list_abbreviation_details(
    State(state): State<AppState>,
) -> Result<Response, WebError> {
    let rows = services::list_abbreviation_details(state.db.pool()).await?;

    Ok(Json(rows).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/postal-abbreviations/details/{abbreviation}",
    params(
        ("abbreviation" = String, Path, description = "Postal abbreviation")
    ),
    responses(
        (status = 200, description = "Abbreviation found", body = PostalAbbreviation),
        (status = 404, description = "Abbreviation not found")
    ),
    tag = "postal-abbreviations"
)]
pub async fn get_abbreviation_details(
    State(state): State<AppState>,
    Path(abbreviation): Path<String>,
) -> Result<Response, WebError> {
    let row = services::get_abbreviation_details(state.db.pool(), &abbreviation).await?;

    Ok(Json(row).into_response())
}
