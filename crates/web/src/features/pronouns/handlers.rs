use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::models::Pronouns;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/v2.0/pronouns",
    responses(
        (status = 200, description = "List all pronouns reference rows", body = Vec<Pronouns>)
    ),
    tag = "pronouns"
)]
pub async fn list_pronouns(State(state): State<AppState>) -> Result<Response, WebError> {
    let rows = services::list_pronouns(state.db.pool()).await?;

    Ok(Json(rows).into_response())
}

#[utoipa::path(
    get,
    path = "/v2.0/pronouns/{id}",
    params(
        ("id" = i32, Path, description = "Pronouns ID")
    ),
    responses(
        (status = 200, description = "Pronouns row found", body = Pronouns),
        (status = 404, description = "Pronouns row not found")
    ),
    tag = "pronouns"
)]
pub async fn get_pronouns_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let row = services::get_pronouns_by_id(state.db.pool(), id).await?;

    Ok(Json(row).into_response())
}
