use axum::{Router, routing::get};

use super::handlers::{get_pronouns_by_id, list_pronouns};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_pronouns))
        .route("/:id", get(get_pronouns_by_id))
}
