use axum::{Router, routing::get};

use super::handlers::{
    get_random_scorekeeper, get_random_scorekeeper_details, get_scorekeeper_by_id,
    get_scorekeeper_by_slug, get_scorekeeper_details_by_id, get_scorekeeper_details_by_slug,
    list_scorekeeper_details, list_scorekeepers,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_scorekeepers))
        .route("/id/:id", get(get_scorekeeper_by_id))
        .route("/slug/:slug", get(get_scorekeeper_by_slug))
        .route("/random", get(get_random_scorekeeper))
        .route("/details", get(list_scorekeeper_details))
        .route("/details/id/:id", get(get_scorekeeper_details_by_id))
        .route("/details/slug/:slug", get(get_scorekeeper_details_by_slug))
        .route("/details/random", get(get_random_scorekeeper_details))
}
