use axum::{Router, routing::get};

use super::handlers::{
    get_panelist_by_id, get_panelist_by_slug, get_panelist_details_by_id,
    get_panelist_details_by_slug, get_panelist_scores_by_id, get_panelist_scores_by_slug,
    get_random_panelist, get_random_panelist_details, list_panelist_details, list_panelists,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_panelists))
        .route("/id/:id", get(get_panelist_by_id))
        .route("/slug/:slug", get(get_panelist_by_slug))
        .route("/random", get(get_random_panelist))
        .route("/details", get(list_panelist_details))
        .route("/details/id/:id", get(get_panelist_details_by_id))
        .route("/details/slug/:slug", get(get_panelist_details_by_slug))
        .route("/details/random", get(get_random_panelist_details))
        .route("/scores/id/:id", get(get_panelist_scores_by_id))
        .route("/scores/slug/:slug", get(get_panelist_scores_by_slug))
}
