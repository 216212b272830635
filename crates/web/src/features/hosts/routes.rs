use axum::{Router, routing::get};

use super::handlers::{
    get_host_by_id, get_host_by_slug, get_host_details_by_id, get_host_details_by_slug,
    get_random_host, get_random_host_details, list_host_details, list_hosts,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_hosts))
        .route("/id/:id", get(get_host_by_id))
        .route("/slug/:slug", get(get_host_by_slug))
        .route("/random", get(get_random_host))
        .route("/details", get(list_host_details))
        .route("/details/id/:id", get(get_host_details_by_id))
        .route("/details/slug/:slug", get(get_host_details_by_slug))
        .route("/details/random", get(get_random_host_details))
}
