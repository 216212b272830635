use axum::{Router, routing::get};

use super::handlers::{
    get_location_by_id, get_location_by_slug, get_location_details_by_id,
    get_location_details_by_slug, get_random_location, get_random_location_details,
    list_location_details, list_locations,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_locations))
        .route("/id/:id", get(get_location_by_id))
        .route("/slug/:slug", get(get_location_by_slug))
        .route("/random", get(get_random_location))
        .route("/details", get(list_location_details))
        .route("/details/id/:id", get(get_location_details_by_id))
        .route("/details/slug/:slug", get(get_location_details_by_slug))
        .route("/details/random", get(get_random_location_details))
}
