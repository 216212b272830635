use axum::{Router, routing::get};

use super::handlers::{
    get_guest_by_id, get_guest_by_slug, get_guest_details_by_id, get_guest_details_by_slug,
    get_random_guest, get_random_guest_details, list_guest_details, list_guests,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_guests))
        .route("/id/:id", get(get_guest_by_id))
        .route("/slug/:slug", get(get_guest_by_slug))
        .route("/random", get(get_random_guest))
        .route("/details", get(list_guest_details))
        .route("/details/id/:id", get(get_guest_details_by_id))
        .route("/details/slug/:slug", get(get_guest_details_by_slug))
        .route("/details/random", get(get_random_guest_details))
}
