use axum::{Router, routing::get};

use super::handlers::{get_abbreviation_details, list_abbreviation_details, list_abbreviations};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_abbreviations))
        .route("/details", get(list_abbreviation_details))
        .route("/details/:abbreviation", get(get_abbreviation_details))
}
