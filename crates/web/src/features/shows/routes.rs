use axum::{Router, routing::get};

use super::handlers::{
    get_random_show, get_random_show_by_year, get_random_show_details,
    get_random_show_details_by_year, get_show_by_date, get_show_by_id, get_show_details_by_date,
    get_show_details_by_id, get_show_details_by_month_day, get_show_details_by_year,
    get_show_details_by_year_month, get_shows_by_month_day, get_shows_by_year,
    get_shows_by_year_month, list_show_dates, list_show_details, list_shows,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_shows))
        .route("/dates", get(list_show_dates))
        .route("/id/:id", get(get_show_by_id))
        .route("/date/:year", get(get_shows_by_year))
        .route("/date/:year/:month", get(get_shows_by_year_month))
        .route("/date/:year/:month/:day", get(get_show_by_date))
        .route("/month-day/:month/:day", get(get_shows_by_month_day))
        .route("/random", get(get_random_show))
        .route("/random/:year", get(get_random_show_by_year))
        .route("/details", get(list_show_details))
        .route("/details/id/:id", get(get_show_details_by_id))
        .route("/details/date/:year", get(get_show_details_by_year))
        .route(
            "/details/date/:year/:month",
            get(get_show_details_by_year_month),
        )
        .route(
            "/details/date/:year/:month/:day",
            get(get_show_details_by_date),
        )
        .route(
            "/details/month-day/:month/:day",
            get(get_show_details_by_month_day),
        )
        .route("/details/random", get(get_random_show_details))
        .route("/details/random/:year", get(get_random_show_details_by_year))
}
