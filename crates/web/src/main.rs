use anyhow::Context;
use axum::Router;
use storage::{Database, scoring::ScoringMode};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod state;

use config::Config;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::guests::handlers::list_guests,
        features::guests::handlers::get_guest_by_id,
        features::guests::handlers::get_guest_by_slug,
        features::guests::handlers::get_random_guest,
        features::guests::handlers::list_guest_details,
        features::guests::handlers::get_guest_details_by_id,
        features::guests::handlers::get_guest_details_by_slug,
        features::guests::handlers::get_random_guest_details,
        features::hosts::handlers::list_hosts,
        features::hosts::handlers::get_host_by_id,
        features::hosts::handlers::get_host_by_slug,
        features::hosts::handlers::get_random_host,
        features::hosts::handlers::list_host_details,
        features::hosts::handlers::get_host_details_by_id,
        features::hosts::handlers::get_host_details_by_slug,
        features::hosts::handlers::get_random_host_details,
        features::locations::handlers::list_locations,
        features::locations::handlers::get_location_by_id,
        features::locations::handlers::get_location_by_slug,
        features::locations::handlers::get_random_location,
        features::locations::handlers::list_location_details,
        features::locations::handlers::get_location_details_by_id,
        features::locations::handlers::get_location_details_by_slug,
        features::locations::handlers::get_random_location_details,
        features::panelists::handlers::list_panelists,
        features::panelists::handlers::get_panelist_by_id,
        features::panelists::handlers::get_panelist_by_slug,
        features::panelists::handlers::get_random_panelist,
        features::panelists::handlers::list_panelist_details,
        features::panelists::handlers::get_panelist_details_by_id,
        features::panelists::handlers::get_panelist_details_by_slug,
        features::panelists::handlers::get_random_panelist_details,
        features::panelists::handlers::get_panelist_scores_by_id,
        features::panelists::handlers::get_panelist_scores_by_slug,
        features::scorekeepers::handlers::list_scorekeepers,
        features::scorekeepers::handlers::get_scorekeeper_by_id,
        features::scorekeepers::handlers::get_scorekeeper_by_slug,
        features::scorekeepers::handlers::get_random_scorekeeper,
        features::scorekeepers::handlers::list_scorekeeper_details,
        features::scorekeepers::handlers::get_scorekeeper_details_by_id,
        features::scorekeepers::handlers::get_scorekeeper_details_by_slug,
        features::scorekeepers::handlers::get_random_scorekeeper_details,
        features::shows::handlers::list_shows,
        features::shows::handlers::list_show_dates,
        features::shows::handlers::get_show_by_id,
        features::shows::handlers::get_shows_by_year,
        features::shows::handlers::get_shows_by_year_month,
        features::shows::handlers::get_show_by_date,
        features::shows::handlers::get_shows_by_month_day,
        features::shows::handlers::get_random_show,
        features::shows::handlers::get_random_show_by_year,
        features::shows::handlers::list_show_details,
        features::shows::handlers::get_show_details_by_id,
        features::shows::handlers::get_show_details_by_year,
        features::shows::handlers::get_show_details_by_year_month,
        features::shows::handlers::get_show_details_by_date,
        features::shows::handlers::get_show_details_by_month_day,
        features::shows::handlers::get_random_show_details,
        features::shows::handlers::get_random_show_details_by_year,
        features::pronouns::handlers::list_pronouns,
        features::pronouns::handlers::get_pronouns_by_id,
        features::postal_abbreviations::handlers::list_abbreviations,
        features::postal_abbreviations::handlers::list_abbreviation_details,
        features::postal_abbreviations::handlers::get_abbreviation_details,
    ),
    components(
        schemas(
            storage::dto::common::AppearanceCounts,
            storage::dto::common::ScoreValue,
            storage::dto::common::ShowStamp,
            storage::dto::guest::GuestResponse,
            storage::dto::guest::GuestAppearance,
            storage::dto::guest::GuestAppearances,
            storage::dto::guest::GuestDetailResponse,
            storage::dto::host::HostResponse,
            storage::dto::host::HostAppearance,
            storage::dto::host::HostAppearances,
            storage::dto::host::HostDetailResponse,
            storage::dto::location::Coordinates,
            storage::dto::location::LocationResponse,
            storage::dto::location::LocationRecording,
            storage::dto::location::LocationRecordings,
            storage::dto::location::LocationDetailResponse,
            storage::dto::panelist::PanelistResponse,
            storage::dto::panelist::PanelistAppearance,
            storage::dto::panelist::AppearanceMilestones,
            storage::dto::panelist::PanelistAppearances,
            storage::dto::panelist::ScoringStats,
            storage::dto::panelist::RankCounts,
            storage::dto::panelist::RankPercentages,
            storage::dto::panelist::RankStats,
            storage::dto::panelist::BluffCounts,
            storage::dto::panelist::PanelistDetailResponse,
            storage::dto::panelist::PanelistScoreEntry,
            storage::dto::panelist::PanelistScoresResponse,
            storage::dto::scorekeeper::ScorekeeperResponse,
            storage::dto::scorekeeper::ScorekeeperAppearance,
            storage::dto::scorekeeper::ScorekeeperAppearances,
            storage::dto::scorekeeper::ScorekeeperDetailResponse,
            storage::dto::show::ShowResponse,
            storage::dto::show::ShowHost,
            storage::dto::show::ShowScorekeeper,
            storage::dto::show::ShowPanelist,
            storage::dto::show::BluffPanelist,
            storage::dto::show::BluffSegment,
            storage::dto::show::ShowGuest,
            storage::dto::show::ShowDetailResponse,
            storage::models::Pronouns,
            storage::models::PostalAbbreviation,
        )
    ),
    tags(
        (name = "guests", description = "Not My Job guest endpoints"),
        (name = "hosts", description = "Host endpoints"),
        (name = "locations", description = "Recording location endpoints"),
        (name = "panelists", description = "Panelist endpoints"),
        (name = "scorekeepers", description = "Scorekeeper endpoints"),
        (name = "shows", description = "Show endpoints"),
        (name = "pronouns", description = "Pronouns reference endpoints"),
        (name = "postal-abbreviations", description = "Postal abbreviation reference endpoints"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting stats API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::connect(&config.database_url, config.max_connections)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    let scoring = ScoringMode::from_flag(config.use_decimal_scores);
    tracing::info!("Scoring mode: {:?}", scoring);

    let state = AppState { db, scoring };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/v2.0/guests", features::guests::routes::routes())
        .nest("/v2.0/hosts", features::hosts::routes::routes())
        .nest("/v2.0/locations", features::locations::routes::routes())
        .nest("/v2.0/panelists", features::panelists::routes::routes())
        .nest(
            "/v2.0/scorekeepers",
            features::scorekeepers::routes::routes(),
        )
        .nest("/v2.0/shows", features::shows::routes::routes())
        .nest("/v2.0/pronouns", features::pronouns::routes::routes())
        .nest(
            "/v2.0/postal-abbreviations",
            features::postal_abbreviations::routes::routes(),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(state);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    axum::serve(listener, app)
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}
