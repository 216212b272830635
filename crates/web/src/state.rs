use storage::{Database, scoring::ScoringMode};

/// Shared application state: the pooled database handle and the
/// deployment-wide scoring mode, both fixed at startup.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub scoring: ScoringMode,
}
