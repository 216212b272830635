use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Guest {
    pub id: i32,
    pub name: String,
    /// Legacy rows may predate slug assignment.
    pub slug: Option<String>,
}
