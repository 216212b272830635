use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Host {
    pub id: i32,
    pub name: String,
    pub slug: Option<String>,
    pub gender: Option<String>,
    pub pronouns: Option<String>,
}
