use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Reference row mapping a postal abbreviation to its name and country.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PostalAbbreviation {
    pub abbreviation: String,
    pub name: String,
    pub country: String,
}
