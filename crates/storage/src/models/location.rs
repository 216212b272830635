use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Location {
    pub id: i32,
    pub city: Option<String>,
    pub state: Option<String>,
    pub venue: Option<String>,
    pub slug: Option<String>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
}
