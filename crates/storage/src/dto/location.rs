use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::common::AppearanceCounts;
use crate::models::{Location, LocationRecordingRow};

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct Coordinates {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LocationResponse {
    pub id: i32,
    pub city: Option<String>,
    pub state: Option<String>,
    pub venue: Option<String>,
    pub slug: Option<String>,
    /// Present only when both latitude and longitude are recorded.
    pub coordinates: Option<Coordinates>,
}

impl From<Location> for LocationResponse {
    fn from(location: Location) -> Self {
        let coordinates = match (location.latitude, location.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates {
                latitude,
                longitude,
            }),
            _ => None,
        };

        Self {
            id: location.id,
            city: location.city,
            state: location.state,
            venue: location.venue,
            slug: location.slug,
            coordinates,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct LocationRecording {
    pub show_id: i32,
    pub date: NaiveDate,
    pub best_of: bool,
    pub repeat_show: bool,
}

impl From<LocationRecordingRow> for LocationRecording {
    fn from(row: LocationRecordingRow) -> Self {
        Self {
            show_id: row.show_id,
            date: row.date,
            best_of: row.best_of,
            repeat_show: row.repeat_show,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LocationRecordings {
    pub count: AppearanceCounts,
    pub shows: Vec<LocationRecording>,
}

impl LocationRecordings {
    pub fn from_rows(rows: Vec<LocationRecordingRow>) -> Self {
        let count = AppearanceCounts::tally(rows.iter().map(|r| (r.best_of, r.repeat_show)));
        Self {
            count,
            shows: rows.into_iter().map(LocationRecording::from).collect(),
        }
    }
}

/// Location plus the shows recorded there.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LocationDetailResponse {
    pub id: i32,
    pub city: Option<String>,
    pub state: Option<String>,
    pub venue: Option<String>,
    pub slug: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub recordings: LocationRecordings,
}

impl LocationDetailResponse {
    pub fn compose(location: Location, rows: Vec<LocationRecordingRow>) -> Self {
        let base = LocationResponse::from(location);
        Self {
            id: base.id,
            city: base.city,
            state: base.state,
            venue: base.venue,
            slug: base.slug,
            coordinates: base.coordinates,
            recordings: LocationRecordings::from_rows(rows),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_require_both_halves() {
        let location = Location {
            id: 3,
            city: Some("Chicago".into()),
            state: Some("IL".into()),
            venue: Some("Chase Auditorium".into()),
            slug: Some("chase-auditorium-chicago-il".into()),
            latitude: Some(Decimal::new(418781, 4)),
            longitude: None,
        };

        let response = LocationResponse::from(location);
        assert!(response.coordinates.is_none());
    }
}
