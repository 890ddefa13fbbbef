use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::trip::Trip;

/// Trip as exposed by `GET /api/trips` and `GET /api/clients/{id}/trips`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TripDto {
    pub trip_id: i32,
    pub name: String,
    pub description: String,
    pub date_from: NaiveDateTime,
    pub date_to: NaiveDateTime,
    pub max_people: i32,
    pub countries: Vec<String>,
}

impl From<Trip> for TripDto {
    fn from(trip: Trip) -> Self {
        Self {
            trip_id: trip.id.get(),
            name: trip.name,
            description: trip.description,
            date_from: trip.date_from,
            date_to: trip.date_to,
            max_people: trip.max_people,
            countries: trip.countries,
        }
    }
}
