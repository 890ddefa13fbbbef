use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::TripId;

/// A travel offering together with the names of the countries it visits.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trip {
    pub id: TripId,
    pub name: String,
    /// Empty when the stored description is `NULL`.
    pub description: String,
    pub date_from: NaiveDateTime,
    pub date_to: NaiveDateTime,
    pub max_people: i32,
    /// Country names in the order the joined rows were read.
    pub countries: Vec<String>,
}

/// Folds joined `(trip, country)` rows into one [`Trip`] per trip id.
///
/// Rows must already be ordered by trip id: a new trip starts whenever the id
/// differs from the previous row, so an unordered input yields the same trip
/// more than once.
pub fn group_trip_rows<I>(rows: I) -> Vec<Trip>
where
    I: IntoIterator<Item = (Trip, String)>,
{
    let mut trips: Vec<Trip> = Vec::new();

    for (trip, country) in rows {
        match trips.last_mut() {
            Some(current) if current.id == trip.id => current.countries.push(country),
            _ => {
                let mut trip = trip;
                trip.countries.push(country);
                trips.push(trip);
            }
        }
    }

    trips
}
