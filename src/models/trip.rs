use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::trip::Trip as DomainTrip;
use crate::domain::types::{TripId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::trips)]
/// Diesel model for [`crate::domain::trip::Trip`] without its countries.
pub struct Trip {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub date_from: NaiveDateTime,
    pub date_to: NaiveDateTime,
    pub max_people: i32,
}

impl TryFrom<Trip> for DomainTrip {
    type Error = TypeConstraintError;

    fn try_from(trip: Trip) -> Result<Self, Self::Error> {
        Ok(Self {
            id: TripId::new(trip.id)?,
            name: trip.name,
            description: trip.description.unwrap_or_default(),
            date_from: trip.date_from,
            date_to: trip.date_to,
            max_people: trip.max_people,
            countries: Vec::new(),
        })
    }
}
