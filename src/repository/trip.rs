//! Repository implementation for trips.

use diesel::prelude::*;

use crate::{
    domain::{
        trip::{Trip, group_trip_rows},
        types::ClientId,
    },
    models::trip::Trip as DbTrip,
    repository::{
        DieselRepository, TripReader,
        errors::{RepositoryError, RepositoryResult},
    },
};

/// Converts joined rows into domain trips. The rows must arrive ordered by
/// trip id, which both queries below guarantee with `ORDER BY`.
fn collect_trips(rows: Vec<(DbTrip, String)>) -> RepositoryResult<Vec<Trip>> {
    let rows = rows
        .into_iter()
        .map(|(trip, country)| {
            Trip::try_from(trip)
                .map(|trip| (trip, country))
                .map_err(RepositoryError::from)
        })
        .collect::<RepositoryResult<Vec<_>>>()?;

    Ok(group_trip_rows(rows))
}

impl TripReader for DieselRepository {
    fn list_trips(&self) -> RepositoryResult<Vec<Trip>> {
        use crate::schema::{countries, country_trip, trips};

        let mut conn = self.conn()?;
        let rows = trips::table
            .inner_join(country_trip::table.inner_join(countries::table))
            .order(trips::id.asc())
            .select((trips::all_columns, countries::name))
            .load::<(DbTrip, String)>(&mut conn)?;

        collect_trips(rows)
    }

    fn list_client_trips(&self, client_id: ClientId) -> RepositoryResult<Vec<Trip>> {
        use crate::schema::{client_trip, countries, country_trip, trips};

        let mut conn = self.conn()?;
        let rows = client_trip::table
            .inner_join(trips::table.inner_join(country_trip::table.inner_join(countries::table)))
            .filter(client_trip::client_id.eq(client_id.get()))
            .order(trips::id.asc())
            .select((trips::all_columns, countries::name))
            .load::<(DbTrip, String)>(&mut conn)?;

        collect_trips(rows)
    }
}
