//! Repository implementation for client-to-trip registrations.

use diesel::dsl::exists;
use diesel::prelude::*;

use crate::{
    domain::{
        registration::{Registration, RegistrationAttempt},
        types::{ClientId, TripId},
    },
    models::registration::NewRegistration as DbNewRegistration,
    repository::{
        DieselRepository, RegistrationWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl RegistrationWriter for DieselRepository {
    fn register_client_to_trip(
        &self,
        client_id: ClientId,
        trip_id: TripId,
        registered_at: &str,
    ) -> RepositoryResult<RegistrationAttempt> {
        use crate::schema::{client_trip, clients, trips};

        let mut conn = self.conn()?;

        // BEGIN IMMEDIATE takes the write lock before the first read, so the
        // capacity count cannot go stale before the insert.
        conn.immediate_transaction::<RegistrationAttempt, RepositoryError, _>(|conn| {
            let client_found = diesel::select(exists(clients::table.find(client_id.get())))
                .get_result::<bool>(conn)?;
            if !client_found {
                return Ok(RegistrationAttempt::UnknownClient);
            }

            let max_people = trips::table
                .find(trip_id.get())
                .select(trips::max_people)
                .first::<i32>(conn)
                .optional()?;
            let Some(max_people) = max_people else {
                return Ok(RegistrationAttempt::UnknownTrip);
            };

            let already_registered = diesel::select(exists(
                client_trip::table.find((client_id.get(), trip_id.get())),
            ))
            .get_result::<bool>(conn)?;
            if already_registered {
                return Ok(RegistrationAttempt::AlreadyRegistered);
            }

            let participants = client_trip::table
                .filter(client_trip::trip_id.eq(trip_id.get()))
                .count()
                .get_result::<i64>(conn)?;
            if participants >= i64::from(max_people) {
                return Ok(RegistrationAttempt::TripFull { max_people });
            }

            let registration = Registration {
                client_id,
                trip_id,
                registered_at: registered_at.to_string(),
            };
            let db_registration: DbNewRegistration = (&registration).into();
            diesel::insert_into(client_trip::table)
                .values(&db_registration)
                .execute(conn)?;

            Ok(RegistrationAttempt::Registered(registration))
        })
    }

    fn delete_registration(
        &self,
        client_id: ClientId,
        trip_id: TripId,
    ) -> RepositoryResult<usize> {
        use crate::schema::client_trip;

        let mut conn = self.conn()?;
        let deleted =
            diesel::delete(client_trip::table.find((client_id.get(), trip_id.get())))
                .execute(&mut conn)?;

        Ok(deleted)
    }
}
