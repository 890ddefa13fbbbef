//! Persistence access for trips, clients and registrations.
//!
//! Readers and writers are split into narrow traits so services can state
//! exactly which capabilities they need; [`DieselRepository`] implements all
//! of them on top of the SQLite pool.

use crate::{
    db::{DbConnection, DbPool},
    domain::{
        client::NewClient,
        registration::RegistrationAttempt,
        trip::Trip,
        types::{ClientId, TripId},
    },
    repository::errors::RepositoryResult,
};

pub mod client;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod registration;
pub mod trip;

/// Diesel-backed store shared by all request handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Checks a connection out of the pool for the duration of one call.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        self.pool.get().map_err(|e| {
            log::error!("Failed to get connection from pool: {e}");
            e.into()
        })
    }
}

pub trait TripReader {
    /// Every trip that has at least one country, ordered by trip id.
    fn list_trips(&self) -> RepositoryResult<Vec<Trip>>;
    /// Trips the client is registered for, ordered by trip id.
    fn list_client_trips(&self, client_id: ClientId) -> RepositoryResult<Vec<Trip>>;
}

pub trait ClientReader {
    fn client_exists(&self, client_id: ClientId) -> RepositoryResult<bool>;
}

pub trait ClientWriter {
    /// Inserts the client and returns the identifier generated by the database.
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<ClientId>;
}

pub trait RegistrationWriter {
    /// Checks client, trip, duplicate and capacity, then inserts, all inside
    /// one write transaction.
    fn register_client_to_trip(
        &self,
        client_id: ClientId,
        trip_id: TripId,
        registered_at: &str,
    ) -> RepositoryResult<RegistrationAttempt>;
    /// Removes the registration and returns the number of deleted rows.
    fn delete_registration(&self, client_id: ClientId, trip_id: TripId)
    -> RepositoryResult<usize>;
}
