//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::client::NewClient;
use crate::domain::registration::RegistrationAttempt;
use crate::domain::trip::Trip;
use crate::domain::types::{ClientId, TripId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientReader, ClientWriter, RegistrationWriter, TripReader};

mock! {
    pub Repository {}

    impl TripReader for Repository {
        fn list_trips(&self) -> RepositoryResult<Vec<Trip>>;
        fn list_client_trips(&self, client_id: ClientId) -> RepositoryResult<Vec<Trip>>;
    }

    impl ClientReader for Repository {
        fn client_exists(&self, client_id: ClientId) -> RepositoryResult<bool>;
    }

    impl ClientWriter for Repository {
        fn create_client(&self, new_client: &NewClient) -> RepositoryResult<ClientId>;
    }

    impl RegistrationWriter for Repository {
        fn register_client_to_trip(
            &self,
            client_id: ClientId,
            trip_id: TripId,
            registered_at: &str,
        ) -> RepositoryResult<RegistrationAttempt>;
        fn delete_registration(
            &self,
            client_id: ClientId,
            trip_id: TripId,
        ) -> RepositoryResult<usize>;
    }
}
