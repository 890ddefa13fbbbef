//! Repository implementation for clients.

use diesel::dsl::exists;
use diesel::prelude::*;

use crate::{
    domain::{client::NewClient, types::ClientId},
    models::client::NewClient as DbNewClient,
    repository::{ClientReader, ClientWriter, DieselRepository, errors::RepositoryResult},
};

impl ClientReader for DieselRepository {
    fn client_exists(&self, client_id: ClientId) -> RepositoryResult<bool> {
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let found = diesel::select(exists(clients::table.find(client_id.get())))
            .get_result::<bool>(&mut conn)?;

        Ok(found)
    }
}

impl ClientWriter for DieselRepository {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<ClientId> {
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let db_new_client: DbNewClient = new_client.into();

        let id = diesel::insert_into(clients::table)
            .values(&db_new_client)
            .returning(clients::id)
            .get_result::<i32>(&mut conn)?;

        Ok(ClientId::new(id)?)
    }
}
