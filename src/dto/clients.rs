use serde::Serialize;

use crate::domain::types::ClientId;

/// Body of the `201 Created` response to `POST /api/clients`.
#[derive(Debug, Serialize)]
pub struct ClientCreatedDto {
    pub id: i32,
}

impl From<ClientId> for ClientCreatedDto {
    fn from(id: ClientId) -> Self {
        Self { id: id.get() }
    }
}
