use diesel::prelude::*;

use crate::domain::registration::Registration as DomainRegistration;

#[derive(Insertable)]
#[diesel(table_name = crate::schema::client_trip)]
/// Insertable form of a client-to-trip registration.
pub struct NewRegistration<'a> {
    pub client_id: i32,
    pub trip_id: i32,
    pub registered_at: &'a str,
}

impl<'a> From<&'a DomainRegistration> for NewRegistration<'a> {
    fn from(registration: &'a DomainRegistration) -> Self {
        Self {
            client_id: registration.client_id.get(),
            trip_id: registration.trip_id.get(),
            registered_at: registration.registered_at.as_str(),
        }
    }
}
