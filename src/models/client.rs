use diesel::prelude::*;

use crate::domain::client::NewClient as DomainNewClient;

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clients)]
/// Insertable form of a client row.
pub struct NewClient<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub telephone: Option<&'a str>,
    pub pesel: Option<&'a str>,
}

impl<'a> From<&'a DomainNewClient> for NewClient<'a> {
    fn from(client: &'a DomainNewClient) -> Self {
        Self {
            first_name: client.first_name.as_str(),
            last_name: client.last_name.as_str(),
            email: client.email.as_str(),
            telephone: client.telephone.as_deref(),
            pesel: client.pesel.as_deref(),
        }
    }
}
