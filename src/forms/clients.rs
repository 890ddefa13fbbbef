use serde::Deserialize;

use crate::domain::client::NewClient;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
/// JSON body of `POST /api/clients`.
pub struct AddClientForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub pesel: Option<String>,
}

impl From<AddClientForm> for NewClient {
    fn from(form: AddClientForm) -> Self {
        Self {
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            telephone: form.telephone,
            pesel: form.pesel,
        }
    }
}
