use serde::Deserialize;

/// Data required to create a client. Optional contact fields are stored as
/// `NULL` when absent.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NewClient {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub telephone: Option<String>,
    pub pesel: Option<String>,
}
