//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings required to start the HTTP server.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Connection string of the SQLite database.
    pub database_url: String,
}
