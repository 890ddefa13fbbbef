//! Business workflows sitting between the HTTP routes and the repository.

pub mod clients;
pub mod errors;
pub mod trips;

pub use errors::{ServiceError, ServiceResult};
