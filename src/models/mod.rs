//! Database models shared across the trips repository.

pub mod client;
pub mod config;
pub mod registration;
pub mod trip;
