//! Domain values exposed by the trips service layer.

pub mod client;
pub mod registration;
pub mod trip;
pub mod types;
