//! DTOs shaping the JSON returned by the trips API.

pub mod clients;
pub mod trips;
