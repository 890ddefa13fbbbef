//! Request bodies accepted by the trips API.

pub mod clients;
