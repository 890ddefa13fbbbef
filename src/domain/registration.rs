use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientId, TripId};

/// Format of the registration mark stored alongside each registration.
pub const REGISTRATION_MARK_FORMAT: &str = "%Y%m%d";

/// Association of a client with a trip.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Registration {
    pub client_id: ClientId,
    pub trip_id: TripId,
    /// UTC date of registration as compact digits, e.g. `20260517`.
    pub registered_at: String,
}

/// Outcome of a registration attempt evaluated atomically by the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistrationAttempt {
    Registered(Registration),
    UnknownClient,
    UnknownTrip,
    AlreadyRegistered,
    TripFull { max_people: i32 },
}

/// Renders the registration mark for the given instant.
pub fn registration_mark(now: DateTime<Utc>) -> String {
    now.format(REGISTRATION_MARK_FORMAT).to_string()
}
