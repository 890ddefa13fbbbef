//! Services handling clients and their trip registrations.

use chrono::Utc;

use crate::domain::client::NewClient;
use crate::domain::registration::{Registration, RegistrationAttempt, registration_mark};
use crate::domain::trip::Trip;
use crate::domain::types::{ClientId, TripId};
use crate::forms::clients::AddClientForm;
use crate::repository::{ClientReader, ClientWriter, RegistrationWriter, TripReader};
use crate::services::{ServiceError, ServiceResult};

fn client_not_found(client_id: i32) -> ServiceError {
    ServiceError::NotFound(format!("Client {client_id} does not exist."))
}

fn trip_not_found(trip_id: i32) -> ServiceError {
    ServiceError::NotFound(format!("Trip {trip_id} does not exist."))
}

fn registration_not_found(client_id: i32, trip_id: i32) -> ServiceError {
    ServiceError::NotFound(format!(
        "Registration of client {client_id} for trip {trip_id} does not exist."
    ))
}

/// Lists the trips the client is registered for.
///
/// The client is probed first; an unknown client fails with
/// [`ServiceError::NotFound`] before the trip query runs.
pub fn list_client_trips<R>(repo: &R, client_id: i32) -> ServiceResult<Vec<Trip>>
where
    R: ClientReader + TripReader + ?Sized,
{
    let id = ClientId::new(client_id).map_err(|_| client_not_found(client_id))?;

    if !repo.client_exists(id)? {
        return Err(client_not_found(client_id));
    }

    let trips = repo.list_client_trips(id).map_err(|err| {
        log::error!("Failed to list trips of client {client_id}: {err}");
        err
    })?;

    Ok(trips)
}

/// Persists a new client and returns the generated identifier.
pub fn add_client<R>(repo: &R, form: AddClientForm) -> ServiceResult<ClientId>
where
    R: ClientWriter + ?Sized,
{
    let new_client: NewClient = form.into();

    let client_id = repo.create_client(&new_client).map_err(|err| {
        log::error!("Failed to add a client: {err}");
        err
    })?;

    log::info!("Client {client_id} created");
    Ok(client_id)
}

/// Registers the client for the trip if both exist, the client is not yet
/// registered and the trip has a free place.
pub fn register_client_to_trip<R>(
    repo: &R,
    client_id: i32,
    trip_id: i32,
) -> ServiceResult<Registration>
where
    R: RegistrationWriter + ?Sized,
{
    let client = ClientId::new(client_id).map_err(|_| client_not_found(client_id))?;
    let trip = TripId::new(trip_id).map_err(|_| trip_not_found(trip_id))?;

    let mark = registration_mark(Utc::now());

    match repo.register_client_to_trip(client, trip, &mark)? {
        RegistrationAttempt::Registered(registration) => {
            log::info!("Client {client_id} registered for trip {trip_id}");
            Ok(registration)
        }
        RegistrationAttempt::UnknownClient => Err(client_not_found(client_id)),
        RegistrationAttempt::UnknownTrip => Err(trip_not_found(trip_id)),
        RegistrationAttempt::AlreadyRegistered => Err(ServiceError::InvalidOperation(format!(
            "Client {client_id} is already registered for trip {trip_id}."
        ))),
        RegistrationAttempt::TripFull { max_people } => {
            log::info!("Trip {trip_id} is full ({max_people} participants)");
            Err(ServiceError::InvalidOperation(format!(
                "Trip {trip_id} has reached its maximum number of participants."
            )))
        }
    }
}

/// Removes the client's registration for the trip.
pub fn unregister_client_from_trip<R>(repo: &R, client_id: i32, trip_id: i32) -> ServiceResult<()>
where
    R: RegistrationWriter + ?Sized,
{
    let (Ok(client), Ok(trip)) = (ClientId::new(client_id), TripId::new(trip_id)) else {
        return Err(registration_not_found(client_id, trip_id));
    };

    if repo.delete_registration(client, trip)? == 0 {
        return Err(registration_not_found(client_id, trip_id));
    }

    log::info!("Client {client_id} unregistered from trip {trip_id}");
    Ok(())
}
