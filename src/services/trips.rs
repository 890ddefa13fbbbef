//! Services exposing the trip catalogue.

use crate::domain::trip::Trip;
use crate::repository::TripReader;
use crate::services::ServiceResult;

/// Lists every trip with its countries, ordered by trip id.
pub fn list_trips<R>(repo: &R) -> ServiceResult<Vec<Trip>>
where
    R: TripReader + ?Sized,
{
    let trips = repo.list_trips().map_err(|err| {
        log::error!("Failed to list trips: {err}");
        err
    })?;

    Ok(trips)
}
