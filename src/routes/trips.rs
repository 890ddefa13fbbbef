use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::trips::TripDto;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::trips as trips_service;

#[get("/trips")]
pub async fn list_trips(repo: web::Data<DieselRepository>) -> impl Responder {
    match trips_service::list_trips(repo.get_ref()) {
        Ok(trips) => {
            HttpResponse::Ok().json(trips.into_iter().map(TripDto::from).collect::<Vec<_>>())
        }
        Err(err) => error_response(err, "Failed to list trips"),
    }
}
