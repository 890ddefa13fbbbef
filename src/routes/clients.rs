use actix_web::http::header;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::clients::ClientCreatedDto;
use crate::dto::trips::TripDto;
use crate::forms::clients::AddClientForm;
use crate::repository::DieselRepository;
use crate::routes::{error_response, plain_text};
use crate::services::clients as clients_service;

#[get("/clients/{client_id}/trips")]
pub async fn list_client_trips(
    client_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match clients_service::list_client_trips(repo.get_ref(), client_id.into_inner()) {
        Ok(trips) => {
            HttpResponse::Ok().json(trips.into_iter().map(TripDto::from).collect::<Vec<_>>())
        }
        Err(err) => error_response(err, "Failed to list client trips"),
    }
}

#[post("/clients")]
pub async fn add_client(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddClientForm>,
) -> impl Responder {
    match clients_service::add_client(repo.get_ref(), form) {
        Ok(client_id) => HttpResponse::Created()
            .insert_header((header::LOCATION, format!("/api/clients/{client_id}/trips")))
            .json(ClientCreatedDto::from(client_id)),
        Err(err) => error_response(err, "Failed to add a client"),
    }
}

#[put("/clients/{client_id}/trips/{trip_id}")]
pub async fn register_client_to_trip(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (client_id, trip_id) = path.into_inner();
    match clients_service::register_client_to_trip(repo.get_ref(), client_id, trip_id) {
        Ok(_) => plain_text(HttpResponse::Ok(), "Client registered.".to_string()),
        Err(err) => error_response(err, "Failed to register the client"),
    }
}

#[delete("/clients/{client_id}/trips/{trip_id}")]
pub async fn unregister_client_from_trip(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (client_id, trip_id) = path.into_inner();
    match clients_service::unregister_client_from_trip(repo.get_ref(), client_id, trip_id) {
        Ok(()) => plain_text(HttpResponse::Ok(), "Client unregistered.".to_string()),
        Err(err) => error_response(err, "Failed to unregister the client"),
    }
}
