//! HTTP handlers of the trips API.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, web};

use crate::services::ServiceError;

pub mod clients;
pub mod trips;

/// Registers every API route under `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(trips::list_trips)
            .service(clients::list_client_trips)
            .service(clients::add_client)
            .service(clients::register_client_to_trip)
            .service(clients::unregister_client_from_trip),
    );
}

/// Builds a response with a plain-text body.
pub fn plain_text(mut builder: actix_web::HttpResponseBuilder, message: String) -> HttpResponse {
    builder.content_type(ContentType::plaintext()).body(message)
}

/// Maps a service failure to its HTTP response, logging internal faults.
pub fn error_response(err: ServiceError, context: &str) -> HttpResponse {
    match err {
        ServiceError::NotFound(message) => plain_text(HttpResponse::NotFound(), message),
        ServiceError::InvalidOperation(message) => plain_text(HttpResponse::BadRequest(), message),
        err => {
            log::error!("{context}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
