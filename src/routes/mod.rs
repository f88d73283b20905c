pub mod appointments;
pub mod health;
pub mod operatories;
pub mod scheduling;

use crate::error::ApiError;
use actix_web::web;

/// Extractor failures answer with the same `{ "error": ... }` body as the handlers
fn extractor_errors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::Malformed(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| ApiError::Malformed(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| ApiError::BadPath(err.to_string()).into()),
    );
}

pub fn init(cfg: &mut web::ServiceConfig) {
    extractor_errors(cfg);
    cfg.service(web::scope("/health").configure(health::init))
        .service(web::scope("/api/scheduling").configure(scheduling::init))
        .service(web::scope("/api/operatories").configure(operatories::init))
        .service(web::scope("/api/appointments").configure(appointments::init));
}
