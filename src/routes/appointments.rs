use crate::handlers::appointments::{book, get_appointment, get_appointments, set_status};
use crate::handlers::resolve_date;
use crate::models::appointment::{AppointmentStatus, NewAppointment};
use crate::routes::scheduling::DateQuery;
use crate::store::Store;
use actix_web::{HttpResponse, Responder, ResponseError, get, patch, post, web};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct StatusChange {
    status: AppointmentStatus,
}

#[get("")]
async fn list(store: web::Data<Store>, query: web::Query<DateQuery>) -> impl Responder {
    match resolve_date(query.date.as_deref()) {
        Ok(date) => HttpResponse::Ok().json(get_appointments(&store, date).await),
        Err(e) => e.error_response(),
    }
}

#[get("/{id}")]
async fn show(store: web::Data<Store>, path: web::Path<u32>) -> impl Responder {
    match get_appointment(&store, path.into_inner()).await {
        Ok(appointment) => HttpResponse::Ok().json(appointment),
        Err(e) => e.error_response(),
    }
}

#[post("")]
async fn create(store: web::Data<Store>, body: web::Json<NewAppointment>) -> impl Responder {
    match book(&store, body.into_inner()).await {
        Ok(appointment) => HttpResponse::Created().json(appointment),
        Err(e) => {
            tracing::warn!("Booking rejected: {}", e);
            e.error_response()
        }
    }
}

#[patch("/{id}/status")]
async fn update_status(
    store: web::Data<Store>,
    path: web::Path<u32>,
    body: web::Json<StatusChange>,
) -> impl Responder {
    let id = path.into_inner();

    match set_status(&store, id, body.status).await {
        Ok(appointment) => HttpResponse::Ok().json(appointment),
        Err(e) => e.error_response(),
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(list)
        .service(show)
        .service(create)
        .service(update_status);
}
