use crate::handlers::operatories::{get_operatories, get_operatory};
use crate::store::Store;
use actix_web::{HttpResponse, Responder, ResponseError, get, web};

#[get("")]
async fn operatories(store: web::Data<Store>) -> impl Responder {
    HttpResponse::Ok().json(get_operatories(&store).await)
}

#[get("/{id}")]
async fn operatory(store: web::Data<Store>, path: web::Path<u32>) -> impl Responder {
    match get_operatory(&store, path.into_inner()).await {
        Ok(operatory) => HttpResponse::Ok().json(operatory),
        Err(e) => e.error_response(),
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(operatories).service(operatory);
}
