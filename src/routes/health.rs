use crate::scheduling::hours::ScheduleConfig;
use crate::store::Store;
use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

#[get("/ping")]
async fn ping() -> impl Responder {
    HttpResponse::Ok().body("pong")
}

/// Ready once seeding has produced at least one chair to schedule against
#[get("/ready")]
async fn ready(store: web::Data<Store>, config: web::Data<ScheduleConfig>) -> impl Responder {
    let operatories = store.operatories().await.len();
    let body = json!({
        "operatories": operatories,
        "openMinute": config.open_minute(),
        "closeMinute": config.close_minute(),
    });

    if operatories == 0 {
        tracing::warn!("Readiness check with no operatories configured");
        HttpResponse::ServiceUnavailable().json(body)
    } else {
        HttpResponse::Ok().json(body)
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(ping).service(ready);
}
