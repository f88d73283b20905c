use crate::handlers::resolve_date;
use crate::handlers::scheduling::{get_gaps, get_utilization};
use crate::scheduling::hours::ScheduleConfig;
use crate::store::Store;
use actix_web::{HttpResponse, Responder, ResponseError, get, web};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

#[get("/utilization")]
async fn utilization(
    store: web::Data<Store>,
    config: web::Data<ScheduleConfig>,
    query: web::Query<DateQuery>,
) -> impl Responder {
    let anchor = match resolve_date(query.date.as_deref()) {
        Ok(date) => date,
        Err(e) => return e.error_response(),
    };

    match get_utilization(&store, &config, anchor).await {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(e) => e.error_response(),
    }
}

#[get("/gaps")]
async fn gaps(
    store: web::Data<Store>,
    config: web::Data<ScheduleConfig>,
    query: web::Query<DateQuery>,
) -> impl Responder {
    let anchor = match resolve_date(query.date.as_deref()) {
        Ok(date) => date,
        Err(e) => return e.error_response(),
    };

    match get_gaps(&store, &config, anchor).await {
        Ok(gaps) => HttpResponse::Ok().json(gaps),
        Err(e) => e.error_response(),
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(utilization).service(gaps);
}
