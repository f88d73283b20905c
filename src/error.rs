use crate::models::appointment::AppointmentStatus;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use chrono::NaiveTime;
use serde_json::json;
use thiserror::Error;

/// Failures inside the gap/utilization calculator
#[derive(Error, Debug, PartialEq)]
pub enum ScheduleError {
    #[error("appointment references unknown operatory {0}")]
    UnknownOperatory(u32),

    #[error("minute {0} does not fit in a day")]
    TimeOutOfRange(u32),
}

#[derive(Error, Debug, PartialEq)]
pub enum StoreError {
    #[error("operatory {0} not found")]
    OperatoryNotFound(u32),

    #[error("appointment {0} not found")]
    AppointmentNotFound(u32),

    #[error("overlaps appointment {0} on the same operatory")]
    Overlap(u32),

    #[error("duration must be at least one minute and end by midnight")]
    InvalidDuration,

    #[error("start time {0} is not on a whole minute")]
    InvalidStartTime(NaiveTime),

    #[error("new appointments must start as scheduled or confirmed, not {0}")]
    InvalidInitialStatus(AppointmentStatus),

    #[error("cannot move appointment from {from} to {to}")]
    InvalidTransition {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },
}

/// Everything a route can fail with
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Body or query string that could not be deserialized
    #[error("malformed request: {0}")]
    Malformed(String),

    #[error("no such resource: {0}")]
    BadPath(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidDate(_) | ApiError::Malformed(_) => StatusCode::BAD_REQUEST,
            ApiError::BadPath(_) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::OperatoryNotFound(_))
            | ApiError::Store(StoreError::AppointmentNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::InvalidDuration)
            | ApiError::Store(StoreError::InvalidStartTime(_))
            | ApiError::Store(StoreError::InvalidInitialStatus(_)) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::Overlap(_))
            | ApiError::Store(StoreError::InvalidTransition { .. }) => StatusCode::CONFLICT,
            ApiError::Schedule(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            // calculator details stay in the logs
            ApiError::Schedule(e) => {
                tracing::error!("Schedule computation failed: {}", e);
                "internal error".to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(json!({ "error": message }))
    }
}
