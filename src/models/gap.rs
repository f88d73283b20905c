use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Idle window on one operatory's calendar, computed on demand
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Gap {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub duration: u32,
    pub operatory_id: u32,
}
