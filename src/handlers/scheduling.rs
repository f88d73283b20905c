use crate::error::ApiError;
use crate::models::gap::Gap;
use crate::models::utilization::UtilizationSummary;
use crate::scheduling::calculator;
use crate::scheduling::hours::ScheduleConfig;
use crate::store::Store;
use chrono::NaiveDate;

pub async fn get_utilization(
    store: &Store,
    config: &ScheduleConfig,
    anchor: NaiveDate,
) -> Result<UtilizationSummary, ApiError> {
    let (operatories, appointments) = store.snapshot(anchor, config.window_end(anchor)).await;
    Ok(calculator::utilization(config, anchor, &operatories, &appointments))
}

pub async fn get_gaps(
    store: &Store,
    config: &ScheduleConfig,
    anchor: NaiveDate,
) -> Result<Vec<Gap>, ApiError> {
    let (operatories, appointments) = store.snapshot(anchor, config.window_end(anchor)).await;
    let gaps = calculator::find_gaps(config, anchor, &operatories, &appointments)?;
    tracing::debug!("Found {} gaps from {}", gaps.len(), anchor);
    Ok(gaps)
}
