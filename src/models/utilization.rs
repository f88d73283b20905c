use serde::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UtilizationSummary {
    pub percentage: u32,
    pub available_minutes: u32,
    pub booked_minutes: u32,
}
