use serde::{Deserialize, Serialize};

/// A treatment room/chair, the unit the schedule is booked against
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Operatory {
    pub id: u32,
    pub name: String,
    pub color: String,
}
