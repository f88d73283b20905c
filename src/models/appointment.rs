use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an appointment is in its day-of-visit lifecycle
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    /// Booked, not yet confirmed by the patient
    Scheduled,
    /// Patient confirmed they are coming
    Confirmed,
    /// Patient is in the waiting room
    CheckedIn,
    /// Patient is seated in the operatory
    InChair,
    /// Visit finished
    Completed,
    /// Patient never arrived
    NoShow,
    /// Called off before the visit
    Cancelled,
}

impl AppointmentStatus {
    /// Position along the normal visit flow; `None` for the off-ramps
    fn stage(self) -> Option<u8> {
        match self {
            AppointmentStatus::Scheduled => Some(0),
            AppointmentStatus::Confirmed => Some(1),
            AppointmentStatus::CheckedIn => Some(2),
            AppointmentStatus::InChair => Some(3),
            AppointmentStatus::Completed => Some(4),
            AppointmentStatus::NoShow | AppointmentStatus::Cancelled => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            AppointmentStatus::Completed | AppointmentStatus::NoShow | AppointmentStatus::Cancelled
        )
    }

    /// Statuses a booking may be created with; later ones go through `can_transition_to`
    pub fn is_initial(self) -> bool {
        matches!(
            self,
            AppointmentStatus::Scheduled | AppointmentStatus::Confirmed
        )
    }

    /// Whether the appointment still holds its chair for overlap purposes
    pub fn occupies_chair(self) -> bool {
        !matches!(
            self,
            AppointmentStatus::NoShow | AppointmentStatus::Cancelled
        )
    }

    /// Re-applying the current status is accepted as a no-op.
    pub fn can_transition_to(self, next: AppointmentStatus) -> bool {
        if self == next {
            return true;
        }
        if self.is_terminal() {
            return false;
        }

        match (self.stage(), next.stage()) {
            (Some(from), Some(to)) => to > from,
            // cancelling or no-showing is only possible before the patient is seated
            (Some(from), None) => from < 3,
            _ => false,
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::CheckedIn => "checked-in",
            AppointmentStatus::InChair => "in-chair",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::NoShow => "no-show",
            AppointmentStatus::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: u32,
    pub operatory_id: u32,
    pub patient_id: u32,
    pub provider_id: u32,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    /// minutes
    pub duration: u32,
    pub status: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub procedure_code: Option<String>,
}

impl Appointment {
    pub fn start_minute(&self) -> u32 {
        self.start_time.num_seconds_from_midnight() / 60
    }

    /// May run past midnight; no wrap-around is applied.
    pub fn end_minute(&self) -> u32 {
        self.start_minute().saturating_add(self.duration)
    }

    pub fn overlaps(&self, other: &NewAppointment) -> bool {
        self.operatory_id == other.operatory_id
            && self.date == other.date
            && self.start_minute() < other.end_minute()
            && other.start_minute() < self.end_minute()
    }
}

/// Booking request, before the store assigns an id
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub operatory_id: u32,
    pub patient_id: u32,
    pub provider_id: u32,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub duration: u32,
    #[serde(default)]
    pub status: Option<AppointmentStatus>,
    #[serde(default)]
    pub procedure_code: Option<String>,
}

impl NewAppointment {
    pub fn start_minute(&self) -> u32 {
        self.start_time.num_seconds_from_midnight() / 60
    }

    pub fn end_minute(&self) -> u32 {
        self.start_minute().saturating_add(self.duration)
    }

    /// Bookings are on whole minutes
    pub fn starts_on_minute(&self) -> bool {
        self.start_time.second() == 0 && self.start_time.nanosecond() == 0
    }
}
