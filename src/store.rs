use crate::error::StoreError;
use crate::models::appointment::{Appointment, AppointmentStatus, NewAppointment};
use crate::models::operatory::Operatory;
use crate::scheduling::constants::MINUTES_PER_DAY;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    operatories: BTreeMap<u32, Operatory>,
    appointments: BTreeMap<u32, Appointment>,
    next_operatory_id: u32,
    next_appointment_id: u32,
}

/// In-memory operatory and appointment tables.
///
/// Built once in `main` and handed to handlers through `web::Data`.
#[derive(Default)]
pub struct Store {
    tables: RwLock<Tables>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_operatory(&self, name: String, color: String) -> Operatory {
        let mut tables = self.tables.write().await;
        tables.next_operatory_id += 1;
        let operatory = Operatory {
            id: tables.next_operatory_id,
            name,
            color,
        };
        tables.operatories.insert(operatory.id, operatory.clone());
        operatory
    }

    pub async fn operatories(&self) -> Vec<Operatory> {
        self.tables
            .read()
            .await
            .operatories
            .values()
            .cloned()
            .collect()
    }

    pub async fn operatory(&self, id: u32) -> Result<Operatory, StoreError> {
        self.tables
            .read()
            .await
            .operatories
            .get(&id)
            .cloned()
            .ok_or(StoreError::OperatoryNotFound(id))
    }

    /// Rejects bookings that overlap a chair-occupying appointment on the same operatory,
    /// run past midnight, start mid-minute, or skip ahead in the status flow.
    pub async fn create_appointment(&self, new: NewAppointment) -> Result<Appointment, StoreError> {
        if new.duration == 0 || new.end_minute() > MINUTES_PER_DAY {
            return Err(StoreError::InvalidDuration);
        }
        if !new.starts_on_minute() {
            return Err(StoreError::InvalidStartTime(new.start_time));
        }
        let status = new.status.unwrap_or(AppointmentStatus::Scheduled);
        if !status.is_initial() {
            return Err(StoreError::InvalidInitialStatus(status));
        }

        let mut tables = self.tables.write().await;

        if !tables.operatories.contains_key(&new.operatory_id) {
            return Err(StoreError::OperatoryNotFound(new.operatory_id));
        }

        if let Some(existing) = tables
            .appointments
            .values()
            .find(|appt| appt.status.occupies_chair() && appt.overlaps(&new))
        {
            return Err(StoreError::Overlap(existing.id));
        }

        tables.next_appointment_id += 1;
        let appointment = Appointment {
            id: tables.next_appointment_id,
            operatory_id: new.operatory_id,
            patient_id: new.patient_id,
            provider_id: new.provider_id,
            date: new.date,
            start_time: new.start_time,
            duration: new.duration,
            status,
            procedure_code: new.procedure_code,
        };
        tables
            .appointments
            .insert(appointment.id, appointment.clone());

        Ok(appointment)
    }

    pub async fn appointment(&self, id: u32) -> Result<Appointment, StoreError> {
        self.tables
            .read()
            .await
            .appointments
            .get(&id)
            .cloned()
            .ok_or(StoreError::AppointmentNotFound(id))
    }

    /// Appointments dated in `[from, to]`, in id order
    pub async fn appointments_between(&self, from: NaiveDate, to: NaiveDate) -> Vec<Appointment> {
        let tables = self.tables.read().await;
        Self::filter_dates(&tables, from, to)
    }

    /// Appointments on `date`, ordered by operatory then start time
    pub async fn appointments_on(&self, date: NaiveDate) -> Vec<Appointment> {
        let mut appointments = self.appointments_between(date, date).await;
        appointments.sort_by_key(|appt| (appt.operatory_id, appt.start_time));
        appointments
    }

    pub async fn update_status(
        &self,
        id: u32,
        status: AppointmentStatus,
    ) -> Result<Appointment, StoreError> {
        let mut tables = self.tables.write().await;
        let appointment = tables
            .appointments
            .get_mut(&id)
            .ok_or(StoreError::AppointmentNotFound(id))?;

        if !appointment.status.can_transition_to(status) {
            return Err(StoreError::InvalidTransition {
                from: appointment.status,
                to: status,
            });
        }

        appointment.status = status;
        Ok(appointment.clone())
    }

    /// Operatories plus the appointments dated in `[from, to]`, read under one lock
    pub async fn snapshot(&self, from: NaiveDate, to: NaiveDate) -> (Vec<Operatory>, Vec<Appointment>) {
        let tables = self.tables.read().await;
        let operatories = tables.operatories.values().cloned().collect();
        (operatories, Self::filter_dates(&tables, from, to))
    }

    fn filter_dates(tables: &Tables, from: NaiveDate, to: NaiveDate) -> Vec<Appointment> {
        tables
            .appointments
            .values()
            .filter(|appt| appt.date >= from && appt.date <= to)
            .cloned()
            .collect()
    }
}
