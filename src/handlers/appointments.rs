use crate::error::ApiError;
use crate::models::appointment::{Appointment, AppointmentStatus, NewAppointment};
use crate::store::Store;
use chrono::NaiveDate;
use tracing::info;

pub async fn get_appointments(store: &Store, date: NaiveDate) -> Vec<Appointment> {
    store.appointments_on(date).await
}

pub async fn get_appointment(store: &Store, id: u32) -> Result<Appointment, ApiError> {
    Ok(store.appointment(id).await?)
}

pub async fn book(store: &Store, new: NewAppointment) -> Result<Appointment, ApiError> {
    let appointment = store.create_appointment(new).await?;
    info!(
        "Booked appointment {} on operatory {} at {} {}",
        appointment.id, appointment.operatory_id, appointment.date, appointment.start_time
    );
    Ok(appointment)
}

pub async fn set_status(
    store: &Store,
    id: u32,
    status: AppointmentStatus,
) -> Result<Appointment, ApiError> {
    let appointment = store.update_status(id, status).await?;
    info!("Appointment {} is now {}", id, status);
    Ok(appointment)
}
