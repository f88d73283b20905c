use crate::models::appointment::{AppointmentStatus, NewAppointment};
use crate::store::Store;
use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use csv::ReaderBuilder;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::{fs::File, io::BufReader, path::Path};
use tracing::{info, warn};

const DEFAULT_OPERATORIES: [(&str, &str); 3] = [
    ("Op 1", "#3b82f6"),
    ("Op 2", "#22c55e"),
    ("Op 3", "#f59e0b"),
];

#[derive(Debug, Deserialize)]
struct OperatoryRow {
    name: String,
    color: String,
}

#[derive(Debug, Deserialize)]
struct AppointmentRow {
    operatory_id: u32,
    patient_id: u32,
    provider_id: u32,
    date: NaiveDate,
    start_time: NaiveTime,
    duration: u32,
    status: Option<AppointmentStatus>,
    procedure_code: Option<String>,
}

impl From<AppointmentRow> for NewAppointment {
    fn from(row: AppointmentRow) -> Self {
        NewAppointment {
            operatory_id: row.operatory_id,
            patient_id: row.patient_id,
            provider_id: row.provider_id,
            date: row.date,
            start_time: row.start_time,
            duration: row.duration,
            status: row.status,
            procedure_code: row.procedure_code.filter(|code| !code.is_empty()),
        }
    }
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let mut rows = Vec::new();
    for (line, record) in reader.deserialize().enumerate() {
        // +2: one for the header, one because lines are 1-based
        let row = record.with_context(|| format!("{}: bad row on line {}", path.display(), line + 2))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Loads operatories from `path` (header `name,color`), or the three defaults when `None`.
pub async fn seed_operatories(store: &Store, path: Option<&Path>) -> Result<usize> {
    let rows: Vec<OperatoryRow> = match path {
        Some(path) => read_rows(path)?,
        None => DEFAULT_OPERATORIES
            .iter()
            .map(|(name, color)| OperatoryRow {
                name: name.to_string(),
                color: color.to_string(),
            })
            .collect(),
    };

    let count = rows.len();
    for row in rows {
        store.add_operatory(row.name, row.color).await;
    }

    info!("Seeded {} operatories", count);
    Ok(count)
}

/// Rows the store refuses (overlap, unknown operatory) are logged and skipped.
pub async fn seed_appointments(store: &Store, path: &Path) -> Result<usize> {
    let rows: Vec<AppointmentRow> = read_rows(path)?;
    let mut inserted = 0;

    for row in rows {
        let new: NewAppointment = row.into();
        match store.create_appointment(new.clone()).await {
            Ok(_) => inserted += 1,
            Err(e) => warn!(
                "Skipping seed appointment on operatory {} at {} {}: {}",
                new.operatory_id, new.date, new.start_time, e
            ),
        }
    }

    info!("Seeded {} appointments from {}", inserted, path.display());
    Ok(inserted)
}
