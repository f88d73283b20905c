pub mod appointment;
pub mod gap;
pub mod operatory;
pub mod utilization;
