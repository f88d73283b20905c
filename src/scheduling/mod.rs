pub mod calculator;
pub mod constants;
pub mod hours;
