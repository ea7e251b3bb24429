pub mod calendar;
pub mod embed;
