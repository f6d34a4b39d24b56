pub mod approval;
pub mod calendar;
pub mod conflict;
pub mod generation;
pub mod listing;
pub mod utilization;
