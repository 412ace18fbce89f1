pub mod calendar;
pub mod engine;
pub mod event;
pub mod stats;
