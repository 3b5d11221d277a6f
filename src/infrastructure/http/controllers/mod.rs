pub mod configuration;
pub mod health;
pub mod holidays;
pub mod persons;
pub mod stats;
pub mod vacations;
pub mod working_days;
