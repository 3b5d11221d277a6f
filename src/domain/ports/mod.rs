pub mod configuration_repository;
pub mod holiday_repository;
pub mod person_repository;
pub mod vacation_repository;
