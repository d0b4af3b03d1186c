pub mod appointment_repo;
pub mod prescription_repo;
