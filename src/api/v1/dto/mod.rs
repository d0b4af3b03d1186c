pub mod appointments;
pub mod prescriptions;
pub mod response;
