pub mod log;
pub mod repos;
