pub mod database;
pub mod log;
pub mod repositories;
