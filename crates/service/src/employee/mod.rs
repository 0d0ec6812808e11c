//! Employee module: repository abstraction, SeaORM implementation and the
//! business service enforcing email uniqueness, defaults and timestamps.

pub mod repository;
pub mod repo;
pub mod service;

pub use service::EmployeeService;
