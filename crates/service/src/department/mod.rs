//! Department module: persisted records, the read-side view with a live
//! employee count, and the service enforcing name uniqueness.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::DepartmentView;
pub use service::DepartmentService;
