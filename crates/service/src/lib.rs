//! Service layer providing the employee and department business operations.
//! - Separates business rules (uniqueness, defaults, timestamps, derived
//!   counts) from data access.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Storage is reached through repository traits so the services can run
//!   against SeaORM or the in-memory stores used in tests.

pub mod errors;
pub mod employee;
pub mod department;
#[cfg(test)]
pub mod test_support;

pub use department::{DepartmentService, DepartmentView};
pub use employee::EmployeeService;
pub use errors::ServiceError;

/// Calendar date used for `createdAt`/`updatedAt`.
pub(crate) fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
