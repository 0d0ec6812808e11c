use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::errors::{ModelError, ValidationErrors};
use crate::wire::null_as_empty;

/// Status stored when a request leaves it out.
pub const DEFAULT_STATUS: &str = "Active";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: String,
    /// Department name as free text; not a key into `department`.
    pub department: String,
    pub position: String,
    #[sea_orm(column_type = "Double")]
    pub salary: f64,
    pub hire_date: Date,
    pub address: Option<String>,
    pub status: String,
    pub created_at: Date,
    pub updated_at: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Employee fields as submitted by a client on create or update.
///
/// Everything is optional on the wire so that a missing, `null` or blank
/// field surfaces as a validation error naming it instead of a
/// deserialization failure. `hire_date` stays raw text (`YYYY-MM-DD`) until
/// [`EmployeeInput::validate`] parses it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeInput {
    #[serde(deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub department: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub position: String,
    pub salary: Option<f64>,
    pub hire_date: Option<String>,
    pub address: Option<String>,
    pub status: Option<String>,
}

/// Employee fields that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    pub salary: f64,
    pub hire_date: Date,
    pub address: Option<String>,
    /// `None` when the client sent nothing or only whitespace.
    pub status: Option<String>,
}

impl EmployeeData {
    /// Requested status, or [`DEFAULT_STATUS`].
    pub fn status_or_default(&self) -> String {
        self.status.clone().unwrap_or_else(|| DEFAULT_STATUS.to_string())
    }
}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    let mut errs = ValidationErrors::new();
    check_email(&mut errs, email);
    errs.into_result()
}

fn check_email(errs: &mut ValidationErrors, email: &str) {
    if email.trim().is_empty() {
        errs.add("email", "Email is required");
    } else if !email.validate_email() {
        errs.add("email", "Email should be valid");
    }
}

fn parse_hire_date(errs: &mut ValidationErrors, raw: Option<&str>) -> Option<Date> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => {
            errs.add("hireDate", "Hire date is required");
            None
        }
        Some(s) => match Date::parse_from_str(s, "%Y-%m-%d") {
            Ok(d) => Some(d),
            Err(_) => {
                errs.add("hireDate", "Hire date must be a date in YYYY-MM-DD format");
                None
            }
        },
    }
}

fn require(errs: &mut ValidationErrors, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errs.add(field, message);
    }
}

impl EmployeeInput {
    /// Check every field and collect all failures before returning.
    pub fn validate(self) -> Result<EmployeeData, ModelError> {
        let mut errs = ValidationErrors::new();
        require(&mut errs, "firstName", &self.first_name, "First name is required");
        require(&mut errs, "lastName", &self.last_name, "Last name is required");
        check_email(&mut errs, &self.email);
        require(&mut errs, "phone", &self.phone, "Phone number is required");
        require(&mut errs, "department", &self.department, "Department is required");
        require(&mut errs, "position", &self.position, "Position is required");
        match self.salary {
            None => errs.add("salary", "Salary is required"),
            Some(s) if !s.is_finite() || s < 0.0 => errs.add("salary", "Salary must be a non-negative number"),
            Some(_) => {}
        }
        let hire_date = parse_hire_date(&mut errs, self.hire_date.as_deref());

        match (self.salary, hire_date) {
            (Some(salary), Some(hire_date)) if errs.is_empty() => Ok(EmployeeData {
                first_name: self.first_name,
                last_name: self.last_name,
                email: self.email,
                phone: self.phone,
                department: self.department,
                position: self.position,
                salary,
                hire_date,
                address: self.address,
                status: self.status.filter(|s| !s.trim().is_empty()),
            }),
            _ => Err(ModelError::Validation(errs)),
        }
    }
}
