use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::{ModelError, ValidationErrors};
use crate::wire::null_as_empty;

/// Persisted department. The employee count is never stored; see the
/// service layer's `DepartmentView`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "department")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub description: Option<String>,
    pub manager: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Department fields as submitted by a client. An `employeeCount` sent by the
/// client is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DepartmentInput {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    pub description: Option<String>,
    pub manager: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentData {
    pub name: String,
    pub description: Option<String>,
    pub manager: Option<String>,
}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    let mut errs = ValidationErrors::new();
    if name.trim().is_empty() {
        errs.add("name", "Department name is required");
    }
    errs.into_result()
}

impl DepartmentInput {
    pub fn validate(self) -> Result<DepartmentData, ModelError> {
        validate_name(&self.name)?;
        Ok(DepartmentData { name: self.name, description: self.description, manager: self.manager })
    }
}
