use models::department;
use serde::Serialize;

/// Department as returned to callers: the persisted fields plus the number of
/// employees whose `department` text equals `name`, computed at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentView {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub manager: Option<String>,
    pub employee_count: u64,
}

impl DepartmentView {
    pub fn new(record: department::Model, employee_count: u64) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            manager: record.manager,
            employee_count,
        }
    }
}
