use chrono::NaiveDate;
use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(Serialize, ToSchema)]
pub struct FieldErrorDoc { pub field: String, pub message: String }

#[derive(Serialize, ToSchema)]
pub struct ErrorDoc {
    pub error: String,
    pub message: Option<String>,
    pub code: Option<u16>,
    /// Present on validation errors only.
    pub fields: Option<Vec<FieldErrorDoc>>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDoc {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    pub salary: f64,
    pub hire_date: NaiveDate,
    pub address: Option<String>,
    pub status: String,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInputDoc {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    pub salary: f64,
    pub hire_date: NaiveDate,
    pub address: Option<String>,
    /// Defaults to "Active" when blank or absent.
    pub status: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDoc {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub manager: Option<String>,
    pub employee_count: u64,
}

#[derive(Serialize, ToSchema)]
pub struct DepartmentInputDoc {
    pub name: String,
    pub description: Option<String>,
    pub manager: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::employees::list,
        crate::routes::employees::get,
        crate::routes::employees::create,
        crate::routes::employees::update,
        crate::routes::employees::delete,
        crate::routes::employees::by_department,
        crate::routes::employees::by_status,
        crate::routes::employees::search,
        crate::routes::departments::list,
        crate::routes::departments::get,
        crate::routes::departments::create,
        crate::routes::departments::update,
        crate::routes::departments::delete,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            FieldErrorDoc,
            ErrorDoc,
            EmployeeDoc,
            EmployeeInputDoc,
            DepartmentDoc,
            DepartmentInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "employees"),
        (name = "departments")
    )
)]
pub struct ApiDoc;
