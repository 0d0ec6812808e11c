use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use common::types::Message;
use models::employee::{self, EmployeeInput};
use serde::Deserialize;
use tracing::info;
use utoipa::IntoParams;

use crate::errors::JsonApiError;
use crate::state::ServerState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive fragment of the first or last name.
    #[serde(default)]
    pub keyword: String,
}

#[utoipa::path(get, path = "/api/employees", tag = "employees",
    responses((status = 200, description = "All employees", body = [crate::openapi::EmployeeDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<employee::Model>>, JsonApiError> {
    let list = state.employees.list().await?;
    info!(count = list.len(), "list employees");
    Ok(Json(list))
}

#[utoipa::path(get, path = "/api/employees/{id}", tag = "employees",
    params(("id" = i32, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee", body = crate::openapi::EmployeeDoc),
        (status = 404, description = "Unknown id", body = crate::openapi::ErrorDoc),
    ))]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<employee::Model>, JsonApiError> {
    Ok(Json(state.employees.get(id).await?))
}

#[utoipa::path(post, path = "/api/employees", tag = "employees",
    request_body = crate::openapi::EmployeeInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::EmployeeDoc),
        (status = 400, description = "Invalid input", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Email already used", body = crate::openapi::ErrorDoc),
    ))]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> Result<(StatusCode, Json<employee::Model>), JsonApiError> {
    let Json(input) = payload?;
    let created = state.employees.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(put, path = "/api/employees/{id}", tag = "employees",
    params(("id" = i32, Path, description = "Employee id")),
    request_body = crate::openapi::EmployeeInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::EmployeeDoc),
        (status = 400, description = "Invalid input", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Unknown id", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Email already used", body = crate::openapi::ErrorDoc),
    ))]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> Result<Json<employee::Model>, JsonApiError> {
    let Json(input) = payload?;
    Ok(Json(state.employees.update(id, input).await?))
}

#[utoipa::path(delete, path = "/api/employees/{id}", tag = "employees",
    params(("id" = i32, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Unknown id", body = crate::openapi::ErrorDoc),
    ))]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<Message>, JsonApiError> {
    state.employees.delete(id).await?;
    Ok(Json(Message::new("Employee deleted successfully")))
}

#[utoipa::path(get, path = "/api/employees/department/{department}", tag = "employees",
    params(("department" = String, Path, description = "Exact department name")),
    responses((status = 200, description = "Employees in the department", body = [crate::openapi::EmployeeDoc])))]
pub async fn by_department(
    State(state): State<ServerState>,
    Path(department): Path<String>,
) -> Result<Json<Vec<employee::Model>>, JsonApiError> {
    Ok(Json(state.employees.find_by_department(&department).await?))
}

#[utoipa::path(get, path = "/api/employees/status/{status}", tag = "employees",
    params(("status" = String, Path, description = "Exact status")),
    responses((status = 200, description = "Employees with the status", body = [crate::openapi::EmployeeDoc])))]
pub async fn by_status(
    State(state): State<ServerState>,
    Path(status): Path<String>,
) -> Result<Json<Vec<employee::Model>>, JsonApiError> {
    Ok(Json(state.employees.find_by_status(&status).await?))
}

#[utoipa::path(get, path = "/api/employees/search", tag = "employees",
    params(SearchQuery),
    responses((status = 200, description = "Employees whose name contains the keyword", body = [crate::openapi::EmployeeDoc])))]
pub async fn search(
    State(state): State<ServerState>,
    Query(q): Query<SearchQuery>,
) -> Result<Json<Vec<employee::Model>>, JsonApiError> {
    let found = state.employees.search_by_name(&q.keyword).await?;
    info!(keyword = %q.keyword, count = found.len(), "search employees");
    Ok(Json(found))
}
