use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use common::types::Message;
use models::department::DepartmentInput;
use service::DepartmentView;

use crate::errors::JsonApiError;
use crate::state::ServerState;

#[utoipa::path(get, path = "/api/departments", tag = "departments",
    responses((status = 200, description = "All departments with employee counts", body = [crate::openapi::DepartmentDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<DepartmentView>>, JsonApiError> {
    Ok(Json(state.departments.list().await?))
}

#[utoipa::path(get, path = "/api/departments/{id}", tag = "departments",
    params(("id" = i32, Path, description = "Department id")),
    responses(
        (status = 200, description = "Department", body = crate::openapi::DepartmentDoc),
        (status = 404, description = "Unknown id", body = crate::openapi::ErrorDoc),
    ))]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<DepartmentView>, JsonApiError> {
    Ok(Json(state.departments.get(id).await?))
}

#[utoipa::path(post, path = "/api/departments", tag = "departments",
    request_body = crate::openapi::DepartmentInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::DepartmentDoc),
        (status = 400, description = "Invalid input", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Name already used", body = crate::openapi::ErrorDoc),
    ))]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<DepartmentInput>, JsonRejection>,
) -> Result<(StatusCode, Json<DepartmentView>), JsonApiError> {
    let Json(input) = payload?;
    let created = state.departments.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(put, path = "/api/departments/{id}", tag = "departments",
    params(("id" = i32, Path, description = "Department id")),
    request_body = crate::openapi::DepartmentInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::DepartmentDoc),
        (status = 400, description = "Invalid input", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Unknown id", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Name already used", body = crate::openapi::ErrorDoc),
    ))]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    payload: Result<Json<DepartmentInput>, JsonRejection>,
) -> Result<Json<DepartmentView>, JsonApiError> {
    let Json(input) = payload?;
    Ok(Json(state.departments.update(id, input).await?))
}

#[utoipa::path(delete, path = "/api/departments/{id}", tag = "departments",
    params(("id" = i32, Path, description = "Department id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Unknown id", body = crate::openapi::ErrorDoc),
    ))]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<Message>, JsonApiError> {
    state.departments.delete(id).await?;
    Ok(Json(Message::new("Department deleted successfully")))
}
