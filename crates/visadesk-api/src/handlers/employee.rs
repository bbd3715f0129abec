//! Employee CRUD handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use visadesk_core::error::AppError;
use visadesk_entity::employee::model::Employee;

use crate::dto::request::{CreateEmployeeRequest, UpdateEmployeeRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/employees
pub async fn list_employees(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let result = state
        .employee_service
        .list(params.into_page_request())
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": result })))
}

/// GET /api/employees/:id
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Employee>>, ApiError> {
    let employee = state.employee_service.get(id).await?;
    Ok(Json(ApiResponse::ok(employee)))
}

/// POST /api/employees
pub async fn create_employee(
    State(state): State<AppState>,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<Json<ApiResponse<Employee>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let employee = state.employee_service.create(req.into()).await?;
    Ok(Json(ApiResponse::ok(employee)))
}

/// PUT /api/employees/:id
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateEmployeeRequest>,
) -> Result<Json<ApiResponse<Employee>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let employee = state.employee_service.update(id, req.into()).await?;
    Ok(Json(ApiResponse::ok(employee)))
}

/// DELETE /api/employees/:id
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.employee_service.delete(id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "message": "Employee deleted" } }),
    ))
}
