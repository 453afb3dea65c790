use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::auth::auth::AuthUser;
use crate::auth::service::{AuthService, NewEmployee};
use crate::model::user::User;

#[derive(Serialize, ToSchema)]
pub struct EmployeeListResponse {
    pub data: Vec<User>,
    #[schema(example = 3)]
    pub total: usize,
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = NewEmployee,
    responses(
        (status = 201, description = "Employee created successfully", body = Object, example = json!({
            "message": "Employee created successfully."
        })),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 409, description = "Employee ID already exists", body = Object, example = json!({
            "message": "Employee ID already exists."
        }))
    ),
    tag = "Employee",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_employee(
    auth: AuthUser,
    service: web::Data<AuthService>,
    payload: web::Json<NewEmployee>,
) -> actix_web::Result<impl Responder> {
    auth.require_admin()?;

    let user = service.add_user(payload.into_inner())?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Employee created successfully.",
        "user": user
    })))
}

/// List the roster (admin)
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All known users, password hashes stripped",
         body = EmployeeListResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Employee",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_employees(
    auth: AuthUser,
    service: web::Data<AuthService>,
) -> actix_web::Result<impl Responder> {
    auth.require_admin()?;

    let data = service.roster();
    let total = data.len();
    Ok(HttpResponse::Ok().json(EmployeeListResponse { data, total }))
}
