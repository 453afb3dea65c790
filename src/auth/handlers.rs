use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info, instrument};
use utoipa::ToSchema;

use crate::auth::jwt::generate_access_token;
use crate::auth::service::AuthService;
use crate::config::Config;
use crate::model::user::User;

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "EMP001")]
    pub employee_id: String,
    #[schema(example = "password1")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}

/// Swagger doc for the login endpoint
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body(
        content = LoginRequest,
        description = "Employee credentials",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Missing credentials"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
#[instrument(
    name = "auth_login",
    skip(auth, config, payload),
    fields(employee_id = %payload.employee_id)
)]
pub async fn login(
    payload: web::Json<LoginRequest>,
    auth: web::Data<AuthService>,
    config: web::Data<Config>,
) -> impl Responder {
    info!("Login request received");

    if payload.employee_id.trim().is_empty() || payload.password.is_empty() {
        info!("Validation failed: empty employee id or password");
        return HttpResponse::BadRequest().json(json!({
            "message": "Employee ID and password must not be empty"
        }));
    }

    debug!("Checking credentials against the roster");

    let user = match auth.authenticate(payload.employee_id.trim(), &payload.password) {
        Some(user) => user,
        None => {
            info!("Invalid credentials");
            return HttpResponse::Unauthorized().json(json!({
                "message": "Invalid credentials"
            }));
        }
    };

    let access_token = generate_access_token(&user, &config.jwt_secret, config.access_token_ttl);

    info!("Login successful");

    HttpResponse::Ok().json(LoginResponse { access_token, user })
}
