use actix_web::{HttpResponse, Responder, web};
use serde_json::json;

use crate::auth::auth::AuthUser;
use crate::auth::service::AuthService;
use crate::model::user::User;

/// Session view of the acting user, leave balances included.
#[utoipa::path(
    get,
    path = "/api/me",
    responses(
        (status = 200, description = "The acting user", body = User),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User no longer in the roster")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Account"
)]
pub async fn me(
    auth: AuthUser,
    service: web::Data<AuthService>,
) -> actix_web::Result<impl Responder> {
    match service.find_by_id(&auth.user_id) {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => Ok(HttpResponse::NotFound().json(json!({
            "message": "User not found"
        }))),
    }
}
