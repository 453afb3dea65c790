use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::auth::auth::AuthUser;
use crate::ledger::LeaveLedger;
use crate::model::notification::Notification;

#[derive(Serialize, ToSchema)]
pub struct NotificationListResponse {
    pub data: Vec<Notification>,
    #[schema(example = 3)]
    pub total: usize,
}

/// Swagger doc for notification_list endpoint
#[utoipa::path(
    get,
    path = "/api/notifications",
    responses(
        (status = 200, description = "Notifications of the acting user, newest first",
         body = NotificationListResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Notification"
)]
pub async fn notification_list(
    auth: AuthUser,
    ledger: web::Data<LeaveLedger>,
) -> actix_web::Result<impl Responder> {
    let data = ledger.notifications_for_user(&auth.user_id);
    let total = data.len();
    Ok(HttpResponse::Ok().json(NotificationListResponse { data, total }))
}

/// Swagger doc for unread_count endpoint
#[utoipa::path(
    get,
    path = "/api/notifications/unread-count",
    responses(
        (status = 200, description = "Number of unread notifications", body = Object,
         example = json!({ "count": 2 })),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Notification"
)]
pub async fn unread_count(
    auth: AuthUser,
    ledger: web::Data<LeaveLedger>,
) -> actix_web::Result<impl Responder> {
    let count = ledger.unread_notification_count(&auth.user_id);
    Ok(HttpResponse::Ok().json(json!({ "count": count })))
}

/// Swagger doc for mark_read endpoint
#[utoipa::path(
    put,
    path = "/api/notifications/{notification_id}/read",
    params(
        ("notification_id" = String, Path, description = "ID of the notification to mark read")
    ),
    responses(
        (status = 200, description = "Marked as read (no-op for unknown or already-read ids)",
         body = Object, example = json!({ "message": "Notification marked as read." })),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Notification"
)]
pub async fn mark_read(
    _auth: AuthUser,
    ledger: web::Data<LeaveLedger>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    ledger.mark_notification_as_read(&path.into_inner())?;
    Ok(HttpResponse::Ok().json(json!({
        "message": "Notification marked as read."
    })))
}

/// Swagger doc for mark_all_read endpoint
#[utoipa::path(
    put,
    path = "/api/notifications/read-all",
    responses(
        (status = 200, description = "All notifications of the acting user marked read",
         body = Object, example = json!({ "message": "All notifications marked as read." })),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Notification"
)]
pub async fn mark_all_read(
    auth: AuthUser,
    ledger: web::Data<LeaveLedger>,
) -> actix_web::Result<impl Responder> {
    ledger.mark_all_notifications_as_read(&auth.user_id)?;
    Ok(HttpResponse::Ok().json(json!({
        "message": "All notifications marked as read."
    })))
}
