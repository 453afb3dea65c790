use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use crate::auth::auth::AuthUser;
use crate::ledger::{LeaveDraft, LeaveLedger};
use crate::model::leave_request::{LeaveRequest, LeaveStatus};
use crate::model::leave_type::{self, LeaveType};

#[derive(Deserialize, ToSchema)]
pub struct SubmitLeave {
    #[schema(example = "lt1")]
    pub leave_type_id: String,
    #[schema(example = "2026-01-01", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2026-01-02", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    #[schema(example = "Family event")]
    pub reason: String,
}

#[derive(Deserialize, ToSchema)]
pub struct DecisionBody {
    /// Optional free-text remarks shown to the employee.
    #[schema(example = "Enjoy", nullable = true)]
    pub remarks: Option<String>,
}

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct LeaveFilter {
    #[schema(example = "Pending")]
    /// Filter by leave status
    pub status: Option<LeaveStatus>,
}

#[derive(Serialize, ToSchema)]
pub struct LeaveListResponse {
    pub data: Vec<LeaveRequest>,
    #[schema(example = 4)]
    pub total: usize,
}

/* =========================
Submit leave request
========================= */
/// Swagger doc for submit_leave endpoint
#[utoipa::path(
    post,
    path = "/api/leave",
    request_body(
        content = SubmitLeave,
        description = "Leave request payload",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Leave request submitted successfully",
         body = Object,
         example = json!({
            "message": "Leave request submitted successfully.",
            "request_id": "5f6f0c5e-…",
            "status": "Pending"
         })
        ),
        (status = 400, description = "Bad request"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn submit_leave(
    auth: AuthUser,
    ledger: web::Data<LeaveLedger>,
    payload: web::Json<SubmitLeave>,
) -> actix_web::Result<impl Responder> {
    // Form-boundary validation: the ledger records whatever it is given.
    if payload.start_date > payload.end_date {
        return Ok(HttpResponse::BadRequest().json(json!({
            "message": "start_date cannot be after end_date"
        })));
    }

    let Some(leave_type_name) = leave_type::name_for(&payload.leave_type_id) else {
        return Ok(HttpResponse::BadRequest().json(json!({
            "message": "Invalid leave type. Allowed: lt1 (Casual), lt2 (Sick), lt3 (Annual), lt4 (Unpaid)"
        })));
    };

    let actor = auth.actor();
    let draft = LeaveDraft {
        leave_type_id: payload.leave_type_id.clone(),
        leave_type_name: leave_type_name.to_string(),
        start_date: payload.start_date,
        end_date: payload.end_date,
        reason: payload.reason.clone(),
    };

    let outcome = ledger.submit_leave_request(Some(&actor), draft)?;

    Ok(HttpResponse::Ok().json(json!({
        "message": outcome.message,
        "request_id": outcome.request_id,
        "status": LeaveStatus::Pending
    })))
}

/* =========================
List leave requests (Admin)
========================= */
/// Swagger doc for leave_list endpoint
#[utoipa::path(
    get,
    path = "/api/leave",
    params(LeaveFilter),
    responses(
        (status = 200, description = "All leave requests, newest first", body = LeaveListResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn leave_list(
    auth: AuthUser,
    ledger: web::Data<LeaveLedger>,
    query: web::Query<LeaveFilter>,
) -> actix_web::Result<impl Responder> {
    auth.require_admin()?;

    let mut data = ledger.leave_requests_for_admin();
    if let Some(status) = query.status {
        data.retain(|r| r.status == status);
    }
    let total = data.len();

    Ok(HttpResponse::Ok().json(LeaveListResponse { data, total }))
}

/// Swagger doc for my_leave_list endpoint
#[utoipa::path(
    get,
    path = "/api/leave/mine",
    responses(
        (status = 200, description = "Leave requests of the acting user, newest first",
         body = LeaveListResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn my_leave_list(
    auth: AuthUser,
    ledger: web::Data<LeaveLedger>,
) -> actix_web::Result<impl Responder> {
    let data = ledger.leave_requests_for_user(&auth.user_id);
    let total = data.len();
    Ok(HttpResponse::Ok().json(LeaveListResponse { data, total }))
}

/* =========================
Approve leave (Admin)
========================= */
/// Swagger doc for approve_leave endpoint
#[utoipa::path(
    put,
    path = "/api/leave/{leave_id}/approve",
    params(
        ("leave_id" = String, Path, description = "ID of the leave request to approve")
    ),
    request_body(content = DecisionBody, content_type = "application/json"),
    responses(
        (status = 200, description = "Leave approved successfully", body = Object, example = json!({
            "message": "Leave request approved."
        })),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Leave request not found"),
        (status = 409, description = "Request already decided")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn approve_leave(
    auth: AuthUser,
    ledger: web::Data<LeaveLedger>,
    path: web::Path<String>,
    body: Option<web::Json<DecisionBody>>,
) -> actix_web::Result<impl Responder> {
    decide_leave(auth, ledger, path, body, LeaveStatus::Approved)
}

/* =========================
Reject leave (Admin)
========================= */
/// Swagger doc for reject_leave endpoint
#[utoipa::path(
    put,
    path = "/api/leave/{leave_id}/reject",
    params(
        ("leave_id" = String, Path, description = "ID of the leave request to reject")
    ),
    request_body(content = DecisionBody, content_type = "application/json"),
    responses(
        (status = 200, description = "Leave rejected successfully", body = Object, example = json!({
            "message": "Leave request rejected."
        })),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Leave request not found"),
        (status = 409, description = "Request already decided")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn reject_leave(
    auth: AuthUser,
    ledger: web::Data<LeaveLedger>,
    path: web::Path<String>,
    body: Option<web::Json<DecisionBody>>,
) -> actix_web::Result<impl Responder> {
    decide_leave(auth, ledger, path, body, LeaveStatus::Rejected)
}

fn decide_leave(
    auth: AuthUser,
    ledger: web::Data<LeaveLedger>,
    path: web::Path<String>,
    body: Option<web::Json<DecisionBody>>,
    new_status: LeaveStatus,
) -> actix_web::Result<HttpResponse> {
    let leave_id = path.into_inner();
    let remarks = body.and_then(|b| b.into_inner().remarks);

    let outcome =
        ledger.update_leave_request_status(&auth.actor(), &leave_id, new_status, remarks)?;

    Ok(HttpResponse::Ok().json(json!({
        "message": outcome.message
    })))
}

/// Swagger doc for leave_types endpoint
#[utoipa::path(
    get,
    path = "/api/leave/types",
    responses(
        (status = 200, description = "Static leave type catalog", body = [LeaveType]),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn leave_types(_auth: AuthUser) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(leave_type::catalog()))
}
