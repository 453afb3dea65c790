use crate::api::employee::EmployeeListResponse;
use crate::api::leave::{DecisionBody, LeaveFilter, LeaveListResponse, SubmitLeave};
use crate::api::notification::NotificationListResponse;
use crate::auth::handlers::{LoginRequest, LoginResponse};
use crate::auth::service::NewEmployee;
use crate::model::leave_request::{LeaveRequest, LeaveStatus};
use crate::model::leave_type::LeaveType;
use crate::model::notification::{Notification, NotificationKind};
use crate::model::user::{LeaveBalance, User};
use utoipa::Modify;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{OpenApi, openapi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LeavePilot API",
        version = "1.0.0",
        description = r#"
## LeavePilot — Casual Leave Management System

This API powers a **Casual Leave Management System (CLMS)** for internal use.

### 🔹 Key Features
- **Leave Management**
  - Submit leave requests, view balances and history
  - Approve/reject requests with admin remarks
- **Notifications**
  - Admins are notified of new requests; employees of decisions
- **Employee Management**
  - Admins create employees and view the roster

### 🔐 Security
Protected endpoints use **JWT Bearer authentication**. Approving, rejecting
and employee management require an **admin** account.

### 📦 Response Format
- JSON-based RESTful responses
- Human-readable `message` field on every failure

---
Built with **Rust**, **Actix Web**, and **Utoipa**.
"#,
    ),
    paths(
        crate::auth::handlers::login,

        crate::api::account::me,

        crate::api::leave::submit_leave,
        crate::api::leave::leave_list,
        crate::api::leave::my_leave_list,
        crate::api::leave::approve_leave,
        crate::api::leave::reject_leave,
        crate::api::leave::leave_types,

        crate::api::notification::notification_list,
        crate::api::notification::unread_count,
        crate::api::notification::mark_read,
        crate::api::notification::mark_all_read,

        crate::api::employee::create_employee,
        crate::api::employee::list_employees
    ),
    components(
        schemas(
            LoginRequest,
            LoginResponse,
            SubmitLeave,
            DecisionBody,
            LeaveFilter,
            LeaveListResponse,
            LeaveRequest,
            LeaveStatus,
            LeaveType,
            Notification,
            NotificationKind,
            NotificationListResponse,
            NewEmployee,
            EmployeeListResponse,
            User,
            LeaveBalance
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Authentication APIs"),
        (name = "Account", description = "Session account APIs"),
        (name = "Leave", description = "Leave management APIs"),
        (name = "Notification", description = "Notification APIs"),
        (name = "Employee", description = "Employee management APIs"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
