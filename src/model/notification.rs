use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NotificationKind {
    NewLeaveRequest,
    LeaveStatusUpdate,
    SystemMessage,
}

/// A pre-rendered message addressed to one user. Created by the ledger as a
/// side effect of request submission and status transitions; only the `read`
/// flag ever mutates afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Notification {
    #[schema(example = "notif1")]
    pub id: String,

    /// Recipient user id.
    #[schema(example = "1")]
    pub user_id: String,

    #[schema(example = "Your Casual Leave request (2 day(s), Mar 02 - Mar 03) has been Approved.")]
    pub message: String,

    #[schema(example = "2026-01-01T00:00:00Z", format = "date-time", value_type = String)]
    pub date: DateTime<Utc>,

    pub read: bool,

    /// Navigation target for the client, when one applies.
    #[schema(example = "/dashboard", nullable = true)]
    pub link: Option<String>,

    pub kind: NotificationKind,

    /// Back-reference to the leave request this message is about. Lookup
    /// only, not ownership.
    #[schema(example = "lr1", nullable = true)]
    pub related_request_id: Option<String>,
}
