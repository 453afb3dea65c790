use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaveRequest {
    #[schema(example = "lr1")]
    pub id: String,

    /// Internal id of the requesting user, captured at submission.
    #[schema(example = "1")]
    pub employee_id: String,

    /// Snapshot of the requester's name at submit time; intentionally not
    /// kept in sync with later roster changes.
    #[schema(example = "Alice Wonderland")]
    pub employee_name: String,

    #[schema(example = "lt1")]
    pub leave_type_id: String,

    /// Snapshot of the catalog name at submit time.
    #[schema(example = "Casual Leave")]
    pub leave_type_name: String,

    /// Inclusive day range; `end_date >= start_date` is enforced at the
    /// form boundary, not here.
    #[schema(example = "2026-01-01", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2026-01-02", format = "date", value_type = String)]
    pub end_date: NaiveDate,

    #[schema(example = "Family event")]
    pub reason: String,

    #[schema(example = "Pending")]
    pub status: LeaveStatus,

    #[schema(example = "2026-01-01T00:00:00Z", format = "date-time", value_type = String)]
    pub requested_at: DateTime<Utc>,

    /// Set when the request is decided.
    #[schema(format = "date-time", value_type = Option<String>, nullable = true)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Id of the admin who decided the request.
    #[schema(example = "admin001", nullable = true)]
    pub approved_by: Option<String>,

    #[schema(example = "Enjoy", nullable = true)]
    pub admin_remarks: Option<String>,
}

impl LeaveRequest {
    /// Inclusive length of the leave in days.
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn duration_is_inclusive() {
        let req = LeaveRequest {
            id: "lr".into(),
            employee_id: "1".into(),
            employee_name: "Alice".into(),
            leave_type_id: "lt1".into(),
            leave_type_name: "Casual Leave".into(),
            start_date: date(2026, 3, 2),
            end_date: date(2026, 3, 3),
            reason: "test".into(),
            status: LeaveStatus::Pending,
            requested_at: Utc::now(),
            updated_at: None,
            approved_by: None,
            admin_remarks: None,
        };
        assert_eq!(req.duration_days(), 2);

        let one_day = LeaveRequest {
            end_date: date(2026, 3, 2),
            ..req
        };
        assert_eq!(one_day.duration_days(), 1);
    }

    #[test]
    fn status_round_trips_through_json() {
        let status: LeaveStatus = serde_json::from_str("\"Approved\"").unwrap();
        assert_eq!(status, LeaveStatus::Approved);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"Approved\"");
        assert_eq!(status.to_string(), "Approved");
    }
}
