use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Static reference data. The catalog is fixed; leave types are not
/// user-editable.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaveType {
    #[schema(example = "lt1")]
    pub id: String,
    #[schema(example = "Casual Leave")]
    pub name: String,
}

pub const CASUAL_LEAVE_ID: &str = "lt1";
pub const SICK_LEAVE_ID: &str = "lt2";
pub const ANNUAL_LEAVE_ID: &str = "lt3";
pub const UNPAID_LEAVE_ID: &str = "lt4";

pub fn catalog() -> Vec<LeaveType> {
    [
        (CASUAL_LEAVE_ID, "Casual Leave"),
        (SICK_LEAVE_ID, "Sick Leave"),
        (ANNUAL_LEAVE_ID, "Annual Leave"),
        (UNPAID_LEAVE_ID, "Unpaid Leave"),
    ]
    .into_iter()
    .map(|(id, name)| LeaveType {
        id: id.to_string(),
        name: name.to_string(),
    })
    .collect()
}

/// Display name for a catalog id, or `None` for an unknown id.
pub fn name_for(leave_type_id: &str) -> Option<&'static str> {
    match leave_type_id {
        CASUAL_LEAVE_ID => Some("Casual Leave"),
        SICK_LEAVE_ID => Some("Sick Leave"),
        ANNUAL_LEAVE_ID => Some("Annual Leave"),
        UNPAID_LEAVE_ID => Some("Unpaid Leave"),
        _ => None,
    }
}
