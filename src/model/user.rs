use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Per-user remaining quota for one leave type. The name is a denormalized
/// copy of the catalog entry, captured when the balance row was created.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaveBalance {
    #[schema(example = "lt1")]
    pub leave_type_id: String,
    #[schema(example = "Casual Leave")]
    pub leave_type_name: String,
    #[schema(example = 12)]
    pub balance: i32,
    #[schema(example = 12)]
    pub total_allocated: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[schema(example = "1")]
    pub id: String,

    /// Human-facing login key, unique across the roster.
    #[schema(example = "EMP001")]
    pub employee_id: String,

    #[schema(example = "Alice Wonderland")]
    pub name: String,

    #[schema(example = "alice@example.com", nullable = true)]
    pub email: Option<String>,

    #[schema(example = false)]
    pub is_admin: bool,

    #[schema(example = "Software Engineer", nullable = true)]
    pub designation: Option<String>,

    #[schema(nullable = true)]
    pub profile_photo_url: Option<String>,

    /// Argon2 hash. Present only in the authoritative roster; stripped
    /// before the user is exposed as a session view.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub password_hash: Option<String>,

    pub leave_balances: Vec<LeaveBalance>,
}

impl User {
    /// Copy of this user safe to hand to callers: the password hash never
    /// leaves the roster.
    pub fn session_view(&self) -> User {
        User {
            password_hash: None,
            ..self.clone()
        }
    }

}

/// The acting identity supplied to ledger mutations. Built from the
/// authenticated session, never trusted from a request body.
#[derive(Debug, Clone)]
pub struct Actor {
    pub id: String,
    pub name: String,
    pub is_admin: bool,
}
