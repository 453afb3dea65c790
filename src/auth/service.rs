use std::sync::{Arc, Mutex, MutexGuard};

use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::password::{hash_password, verify_password};
use crate::error::LedgerError;
use crate::model::user::User;
use crate::store::{SESSION_USERS_KEY, StateStore, load_or_seed, seed};

/// Admin-supplied fields for a new roster entry.
#[derive(Debug, Deserialize, ToSchema)]
pub struct NewEmployee {
    #[schema(example = "EMP003")]
    pub employee_id: String,
    #[schema(example = "Charlie Chaplin")]
    pub name: String,
    #[schema(example = "charlie@example.com", nullable = true)]
    pub email: Option<String>,
    pub password: String,
    #[schema(example = "QA Engineer", nullable = true)]
    pub designation: Option<String>,
    #[schema(nullable = true)]
    pub profile_photo_url: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

/// Owner of the user roster. The ledger consumes it for admin fan-out; the
/// HTTP layer consumes it for login and employee management. It never
/// creates leave records itself.
pub struct AuthService {
    store: Arc<dyn StateStore>,
    users: Mutex<Vec<User>>,
}

impl AuthService {
    /// Loads the roster, seeding the mock users (passwords hashed at seed
    /// time) when the store is empty or corrupt.
    pub fn open(store: Arc<dyn StateStore>) -> anyhow::Result<Self> {
        let users = load_or_seed(store.as_ref(), SESSION_USERS_KEY, seed::seed_users)?;
        info!(users = users.len(), "User roster loaded");
        Ok(Self {
            store,
            users: Mutex::new(users),
        })
    }

    fn roster_guard(&self) -> MutexGuard<'_, Vec<User>> {
        self.users.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Verifies credentials and returns the session view (hash stripped).
    /// Mock users without a stored hash are accepted with any password, but
    /// admin accounts always require one.
    pub fn authenticate(&self, employee_id: &str, password: &str) -> Option<User> {
        let users = self.roster_guard();
        let user = users.iter().find(|u| u.employee_id == employee_id)?;
        let password_matches = match &user.password_hash {
            Some(hash) => verify_password(password, hash),
            None => !user.is_admin,
        };
        password_matches.then(|| user.session_view())
    }

    pub fn find_by_id(&self, user_id: &str) -> Option<User> {
        self.roster_guard()
            .iter()
            .find(|u| u.id == user_id)
            .map(User::session_view)
    }

    /// All known users as session views, for admin fan-out and the admin
    /// employee list.
    pub fn roster(&self) -> Vec<User> {
        self.roster_guard().iter().map(User::session_view).collect()
    }

    /// Adds an employee to the roster. `employee_id` must be unique.
    pub fn add_user(&self, new_employee: NewEmployee) -> Result<User, LedgerError> {
        let mut users = self.roster_guard();
        if users
            .iter()
            .any(|u| u.employee_id == new_employee.employee_id)
        {
            return Err(LedgerError::DuplicateEmployeeId);
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            employee_id: new_employee.employee_id,
            name: new_employee.name,
            email: new_employee.email,
            is_admin: new_employee.is_admin,
            designation: new_employee.designation,
            profile_photo_url: new_employee.profile_photo_url,
            password_hash: Some(hash_password(&new_employee.password)),
            leave_balances: seed::default_leave_balances(),
        };
        users.push(user.clone());

        let raw = serde_json::to_string(&*users).map_err(anyhow::Error::from)?;
        self.store.write(SESSION_USERS_KEY, &raw)?;

        info!(employee_id = %user.employee_id, "Employee added to roster");
        Ok(user.session_view())
    }
}
