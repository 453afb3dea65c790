use std::sync::{Arc, Mutex, MutexGuard};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::auth::service::AuthService;
use crate::error::LedgerError;
use crate::model::leave_request::{LeaveRequest, LeaveStatus};
use crate::model::notification::{Notification, NotificationKind};
use crate::model::user::Actor;
use crate::store::{Clock, LEAVE_REQUESTS_KEY, NOTIFICATIONS_KEY, StateStore, load_or_seed, seed};

/// Caller-supplied fields of a new leave request. Identity fields are
/// stamped from the acting user, never taken from the draft.
#[derive(Debug, Clone)]
pub struct LeaveDraft {
    pub leave_type_id: String,
    pub leave_type_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

#[derive(Debug)]
pub struct SubmitOutcome {
    pub request_id: String,
    pub message: String,
}

#[derive(Debug)]
pub struct UpdateOutcome {
    pub message: String,
}

struct Collections {
    requests: Vec<LeaveRequest>,
    notifications: Vec<Notification>,
}

/// Durable record store for leave requests and notifications.
///
/// Owns both collections privately behind a mutex; every mutation persists
/// the full collection through the injected store (replace, not delta).
/// Records are never physically deleted. The roster needed for admin
/// notification fan-out comes from the injected [`AuthService`].
pub struct LeaveLedger {
    store: Arc<dyn StateStore>,
    clock: Arc<dyn Clock>,
    auth: Arc<AuthService>,
    inner: Mutex<Collections>,
}

impl LeaveLedger {
    /// Loads both collections, seeding from the mock dataset when the store
    /// is empty or its content fails to parse. Runs once at startup.
    pub fn open(
        store: Arc<dyn StateStore>,
        clock: Arc<dyn Clock>,
        auth: Arc<AuthService>,
    ) -> anyhow::Result<Self> {
        let now = clock.now();
        let requests = load_or_seed(store.as_ref(), LEAVE_REQUESTS_KEY, || {
            seed::seed_leave_requests(now)
        })?;
        let notifications = load_or_seed(store.as_ref(), NOTIFICATIONS_KEY, || {
            seed::seed_notifications(now)
        })?;
        info!(
            requests = requests.len(),
            notifications = notifications.len(),
            "Leave ledger loaded"
        );
        Ok(Self {
            store,
            clock,
            auth,
            inner: Mutex::new(Collections {
                requests,
                notifications,
            }),
        })
    }

    fn collections(&self) -> MutexGuard<'_, Collections> {
        // A poisoned lock only means a handler panicked mid-operation; the
        // collections themselves are still usable.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn persist<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), LedgerError> {
        let raw = serde_json::to_string(items).map_err(anyhow::Error::from)?;
        self.store.write(key, &raw)?;
        Ok(())
    }

    /// Appends a new Pending request for the acting user and fans out one
    /// unread notification to every admin in the roster.
    ///
    /// Date-range and balance validation belong to the form boundary; this
    /// layer records whatever the caller validated.
    pub fn submit_leave_request(
        &self,
        actor: Option<&Actor>,
        draft: LeaveDraft,
    ) -> Result<SubmitOutcome, LedgerError> {
        let actor = actor.ok_or(LedgerError::Unauthenticated)?;
        let now = self.clock.now();

        let request = LeaveRequest {
            id: Uuid::new_v4().to_string(),
            employee_id: actor.id.clone(),
            employee_name: actor.name.clone(),
            leave_type_id: draft.leave_type_id,
            leave_type_name: draft.leave_type_name,
            start_date: draft.start_date,
            end_date: draft.end_date,
            reason: draft.reason,
            status: LeaveStatus::Pending,
            requested_at: now,
            updated_at: None,
            approved_by: None,
            admin_remarks: None,
        };
        let request_id = request.id.clone();

        let admin_notifications: Vec<Notification> = self
            .auth
            .roster()
            .into_iter()
            .filter(|u| u.is_admin)
            .map(|admin| Notification {
                id: Uuid::new_v4().to_string(),
                user_id: admin.id,
                message: format!(
                    "New leave request from {} for {}.",
                    actor.name, request.leave_type_name
                ),
                date: now,
                read: false,
                link: Some("/admin/manage-leave".into()),
                kind: NotificationKind::NewLeaveRequest,
                related_request_id: Some(request_id.clone()),
            })
            .collect();

        let mut inner = self.collections();
        inner.requests.push(request);
        inner.notifications.extend(admin_notifications);
        self.persist(LEAVE_REQUESTS_KEY, &inner.requests)?;
        self.persist(NOTIFICATIONS_KEY, &inner.notifications)?;

        info!(request_id = %request_id, employee = %actor.name, "Leave request submitted");
        Ok(SubmitOutcome {
            request_id,
            message: "Leave request submitted successfully.".into(),
        })
    }

    /// Decides a pending request and notifies the original requester.
    ///
    /// Approved and Rejected are terminal: re-deciding an already decided
    /// request fails with `InvalidTransition` instead of silently
    /// overwriting the earlier decision.
    pub fn update_leave_request_status(
        &self,
        actor: &Actor,
        request_id: &str,
        new_status: LeaveStatus,
        admin_remarks: Option<String>,
    ) -> Result<UpdateOutcome, LedgerError> {
        if !actor.is_admin {
            return Err(LedgerError::Unauthorized);
        }

        let now = self.clock.now();
        let mut inner = self.collections();

        let request = inner
            .requests
            .iter_mut()
            .find(|r| r.id == request_id)
            .ok_or(LedgerError::NotFound)?;
        if request.status != LeaveStatus::Pending {
            return Err(LedgerError::InvalidTransition(request.status));
        }

        request.status = new_status;
        request.updated_at = Some(now);
        request.approved_by = Some(actor.id.clone());
        request.admin_remarks = admin_remarks.clone();

        let mut message = format!(
            "Your {} request ({} day(s), {} - {}) has been {}.",
            request.leave_type_name,
            request.duration_days(),
            request.start_date.format("%b %d"),
            request.end_date.format("%b %d"),
            new_status,
        );
        if let Some(remarks) = &admin_remarks {
            message.push_str(&format!(" Admin remarks: {remarks}"));
        }

        let notification = Notification {
            id: Uuid::new_v4().to_string(),
            user_id: request.employee_id.clone(),
            message,
            date: now,
            read: false,
            link: Some("/dashboard".into()),
            kind: NotificationKind::LeaveStatusUpdate,
            related_request_id: Some(request_id.to_string()),
        };
        inner.notifications.push(notification);

        self.persist(LEAVE_REQUESTS_KEY, &inner.requests)?;
        self.persist(NOTIFICATIONS_KEY, &inner.notifications)?;

        info!(request_id, status = %new_status, admin = %actor.id, "Leave request decided");
        Ok(UpdateOutcome {
            message: format!("Leave request {}.", new_status.to_string().to_lowercase()),
        })
    }

    /// Requests of one employee, newest first.
    pub fn leave_requests_for_user(&self, employee_id: &str) -> Vec<LeaveRequest> {
        let inner = self.collections();
        let mut requests: Vec<LeaveRequest> = inner
            .requests
            .iter()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect();
        requests.sort_by(|a, b| b.requested_at.cmp(&a.requested_at));
        requests
    }

    /// The entire collection, newest first. Callers filter by status for
    /// pending/processed views.
    pub fn leave_requests_for_admin(&self) -> Vec<LeaveRequest> {
        let inner = self.collections();
        let mut requests = inner.requests.clone();
        requests.sort_by(|a, b| b.requested_at.cmp(&a.requested_at));
        requests
    }

    /// Notifications addressed to one user, newest first.
    pub fn notifications_for_user(&self, user_id: &str) -> Vec<Notification> {
        let inner = self.collections();
        let mut notifications: Vec<Notification> = inner
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        notifications.sort_by(|a, b| b.date.cmp(&a.date));
        notifications
    }

    pub fn unread_notification_count(&self, user_id: &str) -> usize {
        self.collections()
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id && !n.read)
            .count()
    }

    /// Flips a single notification to read. No-op, including no persistence
    /// write, when the id is unknown or the notification was already read.
    pub fn mark_notification_as_read(&self, notification_id: &str) -> Result<(), LedgerError> {
        let mut inner = self.collections();
        let changed = match inner
            .notifications
            .iter_mut()
            .find(|n| n.id == notification_id)
        {
            Some(n) if !n.read => {
                n.read = true;
                true
            }
            _ => false,
        };
        if changed {
            self.persist(NOTIFICATIONS_KEY, &inner.notifications)?;
        }
        Ok(())
    }

    /// Marks every notification of one user as read. Always persists; the
    /// write path does not distinguish "no change" from "changed".
    pub fn mark_all_notifications_as_read(&self, user_id: &str) -> Result<(), LedgerError> {
        let mut inner = self.collections();
        for n in inner
            .notifications
            .iter_mut()
            .filter(|n| n.user_id == user_id)
        {
            n.read = true;
        }
        self.persist(NOTIFICATIONS_KEY, &inner.notifications)
    }
}
