//! Fixed mock dataset used on first run and whenever stored state fails to
//! parse. Dates are anchored to the load instant so the sample data always
//! looks recent.

use chrono::{DateTime, Duration, Utc};

use crate::auth::password::hash_password;
use crate::model::leave_request::{LeaveRequest, LeaveStatus};
use crate::model::leave_type::{
    ANNUAL_LEAVE_ID, CASUAL_LEAVE_ID, SICK_LEAVE_ID, UNPAID_LEAVE_ID, name_for,
};
use crate::model::notification::{Notification, NotificationKind};
use crate::model::user::{LeaveBalance, User};

pub const SEED_ADMIN_ID: &str = "admin001";

fn balance(leave_type_id: &str, balance: i32, total_allocated: i32) -> LeaveBalance {
    LeaveBalance {
        leave_type_id: leave_type_id.to_string(),
        leave_type_name: name_for(leave_type_id).unwrap_or_default().to_string(),
        balance,
        total_allocated,
    }
}

/// Fresh full-allocation balances for a newly created employee.
pub fn default_leave_balances() -> Vec<LeaveBalance> {
    vec![
        balance(CASUAL_LEAVE_ID, 12, 12),
        balance(SICK_LEAVE_ID, 10, 10),
        balance(ANNUAL_LEAVE_ID, 20, 20),
        balance(UNPAID_LEAVE_ID, 0, 5),
    ]
}

pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: "1".into(),
            employee_id: "EMP001".into(),
            name: "Alice Wonderland".into(),
            email: Some("alice@example.com".into()),
            is_admin: false,
            designation: Some("Software Engineer".into()),
            profile_photo_url: Some("https://placehold.co/100x100.png?text=AW".into()),
            password_hash: Some(hash_password("password1")),
            leave_balances: vec![
                balance(CASUAL_LEAVE_ID, 12, 12),
                balance(SICK_LEAVE_ID, 7, 10),
                balance(ANNUAL_LEAVE_ID, 15, 20),
                balance(UNPAID_LEAVE_ID, 0, 5),
            ],
        },
        User {
            id: "2".into(),
            employee_id: "EMP002".into(),
            name: "Bob The Builder".into(),
            email: Some("bob@example.com".into()),
            is_admin: false,
            designation: Some("Project Manager".into()),
            profile_photo_url: Some("https://placehold.co/100x100.png?text=BB".into()),
            password_hash: Some(hash_password("password2")),
            leave_balances: vec![
                balance(CASUAL_LEAVE_ID, 12, 12),
                balance(SICK_LEAVE_ID, 9, 10),
                balance(ANNUAL_LEAVE_ID, 12, 20),
                balance(UNPAID_LEAVE_ID, 2, 5),
            ],
        },
        User {
            id: SEED_ADMIN_ID.into(),
            employee_id: "ADMIN001".into(),
            name: "Admin User".into(),
            email: Some("admin@example.com".into()),
            is_admin: true,
            designation: Some("System Administrator".into()),
            profile_photo_url: Some("https://placehold.co/100x100.png?text=AU".into()),
            password_hash: Some(hash_password("adminpassword123")),
            leave_balances: vec![
                balance(CASUAL_LEAVE_ID, 12, 12),
                balance(SICK_LEAVE_ID, 10, 10),
                balance(ANNUAL_LEAVE_ID, 20, 20),
                balance(UNPAID_LEAVE_ID, 0, 5),
            ],
        },
    ]
}

pub fn seed_leave_requests(now: DateTime<Utc>) -> Vec<LeaveRequest> {
    let day = |offset: i64| (now + Duration::days(offset)).date_naive();

    vec![
        LeaveRequest {
            id: "lr1".into(),
            employee_id: "1".into(),
            employee_name: "Alice Wonderland".into(),
            leave_type_id: CASUAL_LEAVE_ID.into(),
            leave_type_name: "Casual Leave".into(),
            start_date: day(-10),
            end_date: day(-9),
            reason: "Family event".into(),
            status: LeaveStatus::Approved,
            requested_at: now - Duration::days(15),
            updated_at: Some(now - Duration::days(14)),
            approved_by: Some(SEED_ADMIN_ID.into()),
            admin_remarks: None,
        },
        LeaveRequest {
            id: "lr2".into(),
            employee_id: "2".into(),
            employee_name: "Bob The Builder".into(),
            leave_type_id: SICK_LEAVE_ID.into(),
            leave_type_name: "Sick Leave".into(),
            start_date: day(-5),
            end_date: day(-5),
            reason: "Feeling unwell".into(),
            status: LeaveStatus::Approved,
            requested_at: now - Duration::days(6),
            updated_at: Some(now - Duration::days(5)),
            approved_by: Some(SEED_ADMIN_ID.into()),
            admin_remarks: None,
        },
        LeaveRequest {
            id: "lr3".into(),
            employee_id: "1".into(),
            employee_name: "Alice Wonderland".into(),
            leave_type_id: CASUAL_LEAVE_ID.into(),
            leave_type_name: "Casual Leave".into(),
            start_date: day(2),
            end_date: day(3),
            reason: "Personal appointment for a couple of days.".into(),
            status: LeaveStatus::Pending,
            requested_at: now - Duration::days(1),
            updated_at: None,
            approved_by: None,
            admin_remarks: None,
        },
        LeaveRequest {
            id: "lr4".into(),
            employee_id: "2".into(),
            employee_name: "Bob The Builder".into(),
            leave_type_id: ANNUAL_LEAVE_ID.into(),
            leave_type_name: "Annual Leave".into(),
            start_date: day(5),
            end_date: day(7),
            reason: "Vacation planning for a short trip.".into(),
            status: LeaveStatus::Pending,
            requested_at: now,
            updated_at: None,
            approved_by: None,
            admin_remarks: None,
        },
    ]
}

pub fn seed_notifications(now: DateTime<Utc>) -> Vec<Notification> {
    vec![
        Notification {
            id: "notif1".into(),
            user_id: "1".into(),
            message: "Your leave request for Casual Leave (2 days) has been Approved.".into(),
            date: now - Duration::days(1),
            read: false,
            link: Some("/dashboard".into()),
            kind: NotificationKind::LeaveStatusUpdate,
            related_request_id: Some("lr1".into()),
        },
        Notification {
            id: "notif2".into(),
            user_id: SEED_ADMIN_ID.into(),
            message: "System maintenance scheduled for tomorrow at 2 AM.".into(),
            date: now - Duration::days(2),
            read: true,
            link: None,
            kind: NotificationKind::SystemMessage,
            related_request_id: None,
        },
        Notification {
            id: "notif3".into(),
            user_id: "1".into(),
            message: "Your Sick Leave request has been Rejected due to insufficient documentation."
                .into(),
            date: now - Duration::days(3),
            read: false,
            link: Some("/dashboard".into()),
            kind: NotificationKind::LeaveStatusUpdate,
            related_request_id: Some("lr-rejected-example".into()),
        },
        Notification {
            id: "notif4".into(),
            user_id: SEED_ADMIN_ID.into(),
            message: "New leave request from Alice Wonderland for Casual Leave.".into(),
            date: now - Duration::days(1),
            read: false,
            link: Some("/admin/manage-leave".into()),
            kind: NotificationKind::NewLeaveRequest,
            related_request_id: Some("lr3".into()),
        },
        Notification {
            id: "notif5".into(),
            user_id: SEED_ADMIN_ID.into(),
            message: "New leave request from Bob The Builder for Annual Leave.".into(),
            date: now,
            read: true,
            link: Some("/admin/manage-leave".into()),
            kind: NotificationKind::NewLeaveRequest,
            related_request_id: Some("lr4".into()),
        },
    ]
}
