pub mod account;
pub mod employee;
pub mod leave;
pub mod notification;
