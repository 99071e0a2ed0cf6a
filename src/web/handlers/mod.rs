//! Route handlers, one module per page.

pub mod dashboard;
pub mod home;
pub mod live;
pub mod task;
