pub mod auth;
pub mod batch;
pub mod dispatch;
pub mod master;
pub mod order;
pub mod organization;
pub mod shared;
