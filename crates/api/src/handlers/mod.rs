pub mod auth;
pub mod client;
pub mod dashboard;
pub mod order;
pub mod project;
