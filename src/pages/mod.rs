pub mod client_detail;
pub mod dashboard;
pub mod not_found;
