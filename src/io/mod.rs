pub mod reporting;
pub mod requests;
