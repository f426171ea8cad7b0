pub mod forecast;
pub mod policy;
