pub mod emsr;
pub mod quantile;
