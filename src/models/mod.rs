//! Row types, response DTOs and validated query parameters for the analytics tables.

pub mod device_share;
pub mod kpi;
pub mod range;
pub mod revenue;
pub mod signup;
pub mod traffic;
