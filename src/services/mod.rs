//! Services
//!
//! Response formatting and mode resolution.

pub mod modes;
pub mod responses;
