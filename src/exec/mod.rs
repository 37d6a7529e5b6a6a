//! External process execution

pub mod git;
pub mod subprocess;
