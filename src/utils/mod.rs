//! Shared helpers

pub mod logger;
pub mod paths;
pub mod terminal;
pub mod tools;
