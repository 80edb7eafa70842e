//! Library half of the mailmark CLI, shared with integration tests.

pub mod error;
pub mod views;
