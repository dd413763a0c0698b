//! Common utilities for integration tests

#![allow(dead_code)]

pub mod mat_writer;
pub mod test_helpers;

// Re-export commonly used items
pub use mat_writer::{write_mat, MatArray, MatClass};
pub use test_helpers::{file_names, sod_fields, write_sod_mat};
