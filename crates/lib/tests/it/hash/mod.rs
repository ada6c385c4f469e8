//! Engine integration tests
//!
//! Tests are organized by operation. Fixtures live in the crate-level helpers.

mod combine;
mod format;
mod insert_remove;
mod nest;
mod reshape;
