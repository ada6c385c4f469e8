//! Value model integration tests
//!
//! Keys, containers, objects and JSON interop.

mod containers;
