//! Path parsing integration tests
