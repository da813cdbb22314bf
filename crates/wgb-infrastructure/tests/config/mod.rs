//! Configuration Tests
//!
//! Tests for configuration loading, validation, and management.

mod env_test;
