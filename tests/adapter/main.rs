//! Adapter tests
//!
//! Tests for I/O adapter implementations:
//! - Git working tree provider (clone of `main` into a temporary directory)
