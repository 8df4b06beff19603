//! Test modules for the thread-safe wrapper
//!
//! - `wrapper` - idempotence, delegation, formatting and poisoning
//! - `stress` - many threads pushing and popping through one handle
