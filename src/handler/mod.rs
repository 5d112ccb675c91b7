//! Request handler module
//!
//! Route dispatch plus the home, list and lookup handlers. Every handler is
//! a pure function of the request and the immutable catalog.

pub mod catalog;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
