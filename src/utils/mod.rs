//! Shared utilities for the gateway.
//!
//! - [`errors`]: Application error type and HTTP response mapping

pub mod errors;
