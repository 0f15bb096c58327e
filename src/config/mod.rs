//! Configuration for the gateway.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables with sensible development defaults.
//!
//! - [`backend`]: Backend base URLs and outbound call timeouts
//! - [`routes`]: Session cookie name and the gate's path-prefix matcher lists

pub mod backend;
pub mod routes;
