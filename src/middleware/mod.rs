//! Request guards for the gateway.
//!
//! Two tiers, applied in order:
//!
//! 1. [`gate`]: the coarse route gate — a session-cookie existence check on
//!    protected path prefixes. Pure routing, no backend call, no validation
//!    of the cookie's contents.
//! 2. [`section`]: role-scoped section guards — a backend-verified identity
//!    fetch per navigation, followed by the section's role check. Any
//!    backend rejection counts as "not authenticated" and supersedes the
//!    gate's optimistic pass.
//!
//! Both tiers answer failures with redirects (`/login`, `/unauthorized`),
//! never error responses: guard outcomes are navigation decisions.

pub mod gate;
pub mod section;
