//! # TutorLink Web Gateway
//!
//! The server-side half of the TutorLink tutoring marketplace front-end.
//! Students browse tutors, book sessions, and leave reviews; tutors and
//! admins manage profiles, availability, bookings, and categories. All
//! business logic (pricing rules, availability conflicts, booking state,
//! authentication, persistence) lives in the TutorLink backend service and
//! is consumed over HTTP — this crate is the presentation and routing
//! boundary in front of it.
//!
//! ## What this service owns
//!
//! - **Backend client** ([`client`]): a thin typed wrapper around the
//!   backend API that forwards session cookies, speaks the `{ "data": T }`
//!   response envelope, and collapses upstream failures into one error kind.
//! - **Coarse route gate** ([`middleware::gate`]): a cookie-existence check
//!   on protected path prefixes. Not authorization — just a fast redirect
//!   to `/login` for visitors with no session at all.
//! - **Section guards** ([`middleware::section`]): per-section middleware
//!   that verifies the session against the backend identity endpoint and
//!   enforces the section's required role, redirecting on failure.
//! - **API proxy** ([`modules::proxy`]): a transparent `/api/*` forward so
//!   the browser client can reach the backend same-origin.
//! - **View models** ([`modules::tutors`], [`modules::bookings`],
//!   [`modules::admin`]): read-side composition for pages — directory
//!   filtering, availability grouping, booking price previews.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── client.rs         # Backend HTTP client + response envelope
//! ├── config/           # Environment-driven configuration
//! ├── middleware/       # Coarse gate and role-scoped section guards
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Identity model and session resolution
//! │   ├── proxy/       # /api/* passthrough
//! │   ├── tutors/      # Directory, profiles, availability grouping
//! │   ├── bookings/    # Booking lists and price preview
//! │   └── admin/       # Category and user management views
//! ├── logging.rs        # Tracing setup and request logging
//! ├── metrics.rs        # Prometheus metrics
//! ├── router.rs         # Route composition and guard wiring
//! └── state.rs          # Shared application state
//! ```
//!
//! Each feature module follows a consistent structure: `controller.rs` for
//! HTTP handlers, `service.rs` for composition logic, `model.rs` for the
//! consumed backend shapes, `router.rs` for the axum router.
//!
//! ## Sections and roles
//!
//! | Section | Required role | Gate |
//! |---------|---------------|------|
//! | `/dashboard/*` | `STUDENT` | cookie presence, then backend-verified |
//! | `/tutor/*` | `TUTOR` | cookie presence, then backend-verified |
//! | `/admin/*` | `ADMIN` | cookie presence, then backend-verified |
//! | `/views/*`, `/api/*` | none | allow-by-default |
//!
//! The two tiers are deliberate: the gate gives unauthenticated visitors a
//! fast redirect without a backend round-trip, while the section guards do
//! the real identity check (fresh per navigation, never cached) and own the
//! role decision. The authentication check always resolves before the role
//! check; both failures are routing decisions, never error pages.
//!
//! ## Environment variables
//!
//! ```bash
//! BACKEND_BASE_URL=http://localhost:8000                  # server-side calls
//! PUBLIC_BACKEND_BASE_URL=https://api.tutorlink.example   # exposed to the browser
//! SESSION_COOKIE_NAME=better-auth.session_token
//! PORT=3000
//! METRICS_PORT=9100
//! ```

pub mod client;
pub mod config;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;
