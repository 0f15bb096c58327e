use axum::{Router, middleware};

use crate::logging::logging_middleware;
use crate::metrics::metrics_middleware;
use crate::middleware::gate::session_gate;
use crate::middleware::section::{require_admin, require_student, require_tutor};
use crate::modules::auth::router::init_session_router;
use crate::modules::bookings::router::{init_student_bookings_router, init_tutor_bookings_router};
use crate::modules::proxy::router::init_proxy_router;
use crate::modules::tutors::router::{init_directory_router, init_tutor_section_router};
use crate::modules::admin::router::init_admin_router;
use crate::state::AppState;

/// Compose the gateway.
///
/// Section routers get their role guard as a route layer; the coarse gate
/// and the logging/metrics middleware wrap the whole tree. The `/api`
/// passthrough and the public directory views sit outside every guard —
/// the gate's matcher lists leave them allow-by-default, and the backend
/// does its own auth on proxied calls.
pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(init_directory_router())
        .nest(
            "/dashboard",
            init_session_router()
                .merge(init_student_bookings_router())
                .route_layer(middleware::from_fn_with_state(
                    state.clone(),
                    require_student,
                )),
        )
        .nest(
            "/tutor",
            init_tutor_section_router()
                .merge(init_tutor_bookings_router())
                .route_layer(middleware::from_fn_with_state(state.clone(), require_tutor)),
        )
        .nest(
            "/admin",
            init_admin_router()
                .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
        )
        .nest("/api", init_proxy_router())
        .with_state(state.clone())
        .layer(middleware::from_fn_with_state(state, session_gate))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
