use dotenvy::dotenv;
use tracing::info;

use tutorlink_web::logging;
use tutorlink_web::metrics;
use tutorlink_web::router::init_router;
use tutorlink_web::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();

    logging::init_tracing();

    let state = init_app_state();
    info!(backend = %state.backend.base_url, "gateway starting");

    if let Some(handle) = metrics::init_metrics() {
        let metrics_port: u16 = std::env::var("METRICS_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(9100);
        tokio::spawn(async move {
            let listener = tokio::net::TcpListener::bind(("0.0.0.0", metrics_port))
                .await
                .expect("Failed to bind metrics port");
            axum::serve(listener, metrics::metrics_app(handle))
                .await
                .expect("Metrics server failed");
        });
        info!(port = metrics_port, "metrics server started");
    }

    let app = init_router(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(3000);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("Failed to bind gateway port");
    println!("🚀 Gateway running on http://localhost:{port}");
    axum::serve(listener, app).await.expect("Server failed");

    logging::shutdown_tracer().await;
}
