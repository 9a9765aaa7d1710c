use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use medifab_api::config::ServerConfig;
use medifab_api::router::build_app_router;
use medifab_api::state::AppState;
use medifab_core::intake::LeadIntake;
use medifab_core::notify::{NoopDispatcher, NotificationDispatcher};
use medifab_core::store::ContentStore;
use medifab_db::store::PgContentStore;
use medifab_notify::{EmailConfig, SmtpDispatcher};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "medifab_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = medifab_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    medifab_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    medifab_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Content store ---
    let store: Arc<dyn ContentStore> = Arc::new(PgContentStore::new(pool));

    // --- Notification dispatcher ---
    // Email is enabled by the presence of SMTP_HOST; otherwise lead
    // notifications are a logged no-op.
    let dispatcher: Arc<dyn NotificationDispatcher> = match EmailConfig::from_env() {
        Some(email_config) => {
            tracing::info!(smtp_host = %email_config.smtp_host, "Email notifications enabled");
            Arc::new(SmtpDispatcher::new(email_config))
        }
        None => {
            tracing::info!("SMTP_HOST not set, email notifications disabled");
            Arc::new(NoopDispatcher)
        }
    };

    // --- Intake pipeline ---
    let intake = Arc::new(LeadIntake::new(
        Arc::clone(&store),
        dispatcher,
        config.admin_email.clone(),
    ));

    // --- App state / router ---
    let state = AppState {
        store,
        intake,
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server shuts
/// down cleanly whether stopped interactively or by a process manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
