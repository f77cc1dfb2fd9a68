//! Binary entrypoint for the todos HTTP server.
//!
//! Reads configuration from environment variables:
//! - `TODOS_DB_PATH`: SQLite database file path (default: "todos.db")
//! - `TODOS_PORT`: Server listen port (default: "3000")
//! - `TODOS_SKIP_SEED`: if set, skip seeding example items at startup

use todos_server::router::build_router;
use todos_server::state::AppState;
use todos_storage::SqliteStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let db_path = std::env::var("TODOS_DB_PATH").unwrap_or_else(|_| "todos.db".to_string());
    let port = std::env::var("TODOS_PORT").unwrap_or_else(|_| "3000".to_string());

    let mut store = SqliteStore::new(&db_path).expect("Failed to open todo database");

    if std::env::var_os("TODOS_SKIP_SEED").is_none() {
        // A seed failure is logged but does not prevent startup.
        match todos_storage::seed::seed_if_empty(&mut store) {
            Ok(0) => tracing::info!("database already seeded"),
            Ok(count) => tracing::info!(count, "database seeding completed"),
            Err(e) => tracing::error!(error = %e, "an error occurred seeding the database"),
        }
    }

    let app = build_router(AppState::with_store(store));

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("todos server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
