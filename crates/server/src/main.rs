// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::State as AxumState,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use res_notif_api::{AuthenticationService, ConnectionProbe, process_notification};
use res_notif_persistence::Persistence;

/// OTA reservation gateway - receives `HotelResNotifRQ` notifications from
/// channel managers and reconciles them against the property store.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory
    /// database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Register this inbound API key for the channel manager at startup
    #[arg(long)]
    api_key: Option<String>,
}

/// Application state shared across handlers.
///
/// The persistence layer sits behind a Mutex: each request holds it end to
/// end, which also serializes the engine's scan-then-assign reservation
/// numbering.
#[derive(Clone)]
struct AppState {
    /// The persistence layer backing all three store traits.
    persistence: Arc<Mutex<Persistence>>,
}

/// JSON body of a failed connection test.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConnectionErrorResponse {
    /// Short error label.
    error: String,
    /// Human-readable message.
    message: String,
}

/// JSON body of a successful connection test.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConnectionOkResponse {
    /// Status message.
    status: String,
}

/// Handler for POST `/api/reservation`.
///
/// Body in, body out: the raw SOAP/XML notification is run through the
/// pipeline and the response is always transport status 200 — callers must
/// inspect the XML body for `<Success/>` vs `<Errors>`, per the wire
/// contract.
async fn handle_reservation(AxumState(app_state): AxumState<AppState>, body: String) -> Response {
    info!(body_len = body.len(), "handling reservation notification");

    let mut persistence = app_state.persistence.lock().await;
    let xml: String = process_notification(&mut *persistence, &body);
    drop(persistence);

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/xml; charset=utf-8")],
        xml,
    )
        .into_response()
}

/// Handler for POST `/api/test_connection`.
///
/// Authentication-only probe used by channel managers during onboarding.
/// Unlike the notification endpoint this one does signal failure through
/// the HTTP status: 403 for a missing password element, 401 for a key that
/// does not validate.
async fn handle_test_connection(
    AxumState(app_state): AxumState<AppState>,
    body: String,
) -> Response {
    info!("handling connection test");

    let mut persistence = app_state.persistence.lock().await;
    let probe: ConnectionProbe = AuthenticationService::probe_connection(&mut *persistence, &body);
    drop(persistence);

    match probe {
        ConnectionProbe::MissingKey => (
            StatusCode::FORBIDDEN,
            Json(ConnectionErrorResponse {
                error: String::from("Missing Error!"),
                message: String::from("Missing <wsse:Password> field in SOAP XML."),
            }),
        )
            .into_response(),
        ConnectionProbe::InvalidKey => (
            StatusCode::UNAUTHORIZED,
            Json(ConnectionErrorResponse {
                error: String::from("Key Error!"),
                message: String::from("Authentication failed."),
            }),
        )
            .into_response(),
        ConnectionProbe::Authenticated => (
            StatusCode::OK,
            [
                (header::CACHE_CONTROL, "no-store"),
                (header::PRAGMA, "no-cache"),
            ],
            Json(ConnectionOkResponse {
                status: String::from("Connection Successful."),
            }),
        )
            .into_response(),
    }
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/reservation", post(handle_reservation))
        .route("/api/test_connection", post(handle_test_connection))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing OTA reservation gateway");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let mut persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    // Register the channel manager's inbound key, if provided
    if let Some(api_key) = &args.api_key {
        persistence.register_api_key("siteminder", api_key)?;
    }

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
