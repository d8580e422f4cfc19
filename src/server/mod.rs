//! HTTP surface of the league application.
//!
//! | Method | Path                      | Response                               |
//! |--------|---------------------------|----------------------------------------|
//! | GET    | `/`                       | all teams and fixtures                 |
//! | GET    | `/show_without_fixtures`  | teams with no fixtures                 |
//! | POST   | `/search`                 | teams matching `search_query` + games  |
//! | POST   | `/display_league_table`   | ranked teams and their points          |
//! | GET    | `/download_table`         | `Table.csv` attachment                 |

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info};

use crate::error::{LeagueError, Result};
use crate::league::{compute_standings, Standings};
use crate::storage::{Fixture, LeagueDatabase, Team};

mod handlers;


pub use handlers::{SearchForm, TeamsView};

/// Shared handler state: the database session behind a lock
#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<LeagueDatabase>>,
}

impl AppState {
    pub fn new(db: LeagueDatabase) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
        }
    }

    pub fn db(&self) -> Result<MutexGuard<'_, LeagueDatabase>> {
        self.db.lock().map_err(|_| LeagueError::LockPoisoned)
    }

    /// Every team and fixture, read under a single lock on the blocking pool
    pub(crate) async fn load(&self) -> Result<(Vec<Team>, Vec<Fixture>)> {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || -> Result<(Vec<Team>, Vec<Fixture>)> {
            let db = db.lock().map_err(|_| LeagueError::LockPoisoned)?;
            Ok((db.list_teams()?, db.list_fixtures()?))
        })
        .await?
    }

    pub(crate) async fn standings(&self) -> Result<Standings> {
        let (teams, fixtures) = self.load().await?;
        compute_standings(&teams, &fixtures)
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::teams_list))
        .route(
            "/show_without_fixtures",
            get(handlers::teams_without_fixtures),
        )
        .route("/search", post(handlers::search))
        .route(
            "/display_league_table",
            post(handlers::display_league_table),
        )
        .route("/download_table", get(handlers::download_table))
        .fallback(handlers::not_found)
        .with_state(state)
}

/// Serve until `shutdown` resolves
pub async fn run(
    state: AppState,
    addr: SocketAddr,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("league table listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("HTTP server shut down gracefully");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received. Preparing graceful exit...");
}

impl IntoResponse for LeagueError {
    fn into_response(self) -> Response {
        let status = match &self {
            e if e.is_validation() => StatusCode::UNPROCESSABLE_ENTITY,
            LeagueError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            LeagueError::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(error = %self, "request failed");
        }

        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}
