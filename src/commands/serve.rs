//! Serve command implementation

use std::net::{IpAddr, SocketAddr};

use tracing::info;

use crate::{
    server::{self, AppState},
    storage::LeagueDatabase,
    LeagueError, Result,
};

/// Parse `host` and `port` into a socket address
pub fn bind_address(host: &str, port: u16) -> Result<SocketAddr> {
    let ip: IpAddr = host.parse().map_err(|_| LeagueError::Config {
        message: format!("invalid host address: {}", host),
    })?;
    Ok(SocketAddr::new(ip, port))
}

/// Handle the serve command; runs until Ctrl+C or SIGTERM
pub async fn handle_serve(db: LeagueDatabase, host: &str, port: u16) -> Result<()> {
    let addr = bind_address(host, port)?;
    info!(
        teams = db.team_count()?,
        fixtures = db.fixture_count()?,
        "starting web application"
    );

    server::run(AppState::new(db), addr, server::shutdown_signal()).await
}
