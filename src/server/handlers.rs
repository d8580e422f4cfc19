use axum::{
    body::to_bytes,
    extract::{FromRequest, Request, State},
    http::{header, Uri},
    response::IntoResponse,
    Form, Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::AppState;
use crate::error::{LeagueError, Result};
use crate::league::{
    export::{EXPORT_CONTENT_TYPE, EXPORT_FILE_NAME},
    filters, standings_csv_bytes, Standings,
};
use crate::storage::{Fixture, Team};

/// Team list view shared by `/`, `/show_without_fixtures` and `/search`
#[derive(Debug, Serialize, Deserialize)]
pub struct TeamsView {
    pub teams: Vec<Team>,
    pub fixtures: Vec<Fixture>,
    pub show_without_fixtures: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_query: String,
}

impl SearchForm {
    /// Read the form from a `/search` request.
    ///
    /// A request with no content type and no body is an empty query. Any
    /// other body must be `application/x-www-form-urlencoded`.
    async fn from_search_request(request: Request, state: &AppState) -> Result<Self> {
        if request.headers().contains_key(header::CONTENT_TYPE) {
            return Form::<SearchForm>::from_request(request, state)
                .await
                .map(|Form(form)| form)
                .map_err(|rejection| LeagueError::InvalidRequest {
                    message: rejection.body_text(),
                });
        }

        let body = to_bytes(request.into_body(), MAX_UNTYPED_BODY)
            .await
            .map_err(|e| LeagueError::InvalidRequest {
                message: e.to_string(),
            })?;
        if !body.is_empty() {
            return Err(LeagueError::InvalidRequest {
                message: "search body without a content type".to_string(),
            });
        }
        Ok(SearchForm::default())
    }
}

const MAX_UNTYPED_BODY: usize = 16 * 1024;

pub async fn teams_list(State(state): State<AppState>) -> Result<Json<TeamsView>> {
    let (teams, fixtures) = state.load().await?;
    debug!(teams = teams.len(), fixtures = fixtures.len(), "listing teams");

    Ok(Json(TeamsView {
        teams,
        fixtures,
        show_without_fixtures: false,
    }))
}

pub async fn teams_without_fixtures(State(state): State<AppState>) -> Result<Json<TeamsView>> {
    let (teams, fixtures) = state.load().await?;
    let teams = filters::teams_without_fixtures(&teams, &fixtures);

    Ok(Json(TeamsView {
        teams,
        fixtures: Vec::new(),
        show_without_fixtures: true,
    }))
}

pub async fn search(State(state): State<AppState>, request: Request) -> Result<Json<TeamsView>> {
    let form = SearchForm::from_search_request(request, &state).await?;

    let (teams, fixtures) = state.load().await?;
    let result = filters::search(&teams, &fixtures, &form.search_query);
    debug!(
        query = %form.search_query,
        teams = result.teams.len(),
        fixtures = result.fixtures.len(),
        "search"
    );

    Ok(Json(TeamsView {
        teams: result.teams,
        fixtures: result.fixtures,
        show_without_fixtures: false,
    }))
}

pub async fn display_league_table(State(state): State<AppState>) -> Result<Json<Standings>> {
    Ok(Json(state.standings().await?))
}

pub async fn download_table(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let standings = state.standings().await?;
    let body = standings_csv_bytes(&standings)?;

    Ok((
        [
            (header::CONTENT_TYPE, EXPORT_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
            ),
        ],
        body,
    ))
}

pub async fn not_found(uri: Uri) -> LeagueError {
    LeagueError::NotFound {
        path: uri.path().to_string(),
    }
}
