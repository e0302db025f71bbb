//! Client for the remote baseball statistics API.
//!
//! Every endpoint returns its payload as the bare JSON body:
//! - `GET /teams` → `[Team]`
//! - `GET /players[?teamId=ID]` → `[Player]`
//! - `GET /players/{id}` → `Player`
//! - `GET /players/{id}/stats` → player counting stats
//! - `GET /teams/{id}/stats` → `TeamStatistics`


use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    cli::types::{PlayerId, TeamId},
    models::{CountingStats, Player, Team, TeamStatistics},
    Result, StatsError,
};

pub const DEFAULT_API_URL: &str = "https://api.example.com";
pub const API_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_API_URL)
    }

    /// Client rooted at `base_url` (a trailing slash is ignored).
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("baseball-stats/", env!("CARGO_PKG_VERSION")))
            .timeout(API_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_teams(&self) -> Result<Vec<Team>> {
        self.get_json("/teams", &[]).await
    }

    /// All players, or only those on `team_id`.
    pub async fn fetch_players(&self, team_id: Option<&TeamId>) -> Result<Vec<Player>> {
        match team_id {
            Some(team) => self.get_json("/players", &[("teamId", team.as_str())]).await,
            None => self.get_json("/players", &[]).await,
        }
    }

    pub async fn fetch_player(&self, id: &PlayerId) -> Result<Player> {
        self.get_json(&format!("/players/{id}"), &[]).await
    }

    pub async fn fetch_player_stats(&self, id: &PlayerId) -> Result<CountingStats> {
        self.get_json(&format!("/players/{id}/stats"), &[]).await
    }

    pub async fn fetch_team_stats(&self, id: &TeamId) -> Result<TeamStatistics> {
        self.get_json(&format!("/teams/{id}/stats"), &[]).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?query, "GET");

        let response = self.http.get(&url).query(query).send().await?;
        let response = check_status(response)?;
        Ok(response.json::<T>().await?)
    }
}

fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    Err(StatsError::Api {
        status: status.as_u16(),
        message: format!(
            "API Error: {}",
            status.canonical_reason().unwrap_or("Unknown status")
        ),
    })
}
