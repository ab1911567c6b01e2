use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::api::types::{
    SearchResult, SeasonSummary, Show, SyncResponse, SyncShows, WatchedProgress, WatchlistEntry,
};
use crate::error::ApiError;

const TRAKT_API_URL: &str = "https://api.trakt.tv";
const TRAKT_API_VERSION: &str = "2";

/// Trakt API client
pub struct TraktClient {
    client: Client,
    client_id: String,
    access_token: String,
}

impl TraktClient {
    pub fn new(client_id: String, access_token: String) -> Self {
        Self {
            client: Client::new(),
            client_id,
            access_token,
        }
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "trakt-api-version",
            HeaderValue::from_static(TRAKT_API_VERSION),
        );
        if let Ok(value) = HeaderValue::from_str(&self.client_id) {
            headers.insert("trakt-api-key", value);
        }
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", self.access_token)) {
            headers.insert(AUTHORIZATION, value);
        }
        headers
    }

    fn check(&self, response: Response) -> Result<Response, ApiError> {
        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Auth),
            StatusCode::TOO_MANY_REQUESTS => Err(ApiError::RateLimited),
            status if !status.is_success() => Err(ApiError::Trakt(format!("HTTP {}", status))),
            _ => Ok(response),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", TRAKT_API_URL, path);
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .headers(self.headers())
            .send()
            .await?;
        let response = self.check(response)?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Trakt(format!("Failed to parse response: {}", e)))
    }

    async fn post(&self, path: &str, body: &SyncShows) -> Result<SyncResponse, ApiError> {
        let url = format!("{}{}", TRAKT_API_URL, path);
        tracing::debug!(%url, "POST");

        let response = self
            .client
            .post(&url)
            .headers(self.headers())
            .json(body)
            .send()
            .await?;
        let response = self.check(response)?;

        // All /sync endpoints reply with counts, but the client only logs
        // them, so decode failures are not fatal.
        let counts: SyncResponse = response.json().await.unwrap_or_default();
        tracing::debug!(
            added_shows = counts.added.shows,
            added_seasons = counts.added.seasons,
            added_episodes = counts.added.episodes,
            deleted_shows = counts.deleted.shows,
            deleted_seasons = counts.deleted.seasons,
            deleted_episodes = counts.deleted.episodes,
            "sync response"
        );
        Ok(counts)
    }

    /// Search for TV shows by title
    pub async fn search_shows(&self, query: &str, limit: u32) -> Result<Vec<Show>, ApiError> {
        let path = format!(
            "/search/show?query={}&limit={}",
            urlencoding::encode(query),
            limit
        );
        let results: Vec<SearchResult> = self.get(&path).await?;
        Ok(results.into_iter().map(|r| r.show).collect())
    }

    /// Get the shows on a user's watchlist
    pub async fn watchlist_shows(&self, username: &str) -> Result<Vec<Show>, ApiError> {
        let path = format!("/users/{}/watchlist/shows", urlencoding::encode(username));
        let entries: Vec<WatchlistEntry> = self.get(&path).await?;
        Ok(entries.into_iter().map(|e| e.show).collect())
    }

    /// Get watched progress for one show, including per-episode state
    pub async fn watched_progress(&self, show_id: u64) -> Result<WatchedProgress, ApiError> {
        self.get(&format!("/shows/{}/progress/watched", show_id))
            .await
    }

    /// Get season summaries for one show
    pub async fn seasons(&self, show_id: u64) -> Result<Vec<SeasonSummary>, ApiError> {
        self.get(&format!("/shows/{}/seasons?extended=full", show_id))
            .await
    }

    /// Add whole shows to the user's watchlist
    pub async fn add_to_watchlist(&self, show_ids: &[u64]) -> Result<SyncResponse, ApiError> {
        self.post("/sync/watchlist", &SyncShows::show_batch(show_ids))
            .await
    }

    /// Remove whole shows from the user's watchlist
    pub async fn remove_from_watchlist(&self, show_ids: &[u64]) -> Result<SyncResponse, ApiError> {
        self.post("/sync/watchlist/remove", &SyncShows::show_batch(show_ids))
            .await
    }

    /// Mark a show, season, or episode as watched
    pub async fn mark_watched(&self, payload: &SyncShows) -> Result<SyncResponse, ApiError> {
        self.post("/sync/history", payload).await
    }

    /// Remove a show, season, or episode from watch history
    pub async fn mark_unwatched(&self, payload: &SyncShows) -> Result<SyncResponse, ApiError> {
        self.post("/sync/history/remove", payload).await
    }
}
