use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard ID set Trakt attaches to every show
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowIds {
    pub trakt: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvdb: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imdb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmdb: Option<u64>,
}

/// A TV show as returned by search and watchlist endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct Show {
    pub title: String,
    #[allow(dead_code)]
    pub year: Option<i32>,
    pub ids: ShowIds,
}

impl Show {
    /// Canonical ID used for all follow-up API calls
    pub fn trakt_id(&self) -> u64 {
        self.ids.trakt
    }
}

/// One entry of a search response; the show payload is nested
#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub show: Show,
}

/// One entry of a watchlist response
#[derive(Debug, Deserialize)]
pub struct WatchlistEntry {
    #[allow(dead_code)]
    pub listed_at: Option<DateTime<Utc>>,
    pub show: Show,
}

/// Watched progress for one show (`/shows/{id}/progress/watched`)
#[derive(Debug, Clone, Deserialize)]
pub struct WatchedProgress {
    pub aired: u32,
    pub completed: u32,
    #[allow(dead_code)]
    pub last_watched_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub seasons: Vec<SeasonProgress>,
}

impl WatchedProgress {
    /// Episodes aired but not yet watched
    pub fn left(&self) -> u32 {
        self.aired.saturating_sub(self.completed)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeasonProgress {
    pub number: u32,
    #[serde(default)]
    pub episodes: Vec<EpisodeProgress>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EpisodeProgress {
    pub number: u32,
    pub completed: bool,
}

/// Season summary from `/shows/{id}/seasons`
#[derive(Debug, Clone, Deserialize)]
pub struct SeasonSummary {
    pub number: u32,
    #[serde(default)]
    pub episode_count: u32,
    #[serde(default)]
    pub aired_episodes: u32,
}

// Request payloads for the /sync endpoints. Trakt expects shows nested with
// optional seasons nested with optional episodes, each addressed by number.

#[derive(Debug, Serialize)]
pub struct SyncShows {
    pub shows: Vec<SyncShow>,
}

#[derive(Debug, Serialize)]
pub struct SyncShow {
    pub ids: ShowIds,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub seasons: Vec<SyncSeason>,
}

#[derive(Debug, Serialize)]
pub struct SyncSeason {
    pub number: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub episodes: Vec<SyncEpisode>,
}

#[derive(Debug, Serialize)]
pub struct SyncEpisode {
    pub number: u32,
}

impl SyncShows {
    fn by_id(trakt_id: u64, seasons: Vec<SyncSeason>) -> Self {
        Self {
            shows: vec![SyncShow {
                ids: ShowIds {
                    trakt: trakt_id,
                    ..ShowIds::default()
                },
                seasons,
            }],
        }
    }

    /// Payload addressing a whole show
    pub fn show(trakt_id: u64) -> Self {
        Self::by_id(trakt_id, vec![])
    }

    /// Payload addressing one season of a show
    pub fn season(trakt_id: u64, season: u32) -> Self {
        Self::by_id(
            trakt_id,
            vec![SyncSeason {
                number: season,
                episodes: vec![],
            }],
        )
    }

    /// Payload addressing a single episode
    pub fn episode(trakt_id: u64, season: u32, episode: u32) -> Self {
        Self::by_id(
            trakt_id,
            vec![SyncSeason {
                number: season,
                episodes: vec![SyncEpisode { number: episode }],
            }],
        )
    }

    /// Payload addressing several whole shows at once
    pub fn show_batch(trakt_ids: &[u64]) -> Self {
        Self {
            shows: trakt_ids
                .iter()
                .map(|&id| SyncShow {
                    ids: ShowIds {
                        trakt: id,
                        ..ShowIds::default()
                    },
                    seasons: vec![],
                })
                .collect(),
        }
    }
}

/// Per-category counts Trakt reports back from /sync calls
#[derive(Debug, Default, Deserialize)]
pub struct SyncCounts {
    #[serde(default)]
    pub shows: u32,
    #[serde(default)]
    pub seasons: u32,
    #[serde(default)]
    pub episodes: u32,
}

#[derive(Debug, Default, Deserialize)]
pub struct SyncResponse {
    #[serde(default)]
    pub added: SyncCounts,
    #[serde(default)]
    pub deleted: SyncCounts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_payload_has_no_seasons() {
        let json = serde_json::to_value(SyncShows::show(42)).unwrap();
        assert_eq!(json["shows"][0]["ids"]["trakt"], 42);
        assert!(json["shows"][0].get("seasons").is_none());
    }

    #[test]
    fn test_season_payload_has_no_episodes() {
        let json = serde_json::to_value(SyncShows::season(42, 3)).unwrap();
        assert_eq!(json["shows"][0]["seasons"][0]["number"], 3);
        assert!(json["shows"][0]["seasons"][0].get("episodes").is_none());
    }

    #[test]
    fn test_episode_payload() {
        let json = serde_json::to_value(SyncShows::episode(42, 3, 10)).unwrap();
        assert_eq!(json["shows"][0]["seasons"][0]["episodes"][0]["number"], 10);
    }

    #[test]
    fn test_show_batch_payload() {
        let json = serde_json::to_value(SyncShows::show_batch(&[1, 2, 3])).unwrap();
        assert_eq!(json["shows"].as_array().unwrap().len(), 3);
        assert_eq!(json["shows"][2]["ids"]["trakt"], 3);
    }

    #[test]
    fn test_progress_left() {
        let progress = WatchedProgress {
            aired: 24,
            completed: 20,
            last_watched_at: None,
            seasons: vec![],
        };
        assert_eq!(progress.left(), 4);
    }

    #[test]
    fn test_progress_left_never_underflows() {
        let progress = WatchedProgress {
            aired: 10,
            completed: 12,
            last_watched_at: None,
            seasons: vec![],
        };
        assert_eq!(progress.left(), 0);
    }

    #[test]
    fn test_search_result_deserialization() {
        let json = r#"[
            {
                "type": "show",
                "score": 100.0,
                "show": {
                    "title": "Breaking Bad",
                    "year": 2008,
                    "ids": { "trakt": 1, "slug": "breaking-bad", "tvdb": 81189 }
                }
            }
        ]"#;
        let results: Vec<SearchResult> = serde_json::from_str(json).unwrap();
        assert_eq!(results[0].show.title, "Breaking Bad");
        assert_eq!(results[0].show.trakt_id(), 1);
    }
}
