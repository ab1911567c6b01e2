use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::api::{Show, SyncShows, TraktClient};
use crate::cli::ViewOptions;
use crate::config::{config_path, load_config, save_config, Config};
use crate::display::{self, EpisodeMap, Listing, WatchState};
use crate::error::Result;
use crate::ranges::{self, Scope};

/// Run the first-time setup
pub async fn init() -> Result<()> {
    if config_path().exists() {
        let answer = prompt("Configuration already exists. Overwrite? [y/N]: ")?;
        if !answer.eq_ignore_ascii_case("y") {
            println!("Setup cancelled.");
            return Ok(());
        }
    }

    println!("Create an API application at https://trakt.tv/oauth/applications");
    println!("and generate an access token for it.\n");

    let client_id = prompt("Client ID: ")?;
    let access_token = prompt("Access token: ")?;
    let username = prompt("Trakt username: ")?;

    let config = Config::new(client_id, access_token, username);
    if !config.has_credentials() {
        println!("\nAll three values are required. Setup cancelled.");
        return Ok(());
    }

    save_config(&config)?;
    println!("\nConfiguration saved. Run 'trakr watchlist' to get started.");

    Ok(())
}

/// Handle the config command
pub async fn config(show: bool, set: Option<String>, reset: bool) -> Result<()> {
    if reset {
        if config_path().exists() {
            std::fs::remove_file(config_path())?;
            println!("Configuration reset. Run 'trakr init' to set up again.");
        } else {
            println!("No configuration file found.");
        }
        return Ok(());
    }

    if let Some(key_value) = set {
        let parts: Vec<&str> = key_value.splitn(2, '=').collect();
        if parts.len() != 2 {
            println!("Invalid format. Use: --set key=value");
            println!("Available keys: client_id, access_token, username");
            return Ok(());
        }

        let mut config = load_config()
            .unwrap_or_else(|_| Config::new(String::new(), String::new(), String::new()));

        match parts[0] {
            "client_id" => {
                config.trakt.client_id = parts[1].to_string();
            }
            "access_token" => {
                config.trakt.access_token = parts[1].to_string();
            }
            "username" => {
                config.trakt.username = parts[1].to_string();
            }
            _ => {
                println!("Unknown key: {}", parts[0]);
                println!("Available keys: client_id, access_token, username");
                return Ok(());
            }
        }

        save_config(&config)?;
        println!("Configuration updated.");
        return Ok(());
    }

    if show {
        match load_config() {
            Ok(config) => {
                println!("Configuration file: {}\n", config_path().display());
                println!("[trakt]");
                println!(
                    "client_id = \"{}...\"",
                    &config.trakt.client_id[..8.min(config.trakt.client_id.len())]
                );
                println!(
                    "access_token = \"{}...\"",
                    &config.trakt.access_token[..8.min(config.trakt.access_token.len())]
                );
                println!("username = \"{}\"", config.trakt.username);
                println!("\n[ui]");
                println!("color = {}", config.ui.color);
                println!("limit = {}", config.ui.limit);
            }
            Err(e) => {
                println!("Error: {}", e);
            }
        }
        return Ok(());
    }

    // Default: show help
    println!("Usage: trakr config [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --show         Show current configuration");
    println!("  --set KEY=VAL  Set a configuration value");
    println!("  --reset        Reset configuration to defaults");
    println!();
    println!("Available keys for --set:");
    println!("  client_id     Trakt API application client ID");
    println!("  access_token  Trakt OAuth access token");
    println!("  username      Trakt username");

    Ok(())
}

/// Handle the search command
pub async fn search(term: String, add: bool, view: ViewOptions) -> Result<()> {
    let config = load_config()?;
    let client = TraktClient::new(
        config.trakt.client_id.clone(),
        config.trakt.access_token.clone(),
    );
    let color = config.ui.color;

    let limit = view.limit.unwrap_or(config.ui.limit);
    let shows = client.search_shows(&term, limit).await?;

    if shows.is_empty() {
        println!("No results for '{}'.", term);
        return Ok(());
    }

    let listed = display_shows(&client, &config, shows, view, add).await?;

    if add {
        let input = prompt("Enter Show IDs to add to watchlist (space separated): ")?;
        match resolve_short_ids(&input, &listed) {
            Some(ids) if !ids.is_empty() => {
                client.add_to_watchlist(&ids).await?;
                println!("{}", display::success("Shows added", color));
            }
            Some(_) => {
                println!("{}", display::warn("No shows added", color));
            }
            None => {
                println!("{}", display::failure("Operation Canceled", color));
            }
        }
    }

    Ok(())
}

/// Handle the watchlist command
pub async fn watchlist(delete: bool, watch: bool, unwatch: bool, view: ViewOptions) -> Result<()> {
    let config = load_config()?;
    let client = TraktClient::new(
        config.trakt.client_id.clone(),
        config.trakt.access_token.clone(),
    );
    let color = config.ui.color;

    let mut shows = client.watchlist_shows(&config.trakt.username).await?;
    if let Some(limit) = view.limit {
        shows.truncate(limit as usize);
    }

    if shows.is_empty() {
        println!("Your watchlist is empty.");
        return Ok(());
    }

    let with_ids = delete || watch || unwatch;
    let listed = display_shows(&client, &config, shows, view, with_ids).await?;

    if delete {
        let input = prompt("Enter Show IDs to remove from watchlist (space separated): ")?;
        match resolve_short_ids(&input, &listed) {
            Some(ids) if !ids.is_empty() => {
                client.remove_from_watchlist(&ids).await?;
                println!("{}", display::success("Shows removed", color));
            }
            Some(_) => {
                println!("{}", display::warn("No shows removed", color));
            }
            None => {
                println!("{}", display::failure("Operation Canceled", color));
            }
        }
    }

    if unwatch {
        let command = prompt("Enter episodes you haven't watched (Ie: 2x3x10 2x3-3x3): ")?;
        watch_unwatch(&client, color, &listed, &command, false).await?;
    }

    if watch {
        let command = prompt("Enter episodes you've watched (Ie: 2x3x10 2x3-3x3): ")?;
        watch_unwatch(&client, color, &listed, &command, true).await?;
    }

    Ok(())
}

/// Print the show listing with watched-status gutters and optional detail
/// grids. Returns the shows in listed order; the short ID printed next to
/// each show is its 1-based position in the returned vector.
async fn display_shows(
    client: &TraktClient,
    config: &Config,
    shows: Vec<Show>,
    view: ViewOptions,
    with_ids: bool,
) -> Result<Vec<Show>> {
    let color = config.ui.color;

    println!("{}", display::header("Updating show info", color));

    let mut entries: Vec<(Show, WatchState, EpisodeMap)> = Vec::with_capacity(shows.len());
    for show in shows {
        let (state, episodes) = if view.skip_watch_info {
            (WatchState::Skipped, EpisodeMap::new())
        } else {
            lookup_progress(client, &show, view).await?
        };

        // --todo hides fully-watched shows
        if view.todo && state == WatchState::Left(0) {
            continue;
        }
        entries.push((show, state, episodes));
    }

    println!("\n{}", display::header("Shows", color));

    let mut listing = Listing::new(color, with_ids);
    for (show, state, _) in &entries {
        listing.push(&show.title, *state);
    }

    for (line, (_, _, episodes)) in listing.render().iter().zip(&entries) {
        println!("{}", line);
        if view.details && !episodes.is_empty() {
            for grid_line in display::render_episode_grid(episodes, color) {
                println!("{}", grid_line);
            }
        }
    }

    Ok(entries.into_iter().map(|(show, _, _)| show).collect())
}

/// Fetch watched progress for one show, falling back to the season list
/// when the progress endpoint has no per-episode data.
async fn lookup_progress(
    client: &TraktClient,
    show: &Show,
    view: ViewOptions,
) -> Result<(WatchState, EpisodeMap)> {
    let progress = client.watched_progress(show.trakt_id()).await?;
    let state = WatchState::Left(progress.left());

    if !view.details {
        return Ok((state, EpisodeMap::new()));
    }

    let mut episodes = EpisodeMap::new();
    for season in &progress.seasons {
        // Season 0 holds specials
        if season.number == 0 {
            continue;
        }
        let per_season = episodes.entry(season.number).or_default();
        for episode in &season.episodes {
            if view.todo && episode.completed {
                continue;
            }
            per_season.insert(episode.number, episode.completed);
        }
    }
    episodes.retain(|_, eps| !eps.is_empty());

    if episodes.is_empty() && !view.todo {
        for season in client.seasons(show.trakt_id()).await? {
            if season.number == 0 {
                continue;
            }
            let count = season.aired_episodes.max(season.episode_count);
            let per_season: BTreeMap<u32, bool> = (1..=count).map(|e| (e, false)).collect();
            if !per_season.is_empty() {
                episodes.insert(season.number, per_season);
            }
        }
    }

    Ok((state, episodes))
}

/// Parse an episode range command and issue one history call per triple.
/// A parse error or an unknown show ID aborts the whole batch; nothing is
/// partially applied before the first request goes out.
async fn watch_unwatch(
    client: &TraktClient,
    color: bool,
    shows: &[Show],
    command: &str,
    watch: bool,
) -> Result<()> {
    if command.trim().is_empty() {
        return Ok(());
    }

    let triples = match ranges::parse(command) {
        Ok(triples) => triples,
        Err(e) => {
            tracing::debug!(error = %e, "range command rejected");
            println!("{}", display::failure("Invalid range syntax", color));
            return Ok(());
        }
    };

    // Resolve every short ID before issuing any request
    let mut batch = Vec::with_capacity(triples.len());
    for triple in &triples {
        match lookup_show(shows, triple.index) {
            Some(show) => batch.push((show, triple.scope())),
            None => {
                println!("{}", display::failure("Operation Canceled", color));
                return Ok(());
            }
        }
    }

    let mut marked = 0u32;
    for (show, scope) in batch {
        let id = show.trakt_id();
        match scope {
            Scope::Show => {
                if watch {
                    client.mark_watched(&SyncShows::show(id)).await?;
                } else {
                    println!(
                        "{}",
                        display::warn("Cannot unwatch a whole show - Skipping", color)
                    );
                    continue;
                }
            }
            Scope::Season(season) => {
                if watch {
                    client.mark_watched(&SyncShows::season(id, season)).await?;
                } else {
                    println!(
                        "{}",
                        display::warn("Cannot unwatch a whole season - Skipping", color)
                    );
                    continue;
                }
            }
            Scope::Episode(season, episode) => {
                let payload = SyncShows::episode(id, season, episode);
                if watch {
                    client.mark_watched(&payload).await?;
                } else {
                    client.mark_unwatched(&payload).await?;
                }
            }
        }
        marked += 1;
    }

    let verb = if watch { "watched" } else { "unwatched" };
    println!(
        "{}",
        display::success(&format!("Marked {} item(s) {}", marked, verb), color)
    );

    Ok(())
}

/// Map a 1-based short ID from the listing back to its show
fn lookup_show(shows: &[Show], index: i32) -> Option<&Show> {
    usize::try_from(index)
        .ok()
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| shows.get(i))
}

/// Parse a space-separated list of short IDs into Trakt IDs. Returns None
/// when any entry is not a number or not in the listing (the whole
/// operation is cancelled, matching the batch semantics of the range
/// command).
fn resolve_short_ids(input: &str, shows: &[Show]) -> Option<Vec<u64>> {
    let mut ids = Vec::new();
    for word in input.split_whitespace() {
        let index: i32 = word.parse().ok()?;
        ids.push(lookup_show(shows, index)?.trakt_id());
    }
    Some(ids)
}

fn prompt(text: &str) -> Result<String> {
    print!("{}", text);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ShowIds;

    fn show(id: u64, title: &str) -> Show {
        Show {
            title: title.to_string(),
            year: None,
            ids: ShowIds {
                trakt: id,
                ..ShowIds::default()
            },
        }
    }

    #[test]
    fn test_lookup_show_is_one_based() {
        let shows = vec![show(10, "A"), show(20, "B")];
        assert_eq!(lookup_show(&shows, 1).unwrap().trakt_id(), 10);
        assert_eq!(lookup_show(&shows, 2).unwrap().trakt_id(), 20);
        assert!(lookup_show(&shows, 0).is_none());
        assert!(lookup_show(&shows, 3).is_none());
        assert!(lookup_show(&shows, -1).is_none());
    }

    #[test]
    fn test_resolve_short_ids() {
        let shows = vec![show(10, "A"), show(20, "B")];
        assert_eq!(resolve_short_ids("2 1", &shows), Some(vec![20, 10]));
    }

    #[test]
    fn test_resolve_short_ids_empty_input_is_noop() {
        let shows = vec![show(10, "A")];
        assert_eq!(resolve_short_ids("", &shows), Some(vec![]));
    }

    #[test]
    fn test_resolve_short_ids_cancels_on_bad_input() {
        let shows = vec![show(10, "A")];
        assert_eq!(resolve_short_ids("1 x", &shows), None);
        assert_eq!(resolve_short_ids("5", &shows), None);
    }
}
