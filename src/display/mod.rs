use std::collections::BTreeMap;

use crossterm::style::Stylize;

/// Watched state per show: season number -> episode number -> watched
pub type EpisodeMap = BTreeMap<u32, BTreeMap<u32, bool>>;

/// Watched-status gutter for one show in a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    /// Number of aired episodes not yet watched (0 = fully watched)
    Left(u32),
    /// Progress lookup was skipped
    Skipped,
}

/// A numbered show listing with a watched-status gutter, matching the
/// interactive short-ID prompt: the position in the listing (1-based) is
/// the ID the user types back.
pub struct Listing {
    color: bool,
    with_ids: bool,
    entries: Vec<(String, WatchState)>,
}

impl Listing {
    pub fn new(color: bool, with_ids: bool) -> Self {
        Self {
            color,
            with_ids,
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, title: &str, state: WatchState) {
        self.entries.push((title.to_string(), state));
    }

    fn paint(&self, text: String, paint: fn(String) -> String) -> String {
        if self.color {
            paint(text)
        } else {
            text
        }
    }

    fn marker(&self, state: WatchState, width: usize) -> String {
        match state {
            WatchState::Skipped => self.paint("[skip]".to_string(), |t| t.yellow().to_string()),
            WatchState::Left(0) => self.paint("[ok]".to_string(), |t| t.green().to_string()),
            WatchState::Left(n) => {
                self.paint(format!("[{:w$}]", n, w = width), |t| t.red().to_string())
            }
        }
    }

    /// Render the listing, one line per show
    pub fn render(&self) -> Vec<String> {
        let id_width = digits(self.entries.len() as u32);
        let left_width = digits(
            self.entries
                .iter()
                .map(|(_, s)| match s {
                    WatchState::Left(n) => *n,
                    WatchState::Skipped => 0,
                })
                .max()
                .unwrap_or(0),
        );

        self.entries
            .iter()
            .enumerate()
            .map(|(i, (title, state))| {
                let marker = self.marker(*state, left_width);
                if self.with_ids {
                    let id = self.paint(format!("[{:w$}]", i + 1, w = id_width), |t| {
                        t.yellow().to_string()
                    });
                    format!("{} {} {}", marker, id, title)
                } else {
                    format!("{} {}", marker, title)
                }
            })
            .collect()
    }
}

fn digits(n: u32) -> usize {
    n.max(1).to_string().len()
}

/// Render a per-season episode grid, seven `[SSxEE]` cells per row, colored
/// by watched state.
pub fn render_episode_grid(seasons: &EpisodeMap, color: bool) -> Vec<String> {
    let mut lines = Vec::new();

    for (season, episodes) in seasons {
        lines.push(format!("  | Season {}", season));

        let mut row = String::new();
        for (i, (episode, watched)) in episodes.iter().enumerate() {
            let cell = format!("[{:02}x{:02}]", season, episode);
            let cell = if !color {
                cell
            } else if *watched {
                cell.green().to_string()
            } else {
                cell.red().to_string()
            };
            row.push(' ');
            row.push_str(&cell);

            if (i + 1) % 7 == 0 {
                lines.push(format!("  ||{}", row));
                row.clear();
            }
        }
        if !row.is_empty() {
            lines.push(format!("  ||{}", row));
        }
    }

    lines
}

/// Section header, yellow like the rest of the status output
pub fn header(text: &str, color: bool) -> String {
    if color {
        format!("[{}]", text).yellow().to_string()
    } else {
        format!("[{}]", text)
    }
}

/// Warning line for skipped operations
pub fn warn(text: &str, color: bool) -> String {
    if color {
        text.to_string().yellow().to_string()
    } else {
        text.to_string()
    }
}

/// Success line
pub fn success(text: &str, color: bool) -> String {
    if color {
        text.to_string().green().to_string()
    } else {
        text.to_string()
    }
}

/// Error line
pub fn failure(text: &str, color: bool) -> String {
    if color {
        text.to_string().red().to_string()
    } else {
        text.to_string()
    }
}
