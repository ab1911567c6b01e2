mod trakt;
mod types;

pub use trakt::TraktClient;
pub use types::{Show, ShowIds, SyncShows};
