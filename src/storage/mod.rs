//! Persistence port for player scores and leaderboard snapshots, with a
//! localStorage backend and a hosted document-service backend chosen at
//! composition time.

pub mod local;
pub mod remote;

pub use local::LocalScoreStore;
pub use remote::RemoteScoreStore;

use crate::model::PlayerScore;
use std::rc::Rc;
use yew::Callback;

/// Build-time override: when set, scores live in the hosted document
/// service instead of this browser's localStorage.
pub const BOARD_SERVICE_URL: Option<&str> = option_env!("PARTY_BOARD_URL");

/// Storage port for scores and the derived board. Every operation is
/// best-effort: failures are logged and the in-memory state stays
/// authoritative.
pub trait ScoreStore {
    /// Stored score for `name`, 0 if absent. Never fails.
    fn get(&self, name: &str) -> u32;
    /// Creates or overwrites the entry for `name`.
    fn set(&self, name: &str, score: u32);
    /// Delivers full board snapshots: the local backend emits the stored
    /// list once, the hosted backend keeps pushing on every change.
    fn subscribe(&self, on_snapshot: Callback<Vec<PlayerScore>>);
    /// Persists the ranked list. No-op for the hosted backend, which
    /// orders documents server-side.
    fn save_board(&self, entries: &[PlayerScore]);
}

/// Picks the backend for this build.
pub fn score_store() -> Rc<dyn ScoreStore> {
    match BOARD_SERVICE_URL {
        Some(base) => Rc::new(RemoteScoreStore::new(base)),
        None => Rc::new(LocalScoreStore),
    }
}
