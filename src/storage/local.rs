//! localStorage backend: one `clicks_{name}` key per player, board
//! snapshot under `leaderboard` as a JSON array.

use super::ScoreStore;
use crate::model::PlayerScore;
use crate::util::warn;
use web_sys::Storage;
use yew::Callback;

pub const BOARD_KEY: &str = "leaderboard";

pub fn score_key(name: &str) -> String {
    format!("clicks_{}", name)
}

/// Decimal score parse; absent or unreadable values count as 0.
fn parse_score(raw: Option<String>) -> u32 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

/// Stored snapshot parse; corrupt JSON degrades to an empty board.
fn parse_board(raw: &str) -> Vec<PlayerScore> {
    serde_json::from_str(raw).unwrap_or_default()
}

fn backend() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub struct LocalScoreStore;

impl ScoreStore for LocalScoreStore {
    fn get(&self, name: &str) -> u32 {
        match backend() {
            Some(store) => parse_score(store.get_item(&score_key(name)).ok().flatten()),
            None => 0,
        }
    }

    fn set(&self, name: &str, score: u32) {
        let Some(store) = backend() else {
            return;
        };
        if store.set_item(&score_key(name), &score.to_string()).is_err() {
            warn("score write dropped: localStorage unavailable or full");
        }
    }

    fn subscribe(&self, on_snapshot: Callback<Vec<PlayerScore>>) {
        let entries = match backend().and_then(|s| s.get_item(BOARD_KEY).ok().flatten()) {
            Some(raw) => parse_board(&raw),
            None => Vec::new(),
        };
        on_snapshot.emit(entries);
    }

    fn save_board(&self, entries: &[PlayerScore]) {
        let Some(store) = backend() else {
            return;
        };
        match serde_json::to_string(entries) {
            Ok(json) => {
                if store.set_item(BOARD_KEY, &json).is_err() {
                    warn("leaderboard write dropped: localStorage unavailable or full");
                }
            }
            Err(err) => warn(&format!("leaderboard serialize failed: {err}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_garbled_scores_read_as_zero() {
        assert_eq!(parse_score(None), 0);
        assert_eq!(parse_score(Some(String::new())), 0);
        assert_eq!(parse_score(Some("not a number".into())), 0);
        assert_eq!(parse_score(Some("-3".into())), 0);
    }

    #[test]
    fn stored_scores_read_back() {
        assert_eq!(parse_score(Some("7".into())), 7);
        assert_eq!(parse_score(Some(" 42 ".into())), 42);
    }

    #[test]
    fn board_json_matches_the_stored_shape() {
        let entries = parse_board(r#"[{"name":"Ann","score":12},{"name":"Bo","score":8}]"#);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Ann");
        assert_eq!(entries[0].score, 12);
        assert_eq!(entries[1].name, "Bo");
        assert_eq!(entries[1].score, 8);
    }

    #[test]
    fn corrupt_board_degrades_to_empty() {
        assert!(parse_board("{oops").is_empty());
        assert!(parse_board("").is_empty());
        assert!(parse_board(r#"{"name":"Ann"}"#).is_empty());
    }

    #[test]
    fn score_keys_are_namespaced_by_nickname() {
        assert_eq!(score_key("Bo"), "clicks_Bo");
    }
}
