//! Core data model for the party site: the click-game session machine,
//! the leaderboard ranking, and the content constants the views share.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

/// Local-time party start; also the lower bound for RSVP arrival times.
pub const PARTY_START_ISO: &str = "2027-03-27T14:00:00";

/// Party photos live under /images as photo_1.jpg ..= photo_{PHOTO_COUNT}.jpg.
pub const PHOTO_COUNT: u32 = 50;

pub fn photo_path(n: u32) -> String {
    format!("/images/photo_{}.jpg", n)
}

/// One player's best score. `name` is unique across the board; re-entry of
/// the same name overwrites the previous score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub name: String,
    pub score: u32,
}

/// Ranking of all known players, highest score first. Equal scores keep
/// their existing relative order, so whoever reached a score earlier stays
/// ahead and a new name joins after existing entries with the same score.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Leaderboard {
    entries: Vec<PlayerScore>,
}

impl Leaderboard {
    /// Normalizes a full snapshot (stored list or backend push) into rank order.
    pub fn from_entries(mut entries: Vec<PlayerScore>) -> Self {
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        Self { entries }
    }

    pub fn entries(&self) -> &[PlayerScore] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts or replaces the entry for `name`, then re-sorts.
    pub fn upsert(&mut self, name: &str, score: u32) {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.score = score,
            None => self.entries.push(PlayerScore {
                name: name.to_string(),
                score,
            }),
        }
        // Stable sort: ties keep their current order.
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
    }
}

// ---------------- Session reducer & actions -----------------

/// Milestone cadence for the celebration signal.
pub const CELEBRATION_EVERY: u32 = 10;

/// Click-game session state. Idle until a nickname is accepted; the
/// leaderboard snapshot lives here too so pushed updates replace it whole.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameState {
    pub nickname: String,
    pub clicks: u32,
    pub started: bool,
    pub board: Leaderboard,
    /// Total celebration signals fired so far; the view edge-detects increments.
    pub celebrations: u32,
}

#[derive(Clone, Debug)]
pub enum GameAction {
    /// Begin a session. Empty or whitespace-only nicknames leave the state untouched.
    Start { nickname: String, prior_score: u32 },
    /// One cake click. Ignored while idle.
    Click,
    /// Full leaderboard snapshot from the storage backend (initial load or push).
    BoardSnapshot(Vec<PlayerScore>),
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GameAction::*;
        let mut new = (*self).clone();
        match action {
            Start {
                nickname,
                prior_score,
            } => {
                let trimmed = nickname.trim();
                if trimmed.is_empty() {
                    return self;
                }
                new.nickname = trimmed.to_string();
                new.clicks = prior_score;
                new.started = true;
            }
            Click => {
                if !new.started {
                    return self;
                }
                new.clicks = new.clicks.saturating_add(1);
                if new.clicks % CELEBRATION_EVERY == 0 {
                    new.celebrations = new.celebrations.saturating_add(1);
                }
                let name = new.nickname.clone();
                new.board.upsert(&name, new.clicks);
            }
            BoardSnapshot(entries) => {
                new.board = Leaderboard::from_entries(entries);
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dispatch(state: GameState, action: GameAction) -> GameState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn active(nickname: &str, prior: u32) -> GameState {
        dispatch(
            GameState::default(),
            GameAction::Start {
                nickname: nickname.into(),
                prior_score: prior,
            },
        )
    }

    fn entry(name: &str, score: u32) -> PlayerScore {
        PlayerScore {
            name: name.into(),
            score,
        }
    }

    #[test]
    fn click_count_matches_number_of_clicks() {
        let mut state = active("Ann", 0);
        for _ in 0..25 {
            state = dispatch(state, GameAction::Click);
        }
        assert_eq!(state.clicks, 25);
        // Milestones at 10 and 20, none at 25.
        assert_eq!(state.celebrations, 2);
    }

    #[test]
    fn clicks_are_ignored_while_idle() {
        let state = dispatch(GameState::default(), GameAction::Click);
        assert_eq!(state.clicks, 0);
        assert!(state.board.is_empty());
        assert_eq!(state.celebrations, 0);
    }

    #[test]
    fn blank_nickname_does_not_start_a_session() {
        for raw in ["", "   ", "\t \n"] {
            let state = dispatch(
                GameState::default(),
                GameAction::Start {
                    nickname: raw.into(),
                    prior_score: 3,
                },
            );
            assert!(!state.started, "{raw:?} should be rejected");
            assert_eq!(state.clicks, 0);
        }
    }

    #[test]
    fn nickname_is_trimmed_on_start() {
        let state = active("  Bo  ", 0);
        assert!(state.started);
        assert_eq!(state.nickname, "Bo");
    }

    #[test]
    fn prior_score_resumes_and_first_click_lands_on_the_board() {
        let mut state = active("Bo", 7);
        assert_eq!(state.clicks, 7);
        // The board entry only appears once the player actually clicks.
        assert!(state.board.is_empty());

        state = dispatch(state, GameAction::Click);
        assert_eq!(state.clicks, 8);
        assert_eq!(state.board.entries(), &[entry("Bo", 8)]);
    }

    #[test]
    fn clicking_ranks_the_player_among_existing_entries() {
        let mut state = active("Bo", 7);
        state = dispatch(
            state,
            GameAction::BoardSnapshot(vec![entry("Zu", 12), entry("Al", 3)]),
        );
        state = dispatch(state, GameAction::Click);
        assert_eq!(
            state.board.entries(),
            &[entry("Zu", 12), entry("Bo", 8), entry("Al", 3)]
        );
    }

    #[test]
    fn celebrations_fire_only_on_multiples_of_ten() {
        let mut state = active("Ann", 9);
        state = dispatch(state, GameAction::Click);
        assert_eq!(state.clicks, 10);
        assert_eq!(state.celebrations, 1);
        state = dispatch(state, GameAction::Click);
        assert_eq!(state.clicks, 11);
        assert_eq!(state.celebrations, 1);
    }

    #[test]
    fn upsert_replaces_instead_of_duplicating() {
        let mut board = Leaderboard::default();
        board.upsert("Ann", 4);
        board.upsert("Ann", 9);
        assert_eq!(board.entries(), &[entry("Ann", 9)]);
    }

    #[test]
    fn equal_scores_keep_the_earlier_reacher_first() {
        let mut board = Leaderboard::default();
        board.upsert("Ann", 5);
        board.upsert("Bo", 3);
        board.upsert("Bo", 5);
        assert_eq!(board.entries(), &[entry("Ann", 5), entry("Bo", 5)]);

        board.upsert("Cy", 5);
        assert_eq!(
            board.entries(),
            &[entry("Ann", 5), entry("Bo", 5), entry("Cy", 5)]
        );

        board.upsert("Bo", 6);
        assert_eq!(
            board.entries(),
            &[entry("Bo", 6), entry("Ann", 5), entry("Cy", 5)]
        );
    }

    #[test]
    fn snapshot_replaces_the_whole_board_and_normalizes_order() {
        let mut state = active("Bo", 0);
        state = dispatch(state, GameAction::BoardSnapshot(vec![entry("Old", 99)]));
        state = dispatch(
            state,
            GameAction::BoardSnapshot(vec![entry("Lo", 1), entry("Hi", 8)]),
        );
        assert_eq!(state.board.entries(), &[entry("Hi", 8), entry("Lo", 1)]);
    }

    proptest! {
        #[test]
        fn ranking_stays_descending_and_unique(
            ops in proptest::collection::vec(("[a-f]{1,3}", 0u32..1000), 1..50)
        ) {
            let mut board = Leaderboard::default();
            for (name, score) in &ops {
                board.upsert(name, *score);
            }
            let entries = board.entries();
            prop_assert!(entries.windows(2).all(|w| w[0].score >= w[1].score));
            let mut names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
            names.sort_unstable();
            names.dedup();
            prop_assert_eq!(names.len(), entries.len());
        }
    }
}
