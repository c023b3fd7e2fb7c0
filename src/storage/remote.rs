//! Hosted document-service backend: one score document per player in a
//! `leaderboard` collection, with a WebSocket live query pushing the full
//! ordered snapshot on every change.

use super::ScoreStore;
use crate::model::PlayerScore;
use crate::util::warn;
use futures::StreamExt;
use gloo_net::http::Request;
use gloo_net::websocket::{futures::WebSocket, Message};
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

#[derive(Serialize)]
struct ScoreDoc {
    score: u32,
}

const RETRY_BASE_MS: u32 = 1_000;
const RETRY_CAP_MS: u32 = 30_000;

pub struct RemoteScoreStore {
    base: String,
    /// Mirror of the latest snapshot so `get` stays synchronous. Empty
    /// (every name reads 0) until the first snapshot arrives.
    mirror: Rc<RefCell<HashMap<String, u32>>>,
}

impl RemoteScoreStore {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            mirror: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    fn doc_url(&self, name: &str) -> String {
        let encoded: String = js_sys::encode_uri_component(name).into();
        format!("{}/leaderboard/{}", self.base, encoded)
    }

    fn watch_url(&self) -> String {
        format!("{}/leaderboard/watch", ws_base(&self.base))
    }
}

fn ws_base(base: &str) -> String {
    if let Some(rest) = base.strip_prefix("https://") {
        format!("wss://{}", rest)
    } else if let Some(rest) = base.strip_prefix("http://") {
        format!("ws://{}", rest)
    } else {
        base.to_string()
    }
}

impl ScoreStore for RemoteScoreStore {
    fn get(&self, name: &str) -> u32 {
        self.mirror.borrow().get(name).copied().unwrap_or(0)
    }

    fn set(&self, name: &str, score: u32) {
        let url = self.doc_url(name);
        spawn_local(async move {
            let request = match Request::put(&url).json(&ScoreDoc { score }) {
                Ok(req) => req,
                Err(err) => {
                    warn(&format!("score upsert not built: {err}"));
                    return;
                }
            };
            match request.send().await {
                Ok(resp) if resp.ok() => {}
                Ok(resp) => warn(&format!("score upsert rejected: HTTP {}", resp.status())),
                Err(err) => warn(&format!("score upsert failed: {err}")),
            }
        });
    }

    fn subscribe(&self, on_snapshot: Callback<Vec<PlayerScore>>) {
        let url = self.watch_url();
        let mirror = self.mirror.clone();
        spawn_local(async move {
            let mut attempt: u32 = 0;
            loop {
                match WebSocket::open(&url) {
                    Ok(mut socket) => {
                        attempt = 0;
                        while let Some(frame) = socket.next().await {
                            match frame {
                                Ok(Message::Text(text)) => {
                                    match serde_json::from_str::<Vec<PlayerScore>>(&text) {
                                        Ok(entries) => {
                                            let mut map = mirror.borrow_mut();
                                            map.clear();
                                            for e in &entries {
                                                map.insert(e.name.clone(), e.score);
                                            }
                                            drop(map);
                                            on_snapshot.emit(entries);
                                        }
                                        Err(err) => warn(&format!("bad snapshot frame: {err}")),
                                    }
                                }
                                Ok(Message::Bytes(_)) => {}
                                Err(err) => {
                                    warn(&format!("leaderboard watch dropped: {err}"));
                                    break;
                                }
                            }
                        }
                    }
                    Err(err) => warn(&format!("leaderboard watch connect failed: {err}")),
                }
                // Board is stale until the socket is back; capped backoff.
                attempt = attempt.saturating_add(1);
                let delay = RETRY_BASE_MS.saturating_mul(1 << attempt.min(5)).min(RETRY_CAP_MS);
                TimeoutFuture::new(delay).await;
            }
        });
    }

    fn save_board(&self, _entries: &[PlayerScore]) {
        // The service orders the collection; snapshots come back via subscribe.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_endpoint_swaps_to_the_websocket_scheme() {
        let store = RemoteScoreStore::new("https://party.example.dev/api/");
        assert_eq!(
            store.watch_url(),
            "wss://party.example.dev/api/leaderboard/watch"
        );
        let store = RemoteScoreStore::new("http://localhost:8787");
        assert_eq!(store.watch_url(), "ws://localhost:8787/leaderboard/watch");
    }

    #[test]
    fn mirror_reads_zero_until_a_snapshot_lands() {
        let store = RemoteScoreStore::new("http://localhost:8787");
        assert_eq!(store.get("Ann"), 0);
        store.mirror.borrow_mut().insert("Ann".into(), 5);
        assert_eq!(store.get("Ann"), 5);
    }
}
