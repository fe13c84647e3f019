use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use sl_core::{StyleCategory, SuggestionRecord};
use tokio::sync::Mutex;

/// Token identifying one input request within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct QueryTicket(u64);

/// State for one parameter-input session.
///
/// Holds the merged candidate list per category so only the fuzzy filter
/// reruns per keystroke, and the newest query ticket so results of superseded
/// queries can be dropped. A new session starts empty; nothing is shared
/// between sessions.
#[derive(Default)]
pub struct SuggestionSession {
    candidates: Mutex<HashMap<StyleCategory, Arc<Vec<SuggestionRecord>>>>,
    latest: AtomicU64,
}

impl SuggestionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request. Any earlier ticket becomes stale.
    pub fn issue_ticket(&self) -> QueryTicket {
        QueryTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: QueryTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Returns the memoized candidates for a category, computing them once.
    ///
    /// Concurrent callers for the same session wait for the first computation
    /// instead of repeating it.
    pub async fn candidates_or_load<F, Fut>(
        &self,
        category: StyleCategory,
        load: F,
    ) -> Arc<Vec<SuggestionRecord>>
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Vec<SuggestionRecord>>,
    {
        let mut candidates = self.candidates.lock().await;
        if let Some(cached) = candidates.get(&category) {
            return cached.clone();
        }
        let loaded = Arc::new(load().await);
        candidates.insert(category, loaded.clone());
        loaded
    }
}
