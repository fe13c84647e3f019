//! UI adapters for runs without a host UI: notices and suggestion results go
//! to the log, and plugin close is recorded.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use sl_core::ports::{Notification, NotifierPort, PluginLifecyclePort, SuggestionResultsPort};
use sl_core::SuggestionRecord;
use tracing::{info, warn};

/// Writes notices to the log and keeps them for inspection.
#[derive(Default)]
pub struct LogNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl LogNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }
}

impl NotifierPort for LogNotifier {
    fn notify(&self, notification: Notification) {
        if notification.error {
            warn!(message = %notification.message, "Notify");
        } else {
            info!(message = %notification.message, "Notify");
        }
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(notification);
        }
    }
}

/// What a [`CollectedResults`] sink received.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultEvent {
    Suggestions(Vec<SuggestionRecord>),
    Loading(String),
}

/// Suggestion sink that keeps everything it is given, in order.
#[derive(Default)]
pub struct CollectedResults {
    events: Mutex<Vec<ResultEvent>>,
}

impl CollectedResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ResultEvent> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }

    pub fn last_suggestions(&self) -> Option<Vec<SuggestionRecord>> {
        self.events().into_iter().rev().find_map(|event| match event {
            ResultEvent::Suggestions(suggestions) => Some(suggestions),
            ResultEvent::Loading(_) => None,
        })
    }

    fn push(&self, event: ResultEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl SuggestionResultsPort for CollectedResults {
    fn set_suggestions(&self, suggestions: Vec<SuggestionRecord>) {
        self.push(ResultEvent::Suggestions(suggestions));
    }

    fn set_loading_message(&self, message: &str) {
        self.push(ResultEvent::Loading(message.to_string()));
    }
}

/// Counts close requests.
#[derive(Default)]
pub struct CloseSignal {
    closed: AtomicUsize,
}

impl CloseSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn close_count(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }
}

impl PluginLifecyclePort for CloseSignal {
    fn close_plugin(&self) {
        self.closed.fetch_add(1, Ordering::SeqCst);
        info!("Plugin closed");
    }
}
