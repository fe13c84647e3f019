//! Host UI ports: toast notifications, parameter suggestions and plugin
//! lifecycle.

use crate::suggestion::SuggestionRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub error: bool,
    pub timeout_ms: Option<u64>,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: false,
            timeout_ms: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: true,
            timeout_ms: None,
        }
    }

    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }
}

pub trait NotifierPort: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Result sink for one parameter-input call.
pub trait SuggestionResultsPort: Send + Sync {
    fn set_suggestions(&self, suggestions: Vec<SuggestionRecord>);
    fn set_loading_message(&self, message: &str);
}

pub trait PluginLifecyclePort: Send + Sync {
    /// Ends the plugin session. Called once on every run path.
    fn close_plugin(&self);
}
