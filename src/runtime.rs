//! Plugin runtime: the two entry points the host calls.
//!
//! The host opens one session per plugin invocation. While the user fills
//! in parameters it sends input events, and once a suggestion is confirmed
//! it sends a single run event.

use sl_app::{App, AppDeps, DispatchError, RunRequest, SuggestionSession};
use sl_core::ports::SuggestionResultsPort;

/// One plugin session.
///
/// Suggestion lists are computed at most once per category for the lifetime
/// of the runtime, so a new runtime should be created per invocation.
pub struct PluginRuntime {
    app: App,
    session: SuggestionSession,
}

impl PluginRuntime {
    pub fn new(deps: AppDeps) -> Self {
        Self {
            app: App::new(deps),
            session: SuggestionSession::new(),
        }
    }

    /// Parameter-input event: `key` names the parameter being filled and
    /// `query` is what the user has typed so far.
    pub async fn on_input(
        &self,
        key: &str,
        query: &str,
        results: &dyn SuggestionResultsPort,
    ) -> anyhow::Result<()> {
        self.app
            .handle_input()
            .execute(&self.session, key, query, results)
            .await
    }

    /// Run event. The plugin is closed afterwards whatever the outcome; the
    /// user has already been notified of any error returned here.
    pub async fn on_run(&self, request: &RunRequest) -> Result<(), DispatchError> {
        self.app.run_command().execute(request).await
    }

    /// Run event as the host's JSON payload:
    /// `{"command": "fill", "parameters": {"fill": {...}}}`.
    pub async fn on_run_json(&self, payload: &str) -> anyhow::Result<()> {
        let request: RunRequest = serde_json::from_str(payload)?;
        self.on_run(&request).await?;
        Ok(())
    }
}
