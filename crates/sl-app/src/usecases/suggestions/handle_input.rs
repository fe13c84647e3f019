use sl_core::ports::SuggestionResultsPort;
use sl_core::suggestion::fuzzy_filter;
use sl_core::{Command, StyleCategory, SuggestionRecord};
use tracing::{debug, warn};

use super::{QueryTicket, StyleSuggestions, SuggestionSession};
use crate::messages;
use crate::usecases::library::{LibraryListMode, ListLibraries};

/// Use case answering one parameter-input request.
///
/// Routes the input key to the style or library list, filters it with the
/// query and hands the result to the host. Results for a query that was
/// superseded while loading are dropped.
pub struct HandleInput {
    styles: StyleSuggestions,
    libraries: ListLibraries,
}

impl HandleInput {
    pub fn new(styles: StyleSuggestions, libraries: ListLibraries) -> Self {
        Self { styles, libraries }
    }

    #[tracing::instrument(name = "usecase.handle_input.execute", skip(self, session, results))]
    pub async fn execute(
        &self,
        session: &SuggestionSession,
        key: &str,
        query: &str,
        results: &dyn SuggestionResultsPort,
    ) -> anyhow::Result<()> {
        let ticket = session.issue_ticket();
        let command = match key.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                warn!(error = %err, "Ignoring input for unknown parameter");
                return Ok(());
            }
        };

        match command {
            Command::Publish => Ok(()),
            Command::Toggle => {
                self.library_input(session, ticket, LibraryListMode::Toggle, query, results)
                    .await
            }
            Command::Delete => {
                self.library_input(session, ticket, LibraryListMode::Remove, query, results)
                    .await
            }
            Command::Fill | Command::Stroke | Command::Text | Command::Effect | Command::Grid => {
                let category = command.category().unwrap_or(StyleCategory::Paint);
                self.style_input(session, ticket, category, query, results)
                    .await;
                Ok(())
            }
        }
    }

    async fn style_input(
        &self,
        session: &SuggestionSession,
        ticket: QueryTicket,
        category: StyleCategory,
        query: &str,
        results: &dyn SuggestionResultsPort,
    ) {
        let candidates = session
            .candidates_or_load(category, || self.styles.execute(category))
            .await;
        if !session.is_current(ticket) {
            debug!(category = %category, "Dropping suggestions for superseded query");
            return;
        }
        if candidates.is_empty() {
            results.set_loading_message(messages::NO_STYLES);
            return;
        }
        results.set_suggestions(search(query, candidates.to_vec()));
    }

    async fn library_input(
        &self,
        session: &SuggestionSession,
        ticket: QueryTicket,
        mode: LibraryListMode,
        query: &str,
        results: &dyn SuggestionResultsPort,
    ) -> anyhow::Result<()> {
        results.set_loading_message(messages::LOADING_LIBRARIES);
        let listings = self.libraries.execute(mode).await?;
        if !session.is_current(ticket) {
            debug!(?mode, "Dropping library list for superseded query");
            return Ok(());
        }
        if listings.is_empty() {
            results.set_loading_message(match mode {
                LibraryListMode::Toggle => messages::NO_LIBRARIES_TO_TOGGLE,
                LibraryListMode::Remove => messages::NO_LIBRARIES_TO_REMOVE,
            });
            return Ok(());
        }

        let suggestions = listings
            .iter()
            .map(|listing| {
                let checkbox = (mode == LibraryListMode::Toggle).then_some(listing.active);
                SuggestionRecord::from_library(&listing.id, listing.stats, listing.is_remote, checkbox)
            })
            .collect();
        results.set_suggestions(search(query, suggestions));
        Ok(())
    }
}

/// Filters on the display label and presents matches under it.
fn search(query: &str, suggestions: Vec<SuggestionRecord>) -> Vec<SuggestionRecord> {
    fuzzy_filter(query, suggestions, SuggestionRecord::search_text)
        .into_iter()
        .map(SuggestionRecord::presented)
        .collect()
}
