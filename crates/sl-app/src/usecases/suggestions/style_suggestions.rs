use std::sync::Arc;

use sl_core::ports::StyleCatalogPort;
use sl_core::style::{encode_local_color_variable, EncodeStyle};
use sl_core::{LibraryId, StyleCategory, StyleRecord, SuggestionRecord};
use tracing::{debug, warn};

use crate::usecases::library::LibraryStore;
use crate::usecases::ActiveLibraries;

/// Use case for building the merged candidate list of one style category.
///
/// Order is local styles, then styles from each active library in set order,
/// then local color variables for paint.
pub struct StyleSuggestions {
    catalog: Arc<dyn StyleCatalogPort>,
    store: LibraryStore,
    active: ActiveLibraries,
    include_color_variables: bool,
}

impl StyleSuggestions {
    pub fn new(
        catalog: Arc<dyn StyleCatalogPort>,
        store: LibraryStore,
        active: ActiveLibraries,
        include_color_variables: bool,
    ) -> Self {
        Self {
            catalog,
            store,
            active,
            include_color_variables,
        }
    }

    #[tracing::instrument(name = "usecase.style_suggestions.execute", skip(self))]
    pub async fn execute(&self, category: StyleCategory) -> Vec<SuggestionRecord> {
        let mut records = self.local_records(category);
        records.extend(self.remote_records(category).await);
        if category == StyleCategory::Paint && self.include_color_variables {
            records.extend(self.variable_records());
        }

        debug!(category = %category, count = records.len(), "Built style candidates");
        records.iter().map(SuggestionRecord::from_style).collect()
    }

    fn local_records(&self, category: StyleCategory) -> Vec<StyleRecord> {
        match category {
            StyleCategory::Paint => encode_all_local(&self.catalog.paint_styles()),
            StyleCategory::Text => encode_all_local(&self.catalog.text_styles()),
            StyleCategory::Effect => encode_all_local(&self.catalog.effect_styles()),
            StyleCategory::Grid => encode_all_local(&self.catalog.grid_styles()),
        }
    }

    /// Libraries are read one after another. The open file's own publication is
    /// skipped since its styles are already listed as local. A library that
    /// cannot be read contributes nothing.
    async fn remote_records(&self, category: StyleCategory) -> Vec<StyleRecord> {
        let own = LibraryId::new(self.catalog.file_name());
        let mut records = Vec::new();
        for library in self.active.get().iter().filter(|id| **id != own) {
            match self.store.library_records(library, category).await {
                Ok(found) => records.extend(found),
                Err(err) => {
                    warn!(library = %library, error = %err, "Skipping library that failed to load");
                }
            }
        }
        records
    }

    fn variable_records(&self) -> Vec<StyleRecord> {
        let catalog = &self.catalog;
        catalog
            .color_variables()
            .iter()
            .map(|variable| encode_local_color_variable(variable, |id| catalog.variable_by_id(id)))
            .collect()
    }
}

fn encode_all_local<S: EncodeStyle>(styles: &[S]) -> Vec<StyleRecord> {
    styles.iter().filter_map(EncodeStyle::encode_local).collect()
}
