use serde::{Deserialize, Serialize};

use crate::ids::{LibraryId, LocalId, RemoteKey, StyleRef};
use crate::library::LibraryStats;
use crate::preview;
use crate::style::{StylePayload, StyleRecord, StyleSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionSource {
    Local,
    Remote,
}

/// Opaque payload handed to the host with each suggestion and returned as the
/// run parameter when the user picks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionData {
    pub source: SuggestionSource,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub is_variable: bool,
}

impl SuggestionData {
    /// Identifier space follows the source: local ids resolve in place, remote
    /// ids are keys that need an import.
    pub fn style_ref(&self) -> StyleRef {
        match self.source {
            SuggestionSource::Local => StyleRef::Local(LocalId::new(self.id.clone())),
            SuggestionSource::Remote => StyleRef::Remote(RemoteKey::new(self.id.clone())),
        }
    }
}

/// One entry in the host's parameter suggestion list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub data: SuggestionData,
}

impl SuggestionRecord {
    /// Builds a style suggestion with its preview glyph attached.
    pub fn from_style(record: &StyleRecord) -> Self {
        let source = match record.reference {
            StyleRef::Local(_) => SuggestionSource::Local,
            StyleRef::Remote(_) => SuggestionSource::Remote,
        };
        Self {
            name: record.name.clone(),
            icon: Some(preview::render(record)),
            data: SuggestionData {
                source,
                id: record.reference.as_str().to_string(),
                display_name: Some(display_name(record)),
                is_variable: record.is_variable_bound(),
            },
        }
    }

    /// Builds a library suggestion for the toggle and delete lists.
    ///
    /// `active` is `Some` only for the toggle list, where a checkbox shows the
    /// current state.
    pub fn from_library(
        id: &LibraryId,
        stats: LibraryStats,
        is_remote: bool,
        active: Option<bool>,
    ) -> Self {
        Self {
            name: id.to_string(),
            icon: active.map(preview::checkbox),
            data: SuggestionData {
                source: if is_remote {
                    SuggestionSource::Remote
                } else {
                    SuggestionSource::Local
                },
                id: id.to_string(),
                display_name: Some(format!(
                    "{id} · [{} styles · {}%]",
                    stats.style_count, stats.percent_of_quota
                )),
                is_variable: false,
            },
        }
    }

    /// Text the fuzzy filter matches against.
    pub fn search_text(&self) -> &str {
        self.data.display_name.as_deref().unwrap_or(&self.name)
    }

    /// The record as shown by the host, with the display name as its label.
    pub fn presented(mut self) -> Self {
        if let Some(display_name) = &self.data.display_name {
            self.name = display_name.clone();
        }
        self
    }
}

/// Label shown in the suggestion list, e.g. `Primary/500 · [local]` or
/// `Body · 16/24 · [Brand]`.
pub fn display_name(record: &StyleRecord) -> String {
    let source = match record.source() {
        StyleSource::Local => Some("[local]".to_string()),
        StyleSource::Library(library) => Some(format!("[{library}]")),
        StyleSource::Unstamped => None,
    };
    let meta = match &record.payload {
        StylePayload::Text(metrics) => Some(metrics.to_string()),
        _ => None,
    };
    std::iter::once(record.name.clone())
        .chain(meta)
        .chain(source)
        .collect::<Vec<_>>()
        .join(" · ")
}
