use super::{PaintLayer, StyleCategory, StylePayload};
use crate::ids::{LibraryId, LocalId, StyleRef};

/// Compact description of one style, enough to preview it and to resolve it again.
///
/// In memory the record is a plain struct; the positional array form used for
/// storage lives in [`super::wire`].
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRecord {
    pub reference: StyleRef,
    pub name: String,
    pub payload: StylePayload,
    /// Library the record was read from. Stamped at merge time only.
    pub library: Option<LibraryId>,
}

/// Where a record came from, as seen by the suggestion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleSource<'a> {
    /// Defined in the open file; resolvable without import.
    Local,
    /// Read from an active library's stored entry.
    Library(&'a LibraryId),
    /// Freshly encoded for publication, not yet attributed.
    Unstamped,
}

impl StyleRecord {
    pub fn new(reference: StyleRef, name: impl Into<String>, payload: StylePayload) -> Self {
        Self {
            reference,
            name: name.into(),
            payload,
            library: None,
        }
    }

    pub fn category(&self) -> StyleCategory {
        self.payload.category()
    }

    pub fn source(&self) -> StyleSource<'_> {
        match (&self.reference, &self.library) {
            (StyleRef::Local(_), _) => StyleSource::Local,
            (StyleRef::Remote(_), Some(library)) => StyleSource::Library(library),
            (StyleRef::Remote(_), None) => StyleSource::Unstamped,
        }
    }

    /// Rewrites the record to point at the session-local id.
    pub fn localized(mut self, id: LocalId) -> Self {
        self.reference = StyleRef::Local(id);
        self.library = None;
        self
    }

    /// Attributes a remote record to the library it was read from.
    pub fn stamped(mut self, library: LibraryId) -> Self {
        if !self.reference.is_local() {
            self.library = Some(library);
        }
        self
    }

    /// True when the head paint layer is bound to a color variable.
    pub fn is_variable_bound(&self) -> bool {
        matches!(
            &self.payload,
            StylePayload::Paint(layers) if matches!(layers.first(), Some(PaintLayer::Variable { .. }))
        )
    }
}
