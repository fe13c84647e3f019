use anyhow::{Context, Result};
use sl_core::LibraryId;
use tracing::info;

use crate::usecases::ActiveLibraries;

/// Use case for switching a library on or off in the open file.
pub struct ToggleLibrary {
    active: ActiveLibraries,
}

impl ToggleLibrary {
    pub fn new(active: ActiveLibraries) -> Self {
        Self { active }
    }

    /// Returns whether the library is active afterwards.
    #[tracing::instrument(name = "usecase.toggle_library.execute", skip(self), fields(library = %library))]
    pub fn execute(&self, library: &LibraryId) -> Result<bool> {
        let active = self
            .active
            .toggle(library)
            .context("Failed to update active libraries")?;
        info!(library = %library, active, "Toggled library");
        Ok(active)
    }
}
