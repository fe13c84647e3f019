//! User-facing notice and status text.

use sl_core::library::LibraryStats;
use sl_core::LibraryId;

pub const LOADING_LIBRARIES: &str = "Loading available Styles";
pub const NO_STYLES: &str = "No styles available in this file";
pub const NO_LIBRARIES_TO_TOGGLE: &str = "'Publish Library Styles' in other files to see them here.";
pub const NO_LIBRARIES_TO_REMOVE: &str = "No published libraries to remove.";

pub const QUOTA_EXCEEDED: &str =
    "Cannot Publish. Plugin storage full. Please 'Remove Library Styles' to free up space.";
pub const EMPTY_SELECTION: &str = "Select at least one layer to apply a style.";
pub const STYLE_UNAVAILABLE: &str = "Style not available. Its library may have been unpublished.";
pub const INVALID_COMMAND: &str = "Error: Invalid Command";

pub fn published(library: &LibraryId, stats: &LibraryStats, updated: bool) -> String {
    let updating = if updated { "Updating " } else { "" };
    format!(
        "{updating}Published Library Style as '{library}' ({} styles · {}% of storage). Now available in 'Toggle Library Styles'.",
        stats.style_count, stats.percent_of_quota
    )
}

pub fn toggled(library: &LibraryId, active: bool) -> String {
    let state = if active { "ON" } else { "OFF" };
    format!("Library Styles from '{library}' are toggled {state} in this file.")
}

pub fn removed(library: &LibraryId) -> String {
    format!("Deleted Library Style '{library}'")
}

pub fn missing_parameter(command: &str) -> String {
    format!("Error: No selection made for '{command}'")
}

pub fn failed(reason: &str) -> String {
    format!("Error: {reason}")
}
