//! Library domain: stored entries, quota math, publish privacy and the
//! per-file set of active libraries.

mod active_set;
mod entry;
mod privacy;
mod quota;

pub use active_set::ActiveLibrarySet;
pub use entry::{LibraryEntry, SealedEntry};
pub use privacy::is_public_style_name;
pub use quota::{percent_of_quota, remaining_quota, LibraryStats, QUOTA_BYTES};
