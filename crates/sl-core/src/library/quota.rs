/// Client storage allotment per plugin, shared by every stored library.
pub const QUOTA_BYTES: u64 = 1_000_000;

/// Share of the quota, rounded to one decimal place.
pub fn percent_of_quota(bytes: u64) -> f64 {
    (bytes as f64 / QUOTA_BYTES as f64 * 1000.0).round() / 10.0
}

/// Bytes left if `used` bytes are already stored.
pub fn remaining_quota(used: u64) -> u64 {
    QUOTA_BYTES.saturating_sub(used)
}

/// Summary of one stored library.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LibraryStats {
    pub style_count: usize,
    pub bytes: u64,
    pub percent_of_quota: f64,
}

impl LibraryStats {
    pub fn new(style_count: usize, bytes: u64) -> Self {
        Self {
            style_count,
            bytes,
            percent_of_quota: percent_of_quota(bytes),
        }
    }
}
