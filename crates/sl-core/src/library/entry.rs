use serde::{Deserialize, Serialize};

use super::LibraryStats;
use crate::style::{StyleCategory, StyleRecord};

/// One file's published style catalog, as stored under its library id.
///
/// `byte_size` is the UTF-8 length of the entry's own JSON form, recorded when
/// the entry is sealed so usage can be summed without re-measuring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LibraryEntry {
    #[serde(default)]
    pub paint: Vec<StyleRecord>,
    #[serde(default)]
    pub text: Vec<StyleRecord>,
    #[serde(default)]
    pub effect: Vec<StyleRecord>,
    #[serde(default)]
    pub grid: Vec<StyleRecord>,
    /// Milliseconds since the Unix epoch.
    #[serde(rename = "saved", default)]
    pub saved_at: i64,
    #[serde(rename = "bytes", default)]
    pub byte_size: u64,
}

/// A library entry together with the exact JSON that will be stored.
#[derive(Debug, Clone)]
pub struct SealedEntry {
    pub entry: LibraryEntry,
    pub json: String,
}

impl LibraryEntry {
    pub fn new(saved_at: i64) -> Self {
        Self {
            saved_at,
            ..Self::default()
        }
    }

    pub fn records(&self, category: StyleCategory) -> &[StyleRecord] {
        match category {
            StyleCategory::Paint => &self.paint,
            StyleCategory::Text => &self.text,
            StyleCategory::Effect => &self.effect,
            StyleCategory::Grid => &self.grid,
        }
    }

    /// Moves the records of one category out of the entry.
    pub fn take_records(&mut self, category: StyleCategory) -> Vec<StyleRecord> {
        std::mem::take(match category {
            StyleCategory::Paint => &mut self.paint,
            StyleCategory::Text => &mut self.text,
            StyleCategory::Effect => &mut self.effect,
            StyleCategory::Grid => &mut self.grid,
        })
    }

    /// Files a record under its own category.
    pub fn push(&mut self, record: StyleRecord) {
        match record.category() {
            StyleCategory::Paint => self.paint.push(record),
            StyleCategory::Text => self.text.push(record),
            StyleCategory::Effect => self.effect.push(record),
            StyleCategory::Grid => self.grid.push(record),
        }
    }

    pub fn style_count(&self) -> usize {
        self.paint.len() + self.text.len() + self.effect.len() + self.grid.len()
    }

    pub fn stats(&self) -> LibraryStats {
        LibraryStats::new(self.style_count(), self.byte_size)
    }

    /// Serializes the entry with `byte_size` equal to the length of the result.
    ///
    /// Writing the size can change the size, so this iterates until the
    /// number stops moving. It settles after at most a couple of rounds since
    /// only the digit count of `byte_size` can shift the length.
    pub fn seal(mut self) -> Result<SealedEntry, serde_json::Error> {
        let mut json = serde_json::to_string(&self)?;
        while json.len() as u64 != self.byte_size {
            self.byte_size = json.len() as u64;
            json = serde_json::to_string(&self)?;
        }
        Ok(SealedEntry { entry: self, json })
    }
}
