//! Session-scoped history of recorded BMI calculations.
//!
//! The log lives exactly as long as one interactive session: it is
//! created empty, appended to on explicit save, cleared only by explicit
//! reset, and dropped at session end. The CSV export is the one artifact
//! that outlives it.

use crate::{BmiResult, HistoryEntry, Result};
use chrono::{DateTime, Utc};
use std::io::Write;
use std::path::Path;

/// Conventional file name for the exported history
pub const EXPORT_FILE_NAME: &str = "bmi_history.csv";

/// MIME type a presentation layer should attach when offering the export
pub const EXPORT_MIME_TYPE: &str = "text/csv";

const EXPORT_HEADER: [&str; 3] = ["Time", "BMI", "Category"];

/// CSV row format for exported entries
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    #[serde(rename = "Time")]
    time: String,
    #[serde(rename = "BMI")]
    bmi: String,
    #[serde(rename = "Category")]
    category: String,
}

impl From<&HistoryEntry> for CsvRow {
    fn from(entry: &HistoryEntry) -> Self {
        CsvRow {
            time: entry.recorded_at.to_rfc3339(),
            bmi: format!("{:.2}", entry.value),
            category: entry.category.label().to_string(),
        }
    }
}

/// Append-only log of BMI calculations for the current session
#[derive(Clone, Debug, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// Create an empty log for a new session
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry to the end of the log
    ///
    /// No dedup and no capacity limit; insertion order is preserved.
    pub fn append(&mut self, entry: HistoryEntry) {
        tracing::debug!("recorded entry {} ({} {})", entry.id, entry.value, entry.category);
        self.entries.push(entry);
    }

    /// Record a computed result, stamped at `recorded_at`
    ///
    /// Convenience over [`append`](Self::append); returns the stored entry.
    pub fn record(&mut self, result: &BmiResult, recorded_at: DateTime<Utc>) -> HistoryEntry {
        let entry = HistoryEntry::from_result(result, recorded_at);
        self.append(entry.clone());
        entry
    }

    /// Last `n` entries, most recent first; non-destructive
    pub fn list_recent(&self, n: usize) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().take(n).collect()
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry; there is no undo within the session
    pub fn clear(&mut self) {
        tracing::info!("cleared {} history entries", self.entries.len());
        self.entries.clear();
    }

    /// Serialize the full log as CSV, oldest first
    ///
    /// Writes the `Time,BMI,Category` header followed by one row per
    /// entry in insertion order. The header is written even when the log
    /// is empty.
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(writer);

        // serialize only emits the header alongside the first row, so an
        // empty log needs it written explicitly
        if self.entries.is_empty() {
            writer.write_record(EXPORT_HEADER)?;
        }

        for entry in &self.entries {
            writer.serialize(CsvRow::from(entry))?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Write the CSV export to a file, creating parent directories
    ///
    /// Returns the number of entries written. Callers conventionally
    /// name the file [`EXPORT_FILE_NAME`].
    pub fn export_csv_file(&self, path: &Path) -> Result<usize> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::File::create(path)?;
        self.export_csv(&file)?;
        file.sync_all()?;

        tracing::info!("exported {} history entries to {:?}", self.entries.len(), path);
        Ok(self.entries.len())
    }
}
