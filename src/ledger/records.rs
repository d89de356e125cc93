use serde::{Deserialize, Serialize};

use super::entry::{EntryKind, LedgerEntry};
use crate::errors::TontineError;
use crate::utils::dates::parse_wire_date;

/// One row of the savings sheet, as returned by the Apps Script backend.
/// Dates arrive as strings, sometimes with a timestamp suffix.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingRow {
    pub id: String,
    pub member: String,
    pub amount: f64,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl SavingRow {
    /// Validates and converts a wire row into a domain entry.
    pub fn into_entry(self) -> Result<LedgerEntry, TontineError> {
        let date = parse_wire_date(&self.date)?;
        let mut entry = LedgerEntry::new(self.id, self.member, self.amount, date, self.kind)?;
        if !self.notes.is_empty() {
            entry.notes = Some(self.notes);
        }
        Ok(entry)
    }
}

/// Converts a fetched snapshot wholesale, failing on the first invalid row.
pub fn entries_from_rows(rows: Vec<SavingRow>) -> Result<Vec<LedgerEntry>, TontineError> {
    rows.into_iter().map(SavingRow::into_entry).collect()
}
