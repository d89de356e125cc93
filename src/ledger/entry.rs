use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::TontineError;

/// Direction of a savings movement. Wire tags follow the spreadsheet schema.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EntryKind {
    #[serde(rename = "depot")]
    Deposit,
    #[serde(rename = "retrait")]
    Withdrawal,
}

/// One immutable savings movement, as aggregated by this crate. The backing
/// store owns creation and persistence; the core only sums over snapshots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerEntry {
    pub id: String,
    pub member: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub kind: EntryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl LedgerEntry {
    pub fn new(
        id: impl Into<String>,
        member: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        kind: EntryKind,
    ) -> Result<Self, TontineError> {
        let id = id.into();
        if amount < 0.0 {
            return Err(TontineError::NegativeAmount { id, amount });
        }
        Ok(Self {
            id,
            member: member.into(),
            amount,
            date,
            kind,
            notes: None,
        })
    }

    /// Signed contribution to a balance: positive for deposits, negative for
    /// withdrawals.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            EntryKind::Deposit => self.amount,
            EntryKind::Withdrawal => -self.amount,
        }
    }
}
