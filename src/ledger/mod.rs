//! Savings-ledger domain types and snapshot aggregation.

pub mod balances;
pub mod entry;
pub mod records;
pub mod series;

pub use balances::{balances_for_roster, member_balances};
pub use entry::{EntryKind, LedgerEntry};
pub use records::{entries_from_rows, SavingRow};
pub use series::{monthly_cumulative, MonthlyPoint};
