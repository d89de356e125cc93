//! Loan interest, sanction, and mutual-aid ("secours") formulas.

pub mod interest;
pub mod records;
pub mod sanctions;
pub mod secours;

pub use interest::{loan_interest, InterestPolicy, LoanKind};
pub use records::{LoanRow, LoanStatus, SupportRow};
pub use sanctions::{sanction_total, SanctionCount, SanctionTariff};
pub use secours::{benefit_amount, BenefitKind, SecoursPolicy};
