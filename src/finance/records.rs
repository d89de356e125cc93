use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::secours::BenefitKind;
use crate::errors::TontineError;
use crate::utils::dates::parse_wire_date;

/// Repayment state of a loan row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LoanStatus {
    #[serde(rename = "en_cours")]
    Outstanding,
    #[serde(rename = "rembourse")]
    Repaid,
}

/// One row of the loans sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRow {
    pub id: String,
    pub member: String,
    pub amount: f64,
    pub date: String,
    pub status: LoanStatus,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl LoanRow {
    /// Normalized issue date, with any timestamp suffix dropped.
    pub fn issued_on(&self) -> Result<NaiveDate, TontineError> {
        parse_wire_date(&self.date)
    }

    pub fn validate(&self) -> Result<(), TontineError> {
        if self.amount < 0.0 {
            return Err(TontineError::NegativeAmount {
                id: self.id.clone(),
                amount: self.amount,
            });
        }
        self.issued_on().map(|_| ())
    }
}

/// One row of the supports ("secours") sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportRow {
    pub id: String,
    pub member: String,
    #[serde(rename = "type")]
    pub kind: BenefitKind,
    pub amount: f64,
    pub date: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl SupportRow {
    pub fn granted_on(&self) -> Result<NaiveDate, TontineError> {
        parse_wire_date(&self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loan_row_parses_and_validates() {
        let json = r#"{
            "id": "loan_3",
            "member": "Hulerich",
            "amount": 500,
            "date": "2026-03-08",
            "status": "en_cours",
            "notes": "projet immo"
        }"#;
        let row: LoanRow = serde_json::from_str(json).unwrap();
        row.validate().unwrap();
        assert_eq!(row.status, LoanStatus::Outstanding);
        assert_eq!(
            row.issued_on().unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 8).unwrap()
        );
    }

    #[test]
    fn unknown_loan_status_is_rejected() {
        let json = r#"{"id":"l","member":"Silvère","amount":10,"date":"2026-03-08","status":"perdu"}"#;
        assert!(serde_json::from_str::<LoanRow>(json).is_err());
    }

    #[test]
    fn support_row_parses_benefit_kind() {
        let json = r#"{
            "id": "sec_1",
            "member": "Mairo",
            "type": "hospitalisation",
            "amount": 250,
            "date": "2026-05-02T08:00:00.000Z"
        }"#;
        let row: SupportRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.kind, BenefitKind::Hospitalization);
        assert_eq!(
            row.granted_on().unwrap(),
            NaiveDate::from_ymd_opt(2026, 5, 2).unwrap()
        );
    }
}
