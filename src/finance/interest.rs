use serde::{Deserialize, Serialize};

use crate::errors::TontineError;

/// The two loan schemes offered by the association. Wire tags match the
/// portal's loan form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LoanKind {
    /// 3-month declining scheme at a monthly rate.
    #[serde(rename = "type1")]
    DecliningThreeMonth,
    /// Single flat rate over the loan term.
    #[serde(rename = "type2")]
    Flat,
}

impl LoanKind {
    pub fn from_tag(tag: &str) -> Result<Self, TontineError> {
        match tag {
            "type1" => Ok(Self::DecliningThreeMonth),
            "type2" => Ok(Self::Flat),
            other => Err(TontineError::UnknownTag {
                field: "loan kind",
                value: other.to_string(),
            }),
        }
    }
}

/// Interest rates. `flat_term_multiplier` has varied across statute revisions
/// (1 then 6), so it is configuration rather than a literal; the integrator
/// decides which revision applies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct InterestPolicy {
    pub monthly_rate: f64,
    pub flat_rate: f64,
    pub flat_term_multiplier: f64,
}

impl Default for InterestPolicy {
    fn default() -> Self {
        Self {
            monthly_rate: 0.02,
            flat_rate: 0.03,
            flat_term_multiplier: 6.0,
        }
    }
}

const DECLINING_MONTHS: f64 = 3.0;

/// Interest owed on a loan principal under the selected scheme.
pub fn loan_interest(principal: f64, kind: LoanKind, policy: InterestPolicy) -> f64 {
    match kind {
        LoanKind::DecliningThreeMonth => principal * policy.monthly_rate * DECLINING_MONTHS,
        LoanKind::Flat => principal * policy.flat_rate * policy.flat_term_multiplier,
    }
}
