use serde::{Deserialize, Serialize};

use crate::errors::TontineError;

/// Qualifying life events for a mutual-aid payout. Wire tags match the
/// spreadsheet's supports sheet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BenefitKind {
    #[serde(rename = "naissance")]
    Birth,
    #[serde(rename = "mariage")]
    Marriage,
    #[serde(rename = "hospitalisation")]
    Hospitalization,
    #[serde(rename = "deces")]
    Bereavement,
}

impl BenefitKind {
    pub fn from_tag(tag: &str) -> Result<Self, TontineError> {
        match tag {
            "naissance" => Ok(Self::Birth),
            "mariage" => Ok(Self::Marriage),
            "hospitalisation" => Ok(Self::Hospitalization),
            "deces" => Ok(Self::Bereavement),
            other => Err(TontineError::UnknownTag {
                field: "benefit kind",
                value: other.to_string(),
            }),
        }
    }
}

/// Contribution base ("assiette") and per-event percentage table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SecoursPolicy {
    pub assiette: f64,
    pub birth_percent: f64,
    pub marriage_percent: f64,
    pub hospitalization_percent: f64,
    pub bereavement_percent: f64,
}

impl SecoursPolicy {
    pub fn percent_for(&self, kind: BenefitKind) -> f64 {
        match kind {
            BenefitKind::Birth => self.birth_percent,
            BenefitKind::Marriage => self.marriage_percent,
            BenefitKind::Hospitalization => self.hospitalization_percent,
            BenefitKind::Bereavement => self.bereavement_percent,
        }
    }
}

impl Default for SecoursPolicy {
    fn default() -> Self {
        Self {
            assiette: 1000.0,
            birth_percent: 0.5,
            marriage_percent: 0.5,
            hospitalization_percent: 0.25,
            bereavement_percent: 1.0,
        }
    }
}

/// Payout for one qualifying event.
pub fn benefit_amount(kind: BenefitKind, policy: SecoursPolicy) -> f64 {
    policy.assiette * policy.percent_for(kind)
}
