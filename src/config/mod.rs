use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    errors::TontineError,
    finance::{interest::InterestPolicy, sanctions::SanctionTariff, secours::SecoursPolicy},
    schedule::meeting::MeetingRule,
};

/// First month of the running tontine cycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CycleStart {
    pub year: i32,
    pub month: u32,
}

impl CycleStart {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }
}

/// Monthly contribution amounts, which differ before and after a member has
/// received the pot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContributionRule {
    pub before_reception: i64,
    pub after_reception: i64,
}

impl ContributionRule {
    /// Amount due for a member, depending on whether they already received
    /// the pot this cycle.
    pub fn amount_due(&self, has_received_pot: bool) -> i64 {
        if has_received_pot {
            self.after_reception
        } else {
            self.before_reception
        }
    }
}

impl Default for ContributionRule {
    fn default() -> Self {
        Self {
            before_reception: 313,
            after_reception: 331,
        }
    }
}

/// Association-level constants. Every number the computations depend on lives
/// here so the integrator, not the code, resolves the ambiguous ones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TontineConfig {
    /// Ordered roster; index order is the rotation order.
    #[serde(default)]
    pub roster: Vec<String>,
    pub cycle_start: CycleStart,
    /// Full pot handed over per 3-month slot, in whole currency units.
    pub full_pot: i64,
    /// Length of the cumulative savings window, in months.
    pub window_months: usize,
    #[serde(default)]
    pub meeting: MeetingRule,
    #[serde(default)]
    pub contribution: ContributionRule,
    #[serde(default)]
    pub interest: InterestPolicy,
    #[serde(default)]
    pub sanctions: SanctionTariff,
    #[serde(default)]
    pub secours: SecoursPolicy,
}

impl Default for TontineConfig {
    fn default() -> Self {
        Self {
            roster: Vec::new(),
            cycle_start: CycleStart::new(2026, 2),
            full_pot: 7000,
            window_months: 24,
            meeting: MeetingRule::default(),
            contribution: ContributionRule::default(),
            interest: InterestPolicy::default(),
            sanctions: SanctionTariff::default(),
            secours: SecoursPolicy::default(),
        }
    }
}

impl TontineConfig {
    /// Loads configuration from a JSON file, falling back to defaults when
    /// the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, TontineError> {
        if path.exists() {
            let data = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            tracing::debug!(?path, "config file missing, using defaults");
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), TontineError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contribution_depends_on_pot_reception() {
        let rule = ContributionRule::default();
        assert_eq!(rule.amount_due(false), 313);
        assert_eq!(rule.amount_due(true), 331);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = TontineConfig::load_from(Path::new("/nonexistent/tontine.json")).unwrap();
        assert_eq!(config, TontineConfig::default());
    }
}
