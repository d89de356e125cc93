use std::collections::BTreeMap;

use super::entry::LedgerEntry;

/// Sums a snapshot into per-member signed balances.
///
/// Members with no entries simply have no key in the result. Sum of all map
/// values equals the sum of signed entry amounts (conservation).
pub fn member_balances(entries: &[LedgerEntry]) -> BTreeMap<String, f64> {
    let mut balances: BTreeMap<String, f64> = BTreeMap::new();
    for entry in entries {
        *balances.entry(entry.member.clone()).or_insert(0.0) += entry.signed_amount();
    }
    balances
}

/// Per-member balances for a complete roster, filling zero for members with
/// no recorded movement. Output order follows roster order.
pub fn balances_for_roster(entries: &[LedgerEntry], roster: &[String]) -> Vec<(String, f64)> {
    let balances = member_balances(entries);
    roster
        .iter()
        .map(|member| {
            let balance = balances.get(member).copied().unwrap_or(0.0);
            (member.clone(), balance)
        })
        .collect()
}
