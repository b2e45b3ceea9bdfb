//! Language breakdown
//!
//! Turns summed byte counts into the ranked percentage list shown on the
//! page. The arithmetic (rounding, top-5 cut, "Other" fold, forced
//! designated language and overflow deduction) is order-sensitive; keep
//! the steps in this order.

use crate::domain::entities::{LanguageShare, LanguageTotals};

/// Name of the bucket holding everything outside the top entries
pub const OTHER: &str = "Other";

/// Languages listed individually before the rest fold into [`OTHER`]
pub const TOP_LANGUAGES: usize = 5;

/// Where a missing designated language is inserted
pub const DESIGNATED_POSITION: usize = 2;

/// Floor for the inserted designated-language share
pub const DESIGNATED_MIN_SHARE: u32 = 3;

/// Nominal inserted share (5% of 100)
pub const DESIGNATED_NOMINAL_SHARE: u32 = 5;

/// Shown when no language bytes are available at all. Sums to 100.
pub fn fallback_languages() -> Vec<LanguageShare> {
    [
        ("Java", 38),
        ("Python", 26),
        ("TypeScript", 16),
        ("JavaScript", 12),
        ("CSS", 5),
        (OTHER, 3),
    ]
    .into_iter()
    .map(|(name, percent)| LanguageShare::new(name, percent))
    .collect()
}

/// Rank `totals` into percentage shares, always including `designated`.
pub fn language_shares(mut totals: LanguageTotals, designated: &str) -> Vec<LanguageShare> {
    if totals.total_bytes() == 0 {
        return fallback_languages();
    }

    totals.ensure(designated);

    let sum = totals.total_bytes().max(1);
    let mut ranked: Vec<LanguageShare> = totals
        .iter()
        .map(|(name, bytes)| LanguageShare::new(name, round_percent(bytes, sum)))
        .collect();
    // stable: ties keep first-seen order
    ranked.sort_by(|a, b| b.percent.cmp(&a.percent));

    let other: u32 = ranked.iter().skip(TOP_LANGUAGES).map(|s| s.percent).sum();
    ranked.truncate(TOP_LANGUAGES);
    if other > 0 {
        ranked.push(LanguageShare::new(OTHER, other));
    }

    if !ranked.iter().any(|s| s.name == designated) {
        let at = DESIGNATED_POSITION.min(ranked.len());
        let share = DESIGNATED_MIN_SHARE.max(DESIGNATED_NOMINAL_SHARE);
        ranked.insert(at, LanguageShare::new(designated, share));

        let total: u32 = ranked.iter().map(|s| s.percent).sum();
        if total > 100 {
            if let Some(bucket) = ranked.iter_mut().find(|s| s.name == OTHER) {
                bucket.percent = bucket.percent.saturating_sub(total - 100);
            }
        }
    }

    ranked
}

/// `round(bytes / total * 100)`, halves rounding up
fn round_percent(bytes: u64, total: u64) -> u32 {
    ((bytes as f64 / total as f64) * 100.0 + 0.5).floor() as u32
}
