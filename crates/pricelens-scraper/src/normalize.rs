//! Quantity inference and per-unit price computation.
//!
//! Price parsing is handled by [`crate::price`]; this module looks at the
//! product *name* to work out how many units a listing covers, so that a
//! 12-pack at $6.00 and a single can at $1.29 can be ranked on the same
//! axis.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

/// Sentinel label used when no quantity could be inferred.
pub const UNIT_NOT_APPLICABLE: &str = "not applicable";

/// Integer immediately followed (optionally separated by a hyphen or space)
/// by a pack token. Matches "12 pack", "12-pack", "6pk", "24 cans",
/// "12 Count" (input is lowercased first).
static PACK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)[ -]?(?:pack|pk|cans|count)\b").expect("pack pattern is valid"));

/// Decimal number followed by a liter token: "2 L", "1.5l", "2 liter",
/// "3 litre". The trailing word boundary keeps "ml" from matching.
static VOLUME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*(?:liter|litre|l)\b").expect("volume pattern is valid")
});

/// Result of unit normalization: the per-unit price (absent when the name
/// itself was absent) and its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitInfo {
    pub unit_price: Option<Decimal>,
    pub unit_label: String,
}

impl UnitInfo {
    fn not_applicable(unit_price: Option<Decimal>) -> Self {
        Self {
            unit_price,
            unit_label: UNIT_NOT_APPLICABLE.to_owned(),
        }
    }
}

/// Infers a pack count or volume from `product_name` and divides `price`
/// by it, rounded to cents.
///
/// Pattern priority: pack/count first, then volume, first match wins.
/// Only quantities of at least one divide the price, so a unit price
/// never exceeds the listing price. A name with no recognizable quantity
/// yields the *raw price* as the unit price (label still "not
/// applicable"): single-item listings stay
/// comparable against true per-unit prices that way. Ranking treats a
/// $1.29 single can as $1.29-per-unit rather than excluding it.
///
/// Absent name or negative price yields no unit price at all.
#[must_use]
pub fn normalize_unit(product_name: Option<&str>, price: Decimal) -> UnitInfo {
    let Some(name) = product_name.filter(|n| !n.trim().is_empty()) else {
        return UnitInfo::not_applicable(None);
    };
    if price.is_sign_negative() {
        return UnitInfo::not_applicable(None);
    }

    let lower = name.to_lowercase();

    if let Some(captures) = PACK_RE.captures(&lower) {
        if let Ok(count) = captures[1].parse::<u32>() {
            if count > 0 {
                return UnitInfo {
                    unit_price: Some((price / Decimal::from(count)).round_dp(2)),
                    unit_label: "per can".to_owned(),
                };
            }
        }
    }

    if let Some(captures) = VOLUME_RE.captures(&lower) {
        if let Ok(volume) = captures[1].parse::<Decimal>() {
            // Quantities below one would put the unit price above the
            // listing price; sub-liter volumes are treated as no match.
            if volume >= Decimal::ONE {
                return UnitInfo {
                    unit_price: Some((price / volume).round_dp(2)),
                    unit_label: "per liter".to_owned(),
                };
            }
        }
    }

    UnitInfo::not_applicable(Some(price))
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
