use super::*;

fn dec(s: &str) -> Decimal {
    s.parse().expect("valid decimal literal")
}

// -----------------------------------------------------------------------
// pack / count inference
// -----------------------------------------------------------------------

#[test]
fn twelve_pack_divides_price_by_twelve() {
    let unit = normalize_unit(Some("Schweppes Ginger Ale 12 pack"), dec("6.00"));
    assert_eq!(unit.unit_price, Some(dec("0.50")));
    assert_eq!(unit.unit_label, "per can");
}

#[test]
fn hyphenated_pack_matches() {
    let unit = normalize_unit(Some("Schweppes Ginger Ale 12-Pack"), dec("6.00"));
    assert_eq!(unit.unit_price, Some(dec("0.50")));
}

#[test]
fn pk_token_matches_without_separator() {
    let unit = normalize_unit(Some("Canada Dry 6pk"), dec("3.00"));
    assert_eq!(unit.unit_price, Some(dec("0.50")));
    assert_eq!(unit.unit_label, "per can");
}

#[test]
fn cans_token_matches() {
    let unit = normalize_unit(Some("Ginger Ale Soda, 24 cans"), dec("12.00"));
    assert_eq!(unit.unit_price, Some(dec("0.50")));
}

#[test]
fn count_token_matches() {
    let unit = normalize_unit(Some("Seagram's Ginger Ale, 12 Count"), dec("5.88"));
    assert_eq!(unit.unit_price, Some(dec("0.49")));
}

#[test]
fn unit_price_rounds_to_cents() {
    // 5.00 / 12 = 0.41666... -> 0.42
    let unit = normalize_unit(Some("Ginger Ale 12 pack"), dec("5.00"));
    assert_eq!(unit.unit_price, Some(dec("0.42")));
}

#[test]
fn pack_takes_priority_over_volume() {
    // Both a count and a volume appear; the pack pattern wins.
    let unit = normalize_unit(Some("Ginger Ale 12 pack, 12 fl oz / 2 L total"), dec("6.00"));
    assert_eq!(unit.unit_price, Some(dec("0.50")));
    assert_eq!(unit.unit_label, "per can");
}

#[test]
fn zero_count_falls_through_to_raw_price() {
    let unit = normalize_unit(Some("Ginger Ale 0 pack"), dec("6.00"));
    assert_eq!(unit.unit_price, Some(dec("6.00")));
    assert_eq!(unit.unit_label, UNIT_NOT_APPLICABLE);
}

// -----------------------------------------------------------------------
// volume inference
// -----------------------------------------------------------------------

#[test]
fn two_liter_bottle_halves_price() {
    let unit = normalize_unit(Some("Schweppes 2 L Bottle"), dec("3.00"));
    assert_eq!(unit.unit_price, Some(dec("1.50")));
    assert_eq!(unit.unit_label, "per liter");
}

#[test]
fn decimal_volume_matches() {
    let unit = normalize_unit(Some("Ginger Ale 1.5l"), dec("3.00"));
    assert_eq!(unit.unit_price, Some(dec("2.00")));
}

#[test]
fn liter_spelling_matches() {
    let unit = normalize_unit(Some("Schweppes 2 liter"), dec("3.00"));
    assert_eq!(unit.unit_price, Some(dec("1.50")));
}

#[test]
fn litre_spelling_matches() {
    let unit = normalize_unit(Some("Schweppes 2 litre"), dec("3.00"));
    assert_eq!(unit.unit_price, Some(dec("1.50")));
}

// Dividing by less than a liter would push the unit price above the
// listing price; such volumes are left uninferred.
#[test]
fn sub_liter_volume_falls_through_to_raw_price() {
    let unit = normalize_unit(Some("Schweppes Tonic Water 0.5 l"), dec("3.00"));
    assert_eq!(unit.unit_price, Some(dec("3.00")));
    assert_eq!(unit.unit_label, UNIT_NOT_APPLICABLE);
}

#[test]
fn one_liter_bottle_keeps_price_as_unit_price() {
    let unit = normalize_unit(Some("Schweppes 1 L Bottle"), dec("2.19"));
    assert_eq!(unit.unit_price, Some(dec("2.19")));
    assert_eq!(unit.unit_label, "per liter");
}

#[test]
fn milliliters_do_not_match_the_liter_pattern() {
    let unit = normalize_unit(Some("Ginger Ale 355 ml can"), dec("1.29"));
    assert_eq!(unit.unit_price, Some(dec("1.29")));
    assert_eq!(unit.unit_label, UNIT_NOT_APPLICABLE);
}

// -----------------------------------------------------------------------
// fallback behavior
// -----------------------------------------------------------------------

// Deliberate: a name with no quantity keeps its raw price as the unit
// price so single-item listings still participate in ranking.
#[test]
fn no_quantity_keeps_raw_price_as_unit_price() {
    let unit = normalize_unit(Some("Schweppes Ginger Ale Single Can"), dec("1.29"));
    assert_eq!(unit.unit_price, Some(dec("1.29")));
    assert_eq!(unit.unit_label, UNIT_NOT_APPLICABLE);
}

#[test]
fn absent_name_yields_no_unit_price() {
    let unit = normalize_unit(None, dec("1.29"));
    assert_eq!(unit.unit_price, None);
    assert_eq!(unit.unit_label, UNIT_NOT_APPLICABLE);
}

#[test]
fn blank_name_yields_no_unit_price() {
    let unit = normalize_unit(Some("   "), dec("1.29"));
    assert_eq!(unit.unit_price, None);
}

#[test]
fn negative_price_yields_no_unit_price() {
    let unit = normalize_unit(Some("Ginger Ale 12 pack"), dec("-1.00"));
    assert_eq!(unit.unit_price, None);
    assert_eq!(unit.unit_label, UNIT_NOT_APPLICABLE);
}

#[test]
fn matching_is_case_insensitive() {
    let unit = normalize_unit(Some("GINGER ALE 12 PACK"), dec("6.00"));
    assert_eq!(unit.unit_price, Some(dec("0.50")));
}
