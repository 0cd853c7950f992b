use super::*;

#[test]
fn short_address_keeps_head_and_tail() {
    assert_eq!(short_address("0x1234567890abcdef"), "0x1234...cdef");
    assert_eq!(short_address("0xabc"), "0xabc");
}

#[test]
fn gas_price_converts_wei_to_gwei() {
    assert_eq!(gas_price_gwei("1500000000"), "1.50 Gwei");
    assert_eq!(gas_price_gwei("abc"), "N/A");
}

#[test]
fn fee_multiplies_gas_by_price() {
    assert_eq!(fee_eth(21_000, "1000000000"), "0.00002100 ETH");
    assert_eq!(fee_eth(21_000, ""), "N/A");
}

#[test]
fn grouped_inserts_separators() {
    assert_eq!(grouped(0), "0");
    assert_eq!(grouped(999), "999");
    assert_eq!(grouped(1_000), "1,000");
    assert_eq!(grouped(1_234_567), "1,234,567");
}

#[test]
fn percent_handles_empty_total() {
    assert_eq!(percent(0, 0), "0.0%");
    assert_eq!(percent(1, 3), "33.3%");
}

#[test]
fn millis_uses_two_decimals() {
    assert_eq!(millis(12.5), "12.50ms");
}

#[test]
fn timestamp_drops_fraction_and_zone() {
    assert_eq!(timestamp("2024-05-01T10:20:30.123Z"), "2024-05-01 10:20:30");
    assert_eq!(timestamp("2024-05-01T10:20:30+02:00"), "2024-05-01 10:20:30");
    assert_eq!(timestamp("yesterday"), "yesterday");
}

#[test]
fn placeholder_replaces_blank_values() {
    assert_eq!(or_placeholder(None, "N/A"), "N/A");
    assert_eq!(or_placeholder(Some(" "), "N/A"), "N/A");
    assert_eq!(or_placeholder(Some("x"), "N/A"), "x");
}
