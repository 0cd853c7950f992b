//! Display formatting for table cells and metric cards.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const WEI_PER_GWEI: f64 = 1e9;
const WEI_PER_ETH: f64 = 1e18;

/// `0x1234...abcd` form of a hash or address. Short inputs are returned as is.
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_owned();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// Gas price given in wei as `12.34 Gwei`. Unparsable input renders as `N/A`.
pub fn gas_price_gwei(wei: &str) -> String {
    match wei.trim().parse::<f64>() {
        Ok(value) => format!("{:.2} Gwei", value / WEI_PER_GWEI),
        Err(_) => "N/A".to_owned(),
    }
}

/// Total fee (`gas_used * gas_price`) in ETH with eight decimals.
pub fn fee_eth(gas_used: u64, gas_price_wei: &str) -> String {
    #[allow(clippy::cast_precision_loss)]
    let used = gas_used as f64;
    match gas_price_wei.trim().parse::<f64>() {
        Ok(price) => format!("{:.8} ETH", used * price / WEI_PER_ETH),
        Err(_) => "N/A".to_owned(),
    }
}

/// Thousands-separated integer (`1,234,567`).
pub fn grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Milliseconds with two decimals (`12.50ms`).
pub fn millis(value: f64) -> String {
    format!("{value:.2}ms")
}

/// Share of `part` in `total` with one decimal, `0.0%` when empty.
pub fn percent(part: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_owned();
    }
    #[allow(clippy::cast_precision_loss)]
    let ratio = part as f64 / total as f64 * 100.0;
    format!("{ratio:.1}%")
}

/// ISO-8601 timestamp as `YYYY-MM-DD HH:MM:SS`, dropping fractions and zone.
pub fn timestamp(raw: &str) -> String {
    let trimmed = raw.trim();
    let Some((date, rest)) = trimmed.split_once('T') else {
        return trimmed.to_owned();
    };
    let time: String = rest
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ':')
        .collect();
    if time.is_empty() { date.to_owned() } else { format!("{date} {time}") }
}

/// `value` or a placeholder when blank.
pub fn or_placeholder<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => placeholder,
    }
}
