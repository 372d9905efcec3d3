//! Display formatting for prices.

/// Format a price for the asset list: thousands separators, two decimals
/// for ordinary magnitudes, more precision for sub-unit prices.
#[must_use]
pub fn display_price(value: f64) -> String {
    let decimals = price_decimals(value);
    group_thousands(&format!("{value:.decimals$}"))
}

/// Sub-unit prices (e.g., meme coins at 0.000012) need enough fraction
/// digits to show anything at all.
fn price_decimals(value: f64) -> usize {
    let abs = value.abs();
    if abs >= 1.0 || abs == 0.0 {
        2
    } else {
        let exponent = abs.log10().floor().abs() as usize;
        (exponent + 2).min(8)
    }
}

fn group_thousands(formatted: &str) -> String {
    let (integer, fraction) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted, None),
    };
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match fraction {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}
