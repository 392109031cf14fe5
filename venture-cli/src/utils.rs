use rust_decimal::Decimal;

/// Formats a [`Decimal`] with comma thousands separators, keeping its scale.
///
/// `2650` becomes `"2,650"`, `-1234.50` becomes `"-1,234.50"`.
pub fn group_thousands(value: Decimal) -> String {
    let text = value.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Formats an amount of money with two decimal places and a currency suffix.
pub fn money_display(
    value: Decimal,
    currency: &str,
) -> String {
    let mut rounded = value.round_dp(2);
    rounded.rescale(2);
    format!("{} {currency}", group_thousands(rounded))
}

/// Formats an optional percentage, using "N/A" when `None`.
pub fn opt_pct_display(pct: &Option<Decimal>) -> String {
    pct.as_ref()
        .map(|v| format!("{v}%"))
        .unwrap_or_else(|| "N/A".to_string())
}
