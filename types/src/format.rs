//! Counter text formatting and configuration parsing.

/// Group an integer with comma thousands separators: `1200` -> `"1,200"`.
#[must_use]
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && i % 3 == lead % 3 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Render a counter frame: round, group, append the suffix.
#[must_use]
pub fn count_text(value: f64, suffix: &str) -> String {
    format!("{}{suffix}", group_thousands(value.round() as i64))
}

/// Lenient target parse: optional sign and a leading integer prefix; anything
/// unparseable counts as zero so a malformed counter renders as "0" instead
/// of breaking the page.
#[must_use]
pub fn parse_target(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return 0;
    }
    let magnitude: i64 = digits.parse().unwrap_or(i64::MAX);
    if negative { -magnitude } else { magnitude }
}
