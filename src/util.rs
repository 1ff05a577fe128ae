/// Parses display text as a single decimal number.
///
/// This is the one text-to-number conversion used everywhere in the crate:
/// the lexer validates number literals with it and the square-root transform
/// parses the whole display with it. It is total; malformed text produces
/// `None` instead of a panic.
///
/// # Parameters
/// - `text`: The text to parse.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the text is not a valid decimal number.
///
/// # Example
/// ```
/// use deskcalc::util::parse_decimal;
///
/// assert_eq!(parse_decimal("2.5"), Some(2.5));
/// assert_eq!(parse_decimal("-4"), Some(-4.0));
/// assert_eq!(parse_decimal(".5"), Some(0.5));
/// assert_eq!(parse_decimal("two"), None);
/// ```
#[must_use]
pub fn parse_decimal(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

/// Formats a numeric result for the calculator display.
///
/// Integral values print without a fractional part, so `4.0` becomes `"4"`.
/// Non-finite values keep their standard spellings (`inf`, `NaN`) and are
/// shown as-is.
///
/// # Example
/// ```
/// use deskcalc::util::format_number;
///
/// assert_eq!(format_number(4.0), "4");
/// assert_eq!(format_number(0.5), "0.5");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    value.to_string()
}
