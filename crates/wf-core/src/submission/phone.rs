/// Normalises a phone number to `<country_code><10 digits>`.
///
/// Accepts spaces, dashes, dots and parentheses, and an existing national
/// prefix (`0`, the bare country digits, or the full `+` code). Returns
/// `None` when the remaining digits are not exactly ten.
pub fn normalize_phone(raw: &str, country_code: &str) -> Option<String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.' | '(' | ')'))
        .collect();

    let code_digits = country_code.trim_start_matches('+');
    let mut rest = cleaned.as_str();
    if let Some(stripped) = rest.strip_prefix('+') {
        rest = stripped.strip_prefix(code_digits)?;
    } else if rest.len() == 10 + code_digits.len() && rest.starts_with(code_digits) {
        rest = &rest[code_digits.len()..];
    } else if rest.len() == 11 && rest.starts_with('0') {
        rest = &rest[1..];
    }

    if rest.len() != 10 || !rest.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(format!("+{code_digits}{rest}"))
}
