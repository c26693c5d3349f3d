//! Input formatting for the registration wizard.

/// Strips everything but ASCII digits.
pub fn digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Applies the CNPJ display mask (`NN.NNN.NNN/NNNN-NN`) to whatever digits are
/// present, so the punctuation appears as soon as the next group starts.
/// Digits beyond the mask's 14 positions are truncated.
pub fn format_document(value: &str) -> String {
    let digits = digits(value);
    let mut formatted = String::with_capacity(18);
    for (index, digit) in digits.chars().take(14).enumerate() {
        match index {
            2 | 5 => formatted.push('.'),
            8 => formatted.push('/'),
            12 => formatted.push('-'),
            _ => {}
        }
        formatted.push(digit);
    }
    formatted
}

/// Formats a phone number as `(DD) DDDD-DDDD` (10 digits) or
/// `(DD) DDDDD-DDDD` (11 digits). Always recomputed from the raw digit
/// buffer, never applied on top of previous formatting; digits beyond 11 are
/// truncated.
pub fn format_phone(value: &str) -> String {
    let mut digits = digits(value);
    digits.truncate(11);
    if digits.len() <= 2 {
        return digits;
    }

    let (area, local) = digits.split_at(2);
    let split = if digits.len() <= 10 { 4 } else { 5 };
    if local.len() <= split {
        format!("({area}) {local}")
    } else {
        let (prefix, suffix) = local.split_at(split);
        format!("({area}) {prefix}-{suffix}")
    }
}

/// Checks the `local@domain.tld` shape: exactly one `@`, no whitespace, and a
/// dot inside the domain.
pub(crate) fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
