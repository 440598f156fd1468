use rust_decimal::Decimal;
use std::str::FromStr;

/// A numeric token recovered from flattened text: the raw span as it
/// appeared, and its value if normalization succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberToken {
    pub raw: String,
    pub value: Option<Decimal>,
}

/// Normalize one raw token into a number.
///
/// Handles the damage pdftotext does to formatted report values:
/// - "12,345.60 units" -> 12345.60 (separators and trailing junk dropped)
/// - "50 000" -> 50000 (space-grouped digits)
/// - "1.2×10 3" -> 1200 (typeset exponent collapsed to e-notation)
///
/// Returns `None` when nothing numeric remains.
pub fn normalize_number(raw: &str) -> Option<Decimal> {
    let compact = raw.replace("×10", "e").replace(' ', "").replace(',', "");
    let stripped =
        compact.trim_end_matches(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '+' | '-')));
    // a bare trailing dot ("100.") is fine, a second dot is not
    let candidate = match stripped.strip_suffix('.') {
        Some(rest) if !rest.contains('.') => rest,
        _ => stripped,
    };
    if candidate.is_empty() {
        return None;
    }
    if candidate.contains(['e', 'E']) {
        Decimal::from_scientific(candidate).ok()
    } else {
        Decimal::from_str(candidate).ok()
    }
}

/// Scan `text` left to right for numeric tokens.
///
/// A token is an optional sign, digits with `,` or single-space thousands
/// grouping, an optional fraction, and an optional e-notation exponent. A
/// separator counts as grouping only when exactly three digits follow, so
/// "10 11 12" stays three tokens while "1 234.5" is one.
pub fn scan_numbers(text: &str) -> Vec<NumberToken> {
    let bytes = text.as_bytes();
    let digit_at = |p: usize| p < bytes.len() && bytes[p].is_ascii_digit();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        let signed_start = (b == b'+' || b == b'-') && digit_at(i + 1);
        if !b.is_ascii_digit() && !signed_start {
            i += 1;
            continue;
        }

        let start = i;
        let mut j = if signed_start { i + 2 } else { i + 1 };

        // integer part, with grouped digit triples
        loop {
            if digit_at(j) {
                j += 1;
            } else if j < bytes.len()
                && (bytes[j] == b',' || bytes[j] == b' ')
                && digit_at(j + 1)
                && digit_at(j + 2)
                && digit_at(j + 3)
                && !digit_at(j + 4)
            {
                j += 4;
            } else {
                break;
            }
        }

        // fraction
        if j < bytes.len() && bytes[j] == b'.' {
            j += 1;
            while digit_at(j) {
                j += 1;
            }
        }

        // exponent (lowercase e, the form normalize_number produces upstream)
        if j < bytes.len() && bytes[j] == b'e' {
            let k = if j + 1 < bytes.len() && (bytes[j + 1] == b'+' || bytes[j + 1] == b'-') {
                j + 2
            } else {
                j + 1
            };
            if digit_at(k) {
                j = k + 1;
                while digit_at(j) {
                    j += 1;
                }
            }
        }

        let raw = &text[start..j];
        tokens.push(NumberToken {
            raw: raw.to_string(),
            value: normalize_number(raw),
        });
        i = j;
    }

    tokens
}
