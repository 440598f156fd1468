use crate::model::AuHeader;
use crate::parsing::scan::{self, Gap};

/// Extract AU identity from first-page text lines.
///
/// For each label the first line yielding a value wins. A label with no
/// digits (for the number) or no text (for the name) after the colon is
/// passed over.
pub fn parse_header(lines: &[&str]) -> AuHeader {
    let mut header = AuHeader::default();

    for line in lines {
        if header.au_number.is_none() {
            if let Some(value) = labeled_value(line, &["AU", "Number"]) {
                let digits = leading_digit_run(value);
                if !digits.is_empty() {
                    header.au_number = Some(digits);
                }
            }
        }

        if header.au_name.is_none() {
            if let Some(value) = labeled_value(line, &["AU", "Name"]) {
                let name = value.trim();
                if !name.is_empty() {
                    header.au_name = Some(name.to_string());
                }
            }
        }

        if header.au_number.is_some() && header.au_name.is_some() {
            break;
        }
    }

    header
}

/// The text after "Label :" on this line, if the label is present.
/// Label words match case-insensitively with flexible spacing; the colon is
/// required.
fn labeled_value<'a>(line: &'a str, label: &[&str]) -> Option<&'a str> {
    let (_, end) = scan::find_words(line, label, Gap::Optional)?;
    let rest = line[end..].trim_start();
    Some(rest.strip_prefix(':')?.trim_start())
}

/// Digits from the leading run of digits, whitespace and commas. An AU number
/// often arrives spaced out ("5 0 0 12") or grouped ("50,012").
fn leading_digit_run(value: &str) -> String {
    value
        .chars()
        .take_while(|c| c.is_ascii_digit() || c.is_whitespace() || *c == ',')
        .filter(|c| c.is_ascii_digit())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_basic() {
        let lines = ["U.S. Geological Survey", "AU Number: 50120101", "AU Name: Austin Chalk Gas"];
        let h = parse_header(&lines);
        assert_eq!(h.au_number.as_deref(), Some("50120101"));
        assert_eq!(h.au_name.as_deref(), Some("Austin Chalk Gas"));
    }

    #[test]
    fn test_number_with_scattered_digits() {
        let h = parse_header(&["AU Number: 5 0 0 12"]);
        assert_eq!(h.au_number.as_deref(), Some("50012"));
    }

    #[test]
    fn test_number_stops_at_non_digit_text() {
        let h = parse_header(&["AU Number: 50,012 (revised)"]);
        assert_eq!(h.au_number.as_deref(), Some("50012"));
    }

    #[test]
    fn test_label_spacing_and_case() {
        let h = parse_header(&["au  number :  77", "AUName:Tight Oil"]);
        assert_eq!(h.au_number.as_deref(), Some("77"));
        assert_eq!(h.au_name.as_deref(), Some("Tight Oil"));
    }

    #[test]
    fn test_colon_required() {
        let h = parse_header(&["AU Number 50012"]);
        assert_eq!(h.au_number, None);
    }

    #[test]
    fn test_first_label_wins() {
        let h = parse_header(&["AU Name: First", "AU Name: Second"]);
        assert_eq!(h.au_name.as_deref(), Some("First"));
    }

    #[test]
    fn test_empty_values_leave_fields_unset() {
        let h = parse_header(&["AU Number: pending", "AU Name:   "]);
        assert_eq!(h.au_number, None);
        assert_eq!(h.au_name, None);
    }

    #[test]
    fn test_missing_labels() {
        let h = parse_header(&["nothing relevant"]);
        assert_eq!(h, AuHeader::default());
    }
}
