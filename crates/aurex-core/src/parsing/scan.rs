//! Low-level scanning over flattened report text.
//!
//! pdftotext collapses the report layout into a plain stream, so labels,
//! headings and digit groups arrive with unpredictable spacing and casing.
//! Everything here matches case-insensitively and treats whitespace loosely.

/// How much whitespace may separate consecutive words in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gap {
    /// One or more whitespace characters (section titles).
    Required,
    /// Zero or more whitespace characters (labels and headings).
    Optional,
}

/// Find the first case-insensitive occurrence of `needle` in `text`.
pub fn find_ci(text: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    text.char_indices()
        .map(|(i, _)| i)
        .find(|&i| match_ci_at(text, i, needle).is_some())
}

/// Find the first occurrence of the word sequence, with the gap rule applied
/// between consecutive words. Returns the byte range of the match.
pub fn find_words(text: &str, words: &[&str], gap: Gap) -> Option<(usize, usize)> {
    if words.is_empty() {
        return None;
    }
    for (i, _) in text.char_indices() {
        if let Some(end) = match_words_at(text, i, words, gap) {
            return Some((i, end));
        }
    }
    None
}

/// True if the word sequence occurs somewhere in `text`, separated by runs of
/// whitespace and bounded on both sides by non-word characters (or the text
/// edge). This is how section titles are located: "Gas  in Oil   Fields"
/// matches, "Spoil in Oil Fields" does not match "Oil in Oil Fields".
pub fn contains_words_bounded(text: &str, words: &[&str]) -> bool {
    if words.is_empty() {
        return false;
    }
    let mut prev: Option<char> = None;
    for (i, c) in text.char_indices() {
        let at_boundary = prev.map_or(true, |p| !is_word_char(p));
        prev = Some(c);
        if !at_boundary {
            continue;
        }
        if let Some(end) = match_words_at(text, i, words, Gap::Required) {
            if text[end..].chars().next().map_or(true, |n| !is_word_char(n)) {
                return true;
            }
        }
    }
    false
}

/// Find a heading: `word` followed by optional whitespace and a colon.
/// Returns the byte range from the start of the word to just past the colon.
/// Occurrences without a trailing colon are skipped.
pub fn find_heading(text: &str, word: &str) -> Option<(usize, usize)> {
    let mut from = 0;
    while from <= text.len() {
        let start = from + find_ci(&text[from..], word)?;
        let word_end = start + word.len();
        let colon_at = skip_whitespace(text, word_end);
        if text[colon_at..].starts_with(':') {
            return Some((start, colon_at + 1));
        }
        // headings are ASCII, so one byte past the match start is safe
        from = start + 1;
    }
    None
}

/// The ASCII digits of `text`, in order, everything else dropped.
pub fn digits_of(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// True if `text` contains the digit sequence with arbitrary whitespace
/// between the digits, bounded by non-word characters. Matches the way
/// flattened forms sometimes space out a count like "5 0 0 0 0".
pub fn contains_spaced_digits(text: &str, digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }
    let mut prev: Option<char> = None;
    for (i, c) in text.char_indices() {
        let at_boundary = prev.map_or(true, |p| !is_word_char(p));
        prev = Some(c);
        if !at_boundary {
            continue;
        }
        if let Some(end) = match_spaced_digits_at(text, i, digits) {
            if text[end..].chars().next().map_or(true, |n| !is_word_char(n)) {
                return true;
            }
        }
    }
    false
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Match `needle` at byte offset `at`, ASCII case-insensitive. Returns the
/// byte offset just past the match.
fn match_ci_at(text: &str, at: usize, needle: &str) -> Option<usize> {
    let mut pos = at;
    for nc in needle.chars() {
        let tc = text[pos..].chars().next()?;
        if !tc.eq_ignore_ascii_case(&nc) {
            return None;
        }
        pos += tc.len_utf8();
    }
    Some(pos)
}

fn match_words_at(text: &str, at: usize, words: &[&str], gap: Gap) -> Option<usize> {
    let mut pos = at;
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            let after_ws = skip_whitespace(text, pos);
            if gap == Gap::Required && after_ws == pos {
                return None;
            }
            pos = after_ws;
        }
        pos = match_ci_at(text, pos, word)?;
    }
    Some(pos)
}

fn match_spaced_digits_at(text: &str, at: usize, digits: &str) -> Option<usize> {
    let mut pos = at;
    for (i, d) in digits.chars().enumerate() {
        if i > 0 {
            pos = skip_whitespace(text, pos);
        }
        let c = text[pos..].chars().next()?;
        if c != d {
            return None;
        }
        pos += c.len_utf8();
    }
    Some(pos)
}

fn skip_whitespace(text: &str, from: usize) -> usize {
    let mut pos = from;
    for c in text[from..].chars() {
        if !c.is_whitespace() {
            break;
        }
        pos += c.len_utf8();
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_ci() {
        assert_eq!(find_ci("The Trials line", "trials"), Some(4));
        assert_eq!(find_ci("no match here", "trials"), None);
        assert_eq!(find_ci("TRIALS", "Trials"), Some(0));
    }

    #[test]
    fn test_find_words_gap_required() {
        let text = "see Forecast   Values below";
        assert_eq!(
            find_words(text, &["Forecast", "Values"], Gap::Required),
            Some((4, 21))
        );
        assert_eq!(
            find_words("ForecastValues", &["Forecast", "Values"], Gap::Required),
            None
        );
    }

    #[test]
    fn test_find_words_gap_optional() {
        assert_eq!(
            find_words("ForecastValues", &["Forecast", "Values"], Gap::Optional),
            Some((0, 14))
        );
        assert_eq!(
            find_words("Forecast\nValues", &["Forecast", "Values"], Gap::Optional),
            Some((0, 15))
        );
    }

    #[test]
    fn test_contains_words_bounded_flexible_whitespace() {
        let words = ["Oil", "in", "Oil", "Fields"];
        assert!(contains_words_bounded("Table 2. Oil  in\nOil   Fields, MMB", &words));
        assert!(contains_words_bounded("OIL IN OIL FIELDS", &words));
    }

    #[test]
    fn test_contains_words_bounded_rejects_embedded() {
        let words = ["Oil", "in", "Oil", "Fields"];
        assert!(!contains_words_bounded("Spoil in Oil Fields", &words));
        assert!(!contains_words_bounded("Oil in Oil Fieldsx", &words));
        assert!(!contains_words_bounded("OilinOil Fields", &words));
    }

    #[test]
    fn test_find_heading_requires_colon() {
        assert_eq!(find_heading("Statistics: x", "Statistics"), Some((0, 11)));
        assert_eq!(find_heading("Statistics  : x", "Statistics"), Some((0, 13)));
        assert_eq!(find_heading("Statistics are nice", "Statistics"), None);
    }

    #[test]
    fn test_find_heading_skips_colonless_occurrence() {
        let text = "the statistics show... Statistics : here";
        assert_eq!(find_heading(text, "Statistics"), Some((23, 35)));
    }

    #[test]
    fn test_digits_of() {
        assert_eq!(digits_of("Trials = 50,000 runs"), "50000");
        assert_eq!(digits_of("no digits"), "");
    }

    #[test]
    fn test_contains_spaced_digits() {
        assert!(contains_spaced_digits("Trials 5 0 0 0 0", "50000"));
        assert!(contains_spaced_digits("50 000", "50000"));
        assert!(contains_spaced_digits("50000", "50000"));
        // a sixth digit extends the run past the boundary
        assert!(!contains_spaced_digits("500 000", "50000"));
        assert!(!contains_spaced_digits("x50000", "50000"));
    }
}
