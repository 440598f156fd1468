use crate::model::PERCENTILE_RUN_LEN;
use crate::parsing::number::scan_numbers;
use crate::parsing::scan::{self, Gap};
use rust_decimal::Decimal;

/// How far past "Forecast Values" the scan reaches. The percentile table
/// always lands within this span; beyond it live unrelated figure numbers.
const FORECAST_WINDOW_CHARS: usize = 2000;

/// Recover the full percentile row from a section page.
///
/// Flattening shuffles the table into a stream of labels and numbers, so the
/// row is found structurally: among the numbers following the "Forecast
/// Values" header, look for a run of [`PERCENTILE_RUN_LEN`] consecutive
/// non-decreasing values. Returns the selected run, or an empty vector when
/// no complete run exists.
pub fn percentile_run(text: &str) -> Vec<Decimal> {
    let Some((_, body_start)) = scan::find_heading(text, "Percentiles") else {
        return Vec::new();
    };
    let body = &text[body_start..];
    let block = &body[..block_end(body)];

    let Some((_, forecast_end)) = scan::find_words(block, &["Forecast", "Values"], Gap::Optional)
    else {
        return Vec::new();
    };
    let window = truncate_chars(&block[forecast_end..], FORECAST_WINDOW_CHARS);

    let values: Vec<Decimal> = scan_numbers(window)
        .into_iter()
        .filter_map(|t| t.value)
        .collect();

    match select_run(&values) {
        Some(run) => run.to_vec(),
        None => {
            if !values.is_empty() {
                log::debug!(
                    "no non-decreasing run of {} among {} forecast values",
                    PERCENTILE_RUN_LEN,
                    values.len()
                );
            }
            Vec::new()
        }
    }
}

/// Pick the percentile run among candidate windows.
///
/// Every window of [`PERCENTILE_RUN_LEN`] consecutive non-decreasing values
/// is a candidate; the one with the smallest leading value wins, ties going
/// to the earliest. Cumulative-probability rows start at or near zero while
/// stray figure-number runs start high, which is what this ordering exploits.
fn select_run(values: &[Decimal]) -> Option<&[Decimal]> {
    let mut best: Option<&[Decimal]> = None;
    for window in values.windows(PERCENTILE_RUN_LEN) {
        if !window.windows(2).all(|pair| pair[0] <= pair[1]) {
            continue;
        }
        match best {
            Some(current) if window[0] >= current[0] => {}
            _ => best = Some(window),
        }
    }
    best
}

/// A percentile block runs until a figure or table caption, or page end.
fn block_end(body: &str) -> usize {
    let mut end = body.len();
    for marker in ["Figure", "Table"] {
        if let Some(start) = scan::find_ci(body, marker) {
            end = end.min(start);
        }
    }
    end
}

fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((i, _)) => &text[..i],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ascending(first: i64, count: usize) -> String {
        (0..count as i64)
            .map(|k| format!("{}.0", first + k))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn run_of(first: i64) -> Vec<Decimal> {
        (0..PERCENTILE_RUN_LEN as i64)
            .map(|k| Decimal::from(first + k))
            .collect()
    }

    #[test]
    fn test_single_run_among_noise() {
        let text = format!(
            "Percentiles:\nForecast Values\n12 9\n{}\n3 2",
            ascending(5, PERCENTILE_RUN_LEN)
        );
        assert_eq!(percentile_run(&text), run_of(5));
    }

    #[test]
    fn test_smallest_leading_value_wins() {
        // two complete runs; the separator is not a number, so the scan sees
        // them back to back with a descent in between
        let text = format!(
            "Percentiles:\nForecast Values\n{}\nx\n{}",
            ascending(7, PERCENTILE_RUN_LEN),
            ascending(3, PERCENTILE_RUN_LEN)
        );
        assert_eq!(percentile_run(&text), run_of(3));
    }

    #[test]
    fn test_short_run_yields_nothing() {
        let text = format!(
            "Percentiles:\nForecast Values\n{}",
            ascending(5, PERCENTILE_RUN_LEN - 1)
        );
        assert!(percentile_run(&text).is_empty());
    }

    #[test]
    fn test_missing_headers_yield_nothing() {
        let run = ascending(5, PERCENTILE_RUN_LEN);
        assert!(percentile_run(&format!("Forecast Values\n{run}")).is_empty());
        assert!(percentile_run(&format!("Percentiles:\n{run}")).is_empty());
    }

    #[test]
    fn test_run_past_window_is_ignored() {
        let filler = "x ".repeat(1200);
        let text = format!(
            "Percentiles:\nForecast Values\n{filler}\n{}",
            ascending(5, PERCENTILE_RUN_LEN)
        );
        assert!(percentile_run(&text).is_empty());
    }

    #[test]
    fn test_block_stops_at_figure_caption() {
        let text = format!(
            "Percentiles:\nForecast Values\nFigure 7\n{}",
            ascending(5, PERCENTILE_RUN_LEN)
        );
        assert!(percentile_run(&text).is_empty());
    }

    #[test]
    fn test_unparseable_tokens_are_dropped() {
        // the out-of-range token vanishes instead of breaking the run
        let text = format!(
            "Percentiles:\nForecast Values\n7e300\n{}",
            ascending(5, PERCENTILE_RUN_LEN)
        );
        assert_eq!(percentile_run(&text), run_of(5));
    }

    #[test]
    fn test_select_run_tie_goes_to_earliest() {
        // both runs lead with 4 but differ after, so the assert can tell
        // which one the policy picked
        let first = run_of(4);
        let mut second = vec![Decimal::from(4)];
        second.extend((10..28).map(Decimal::from));
        let mut values = first.clone();
        values.push(dec!(100));
        values.push(dec!(50));
        values.extend(second);
        let selected = select_run(&values).unwrap();
        assert_eq!(selected, first.as_slice());
    }

    #[test]
    fn test_select_run_empty_input() {
        assert!(select_run(&[]).is_none());
    }
}
