use crate::parsing::number::scan_numbers;
use crate::parsing::scan;
use rust_decimal::Decimal;

/// Monte Carlo trial count printed in every assessment statistics table.
/// The row carrying it anchors the search for the mean.
pub const TRIAL_COUNT_DIGITS: &str = "50000";

/// How many lines after "Trials" may hold the anchor row.
const ANCHOR_SCAN_LINES: usize = 150;

/// The mean must appear within this many lines after the anchor.
const MEAN_LOOKAHEAD_LINES: usize = 20;

/// Recover the simulation mean from a section page.
///
/// The statistics table flattens into a vertical ribbon of labels and
/// numbers, so cell adjacency is gone. The one stable landmark is the trial
/// count: find the "Trials" label, find the row whose digits spell the trial
/// count, then take the first parseable leading token on the lines that
/// follow.
pub fn statistics_mean(text: &str) -> Option<Decimal> {
    let block = match statistics_block(text) {
        Some(block) => block,
        None => {
            log::debug!("no statistics heading, scanning whole page");
            text
        }
    };

    let trials_at = scan::find_ci(block, "Trials")?;
    let after = &block[trials_at + "Trials".len()..];
    let lines: Vec<&str> = after.lines().collect();

    let anchor = lines
        .iter()
        .take(ANCHOR_SCAN_LINES)
        .position(|line| is_trial_count_row(line))?;

    let upper = (anchor + MEAN_LOOKAHEAD_LINES).min(lines.len());
    for line in &lines[anchor + 1..upper] {
        if let Some(token) = scan_numbers(line).into_iter().next() {
            if let Some(value) = token.value {
                return Some(value);
            }
        }
        // no leading value on this line; the mean may be further down
    }
    None
}

/// The text between "Statistics :" and the next table boundary, or `None`
/// when the heading is absent.
fn statistics_block(text: &str) -> Option<&str> {
    let (_, body_start) = scan::find_heading(text, "Statistics")?;
    let body = &text[body_start..];
    Some(&body[..block_end(body)])
}

/// A statistics block runs until the percentiles heading, a figure or table
/// caption, or the end of the page.
fn block_end(body: &str) -> usize {
    let mut end = body.len();
    if let Some((start, _)) = scan::find_heading(body, "Percentiles") {
        end = end.min(start);
    }
    for marker in ["Figure", "Table"] {
        if let Some(start) = scan::find_ci(body, marker) {
            end = end.min(start);
        }
    }
    end
}

fn is_trial_count_row(line: &str) -> bool {
    scan::digits_of(line) == TRIAL_COUNT_DIGITS
        || scan::contains_spaced_digits(line, TRIAL_COUNT_DIGITS)
}
