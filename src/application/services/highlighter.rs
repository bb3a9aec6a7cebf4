use std::iter;

use crate::domain::MatchResult;

use super::matcher::search;

pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

pub fn highlight(text: &str, pattern: &str) -> String {
    if text.is_empty() || pattern.is_empty() {
        return text.to_string();
    }

    highlight_matches(text, &search(text, pattern))
}

/// Wraps every matched span of `text` in mark tags, keeping the original
/// casing. Overlapping matches share one tag pair.
pub fn highlight_matches(text: &str, matches: &MatchResult) -> String {
    if !matches.is_found() {
        return text.to_string();
    }

    let width = matches.pattern().chars().count();
    let byte_offsets: Vec<usize> = text
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(iter::once(text.len()))
        .collect();

    let mut result =
        String::with_capacity(text.len() + matches.count() * (MARK_OPEN.len() + MARK_CLOSE.len()));
    result.push_str(text);

    // Later spans first so earlier byte offsets stay valid.
    for (start, end) in merge_spans(matches.positions(), width).into_iter().rev() {
        result.insert_str(byte_offsets[end], MARK_CLOSE);
        result.insert_str(byte_offsets[start], MARK_OPEN);
    }

    result
}

fn merge_spans(positions: &[usize], width: usize) -> Vec<(usize, usize)> {
    let mut spans: Vec<(usize, usize)> = Vec::with_capacity(positions.len());

    for &start in positions {
        let end = start + width;
        match spans.last_mut() {
            Some(last) if start < last.1 => last.1 = end,
            _ => spans.push((start, end)),
        }
    }

    spans
}
