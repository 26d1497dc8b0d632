// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Greedy word wrapping bounded by a line count.
//!
//! Widths are budgeted in grapheme clusters so emoji sequences and combining
//! marks are never split. Tokens come from whitespace plus the full-width
//! comma used by CJK descriptions, which otherwise contain no break points.

use unicode_segmentation::UnicodeSegmentation;

/// Marker appended to the final line when text had to be cut.
pub const ELLIPSIS: &str = "...";

const ELLIPSIS_LEN: usize = 3;
const FULL_WIDTH_COMMA: char = '，';

/// Number of grapheme clusters in `text`.
pub fn grapheme_len(text: &str,) -> usize
{
    text.graphemes(true,).count()
}

/// Wraps `text` into at most `max_lines` lines of `max_line_width` clusters.
///
/// Tokens are accumulated greedily; a token that alone exceeds the width is
/// placed on its own line without being split. When more lines would be
/// produced than allowed, the sequence is cut to `max_lines` and the last line
/// gets [`ELLIPSIS`], dropping trailing clusters so it stays within budget.
///
/// ```
/// use repocard::wrap::wrap_text;
///
/// let lines = wrap_text("one two three four", 9, 2,);
/// assert_eq!(lines, vec!["one two", "three..."]);
/// ```
pub fn wrap_text(text: &str, max_line_width: usize, max_lines: usize,) -> Vec<String,>
{
    if max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String,> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for (token, spaced,) in tokens(text,) {
        let token_len = grapheme_len(token,);
        let separator = usize::from(spaced,);
        if current.is_empty() {
            current.push_str(token,);
            current_len = token_len;
        } else if current_len + separator + token_len <= max_line_width {
            if spaced {
                current.push(' ',);
            }
            current.push_str(token,);
            current_len += separator + token_len;
        } else {
            lines.push(std::mem::take(&mut current,),);
            current.push_str(token,);
            current_len = token_len;
        }
    }
    if !current.is_empty() {
        lines.push(current,);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines,);
        if let Some(last,) = lines.last_mut() {
            *last = with_ellipsis(last, max_line_width,);
        }
    }

    lines
}

/// Yields each token with whether it was preceded by whitespace.
///
/// Pieces split off after a full-width comma join their predecessor without
/// a space.
fn tokens(text: &str,) -> impl Iterator<Item = (&str, bool,),>
{
    text.split_whitespace().flat_map(|word| {
        word.split_inclusive(FULL_WIDTH_COMMA,).enumerate().map(|(index, piece,)| (piece, index == 0,),)
    },)
}

fn with_ellipsis(line: &str, max_line_width: usize,) -> String
{
    let budget = max_line_width.saturating_sub(ELLIPSIS_LEN,);
    let clusters: Vec<&str,> = line.graphemes(true,).collect();
    let kept = if clusters.len() > budget { &clusters[..budget] } else { &clusters[..] };

    let mut truncated = kept.concat();
    truncated.truncate(truncated.trim_end().len(),);
    truncated.push_str(ELLIPSIS,);
    truncated
}
