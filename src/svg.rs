// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Small SVG emission helpers shared by the card and animation modules.

use std::borrow::Cow;

/// Escapes the five XML special characters.
///
/// Returns the input borrowed when nothing needs escaping so hot paths such as
/// per-character title spans avoid allocating.
pub fn escape_xml(value: &str) -> Cow<'_, str> {
    if value
        .chars()
        .any(|character| matches!(character, '&' | '<' | '>' | '\"' | '\''))
    {
        let mut escaped = String::with_capacity(value.len() + 8);
        for character in value.chars() {
            match character {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '\"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&apos;"),
                other => escaped.push(other)
            }
        }
        Cow::Owned(escaped)
    } else {
        Cow::Borrowed(value)
    }
}

/// Formats a coordinate with at most two decimals and no trailing zeros.
///
/// ```
/// use repocard::svg::coord;
///
/// assert_eq!(coord(12.0), "12");
/// assert_eq!(coord(12.5), "12.5");
/// assert_eq!(coord(1.0 / 3.0), "0.33");
/// ```
pub fn coord(value: f64) -> String {
    let mut formatted = format!("{value:.2}");
    if formatted.contains('.') {
        while formatted.ends_with('0') {
            formatted.pop();
        }
        if formatted.ends_with('.') {
            formatted.pop();
        }
    }
    if formatted == "-0" {
        formatted = "0".to_owned();
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_xml_handles_all_special_characters() {
        let result = escape_xml("&<>\"'normal");
        assert_eq!(result, "&amp;&lt;&gt;&quot;&apos;normal");
    }

    #[test]
    fn escape_xml_returns_borrowed_when_no_escaping_needed() {
        match escape_xml("plain description") {
            Cow::Borrowed(s) => assert_eq!(s, "plain description"),
            Cow::Owned(_) => panic!("expected borrowed variant")
        }
    }

    #[test]
    fn coord_trims_trailing_zeros() {
        assert_eq!(coord(400.0), "400");
        assert_eq!(coord(22.50), "22.5");
        assert_eq!(coord(-0.001), "0");
        assert_eq!(coord(-3.14159), "-3.14");
    }
}
