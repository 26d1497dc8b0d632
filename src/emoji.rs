// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! `:shortcode:` replacement for repository descriptions.

use std::borrow::Cow;

const SHORTCODES: &[(&str, &str,)] = &[
    ("+1", "👍",),
    ("-1", "👎",),
    ("art", "🎨",),
    ("books", "📚",),
    ("boom", "💥",),
    ("bug", "🐛",),
    ("chart_with_upwards_trend", "📈",),
    ("construction", "🚧",),
    ("crab", "🦀",),
    ("fire", "🔥",),
    ("gear", "⚙️",),
    ("globe_with_meridians", "🌐",),
    ("hammer", "🔨",),
    ("heart", "❤️",),
    ("lock", "🔒",),
    ("memo", "📝",),
    ("package", "📦",),
    ("rainbow", "🌈",),
    ("rocket", "🚀",),
    ("sparkles", "✨",),
    ("star", "⭐",),
    ("tada", "🎉",),
    ("warning", "⚠️",),
    ("wrench", "🔧",),
    ("zap", "⚡",),
];

fn lookup(name: &str,) -> Option<&'static str,>
{
    SHORTCODES.iter().find(|(code, _,)| *code == name,).map(|(_, emoji,)| *emoji,)
}

/// Replaces known `:name:` shortcodes with their emoji.
///
/// Unknown shortcodes and stray colons are left untouched.
///
/// ```
/// use repocard::emoji::parse_emojis;
///
/// assert_eq!(parse_emojis("fast :rocket: and :unknown:"), "fast 🚀 and :unknown:");
/// ```
pub fn parse_emojis(text: &str,) -> Cow<'_, str,>
{
    if !text.contains(':',) {
        return Cow::Borrowed(text,);
    }

    let mut output = String::with_capacity(text.len(),);
    let mut rest = text;
    while let Some(start,) = rest.find(':',) {
        let after = &rest[start + 1..];
        let replacement = after.find(':',).and_then(|end| {
            let name = &after[..end];
            let plausible = !name.is_empty()
                && name.chars().all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '+' | '-'),);
            if plausible { lookup(name,).map(|emoji| (emoji, end,),) } else { None }
        },);

        match replacement {
            Some((emoji, end,),) => {
                output.push_str(&rest[..start],);
                output.push_str(emoji,);
                rest = &after[end + 1..];
            }
            None => {
                output.push_str(&rest[..=start],);
                rest = after;
            }
        }
    }
    output.push_str(rest,);

    Cow::Owned(output,)
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn text_without_colons_is_borrowed()
    {
        assert!(matches!(parse_emojis("plain text"), Cow::Borrowed(_)));
    }

    #[test]
    fn adjacent_shortcodes_are_replaced()
    {
        assert_eq!(parse_emojis(":crab::rocket:"), "🦀🚀");
    }

    #[test]
    fn colons_in_prose_survive()
    {
        assert_eq!(parse_emojis("Note: ratio 1:2 :tada:"), "Note: ratio 1:2 🎉");
        assert_eq!(parse_emojis("trailing:"), "trailing:");
    }
}
