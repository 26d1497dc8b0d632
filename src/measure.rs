// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Approximate text measurement without a font engine.
//!
//! Widths come from a per-character table calibrated against a common UI
//! sans-serif at a 10px reference size. Characters outside the table use the
//! average width, so the estimate stays cheap enough to run once per
//! candidate line while wrapping.

/// Font size the width table was calibrated at.
pub const REFERENCE_FONT_SIZE: f64 = 10.0;

/// Width used for characters absent from [`ASCII_WIDTHS`], per reference px.
pub const AVERAGE_CHAR_WIDTH: f64 = 0.527_927_631_578_947_1;

/// First code point covered by [`ASCII_WIDTHS`]; control characters below it
/// measure as zero.
const FIRST_PRINTABLE: u32 = 32;

/// Relative advance widths for `' '..='~'`.
const ASCII_WIDTHS: [f64; 95] = [
    0.279_687_5, 0.276_562_5, 0.354_687_5, 0.554_687_5, 0.554_687_5, 0.889_062_5, 0.665_625,
    0.190_625, 0.332_812_5, 0.332_812_5, 0.389_062_5, 0.582_812_5, 0.276_562_5, 0.332_812_5,
    0.276_562_5, 0.301_562_5, 0.554_687_5, 0.554_687_5, 0.554_687_5, 0.554_687_5, 0.554_687_5,
    0.554_687_5, 0.554_687_5, 0.554_687_5, 0.554_687_5, 0.554_687_5, 0.276_562_5, 0.276_562_5,
    0.584_375, 0.582_812_5, 0.584_375, 0.554_687_5, 1.014_062_5, 0.665_625, 0.665_625,
    0.721_875, 0.721_875, 0.665_625, 0.609_375, 0.776_562_5, 0.721_875, 0.276_562_5, 0.5,
    0.665_625, 0.554_687_5, 0.832_812_5, 0.721_875, 0.776_562_5, 0.665_625, 0.776_562_5,
    0.721_875, 0.665_625, 0.609_375, 0.721_875, 0.665_625, 0.943_75, 0.665_625, 0.665_625,
    0.609_375, 0.276_562_5, 0.354_687_5, 0.276_562_5, 0.476_562_5, 0.554_687_5, 0.332_812_5,
    0.554_687_5, 0.554_687_5, 0.5, 0.554_687_5, 0.554_687_5, 0.276_562_5, 0.554_687_5,
    0.554_687_5, 0.221_875, 0.240_625, 0.5, 0.221_875, 0.832_812_5, 0.554_687_5, 0.554_687_5,
    0.554_687_5, 0.554_687_5, 0.332_812_5, 0.5, 0.276_562_5, 0.554_687_5, 0.5, 0.721_875, 0.5,
    0.5, 0.5, 0.354_687_5, 0.259_375, 0.353_125, 0.589_062_5,
];

/// Relative width of a single character at a 1px font size.
fn char_width(character: char,) -> f64
{
    let code = character as u32;
    if code < FIRST_PRINTABLE {
        return 0.0;
    }
    ASCII_WIDTHS.get((code - FIRST_PRINTABLE) as usize,).copied().unwrap_or(AVERAGE_CHAR_WIDTH,)
}

/// Estimates the rendered width of `text` in pixels at `font_size`.
///
/// The sum is scaled linearly from the 10px calibration, which means the
/// result is monotonically non-decreasing as characters are appended.
///
/// ```
/// use repocard::measure::measure;
///
/// let narrow = measure("iii", 12.0,);
/// let wide = measure("MMM", 12.0,);
/// assert!(wide > narrow);
/// assert!((measure("abc", 20.0,) - 2.0 * measure("abc", 10.0,)).abs() < 1e-9);
/// ```
pub fn measure(text: &str, font_size: f64,) -> f64
{
    let reference: f64 = text.chars().map(char_width,).sum::<f64,>() * REFERENCE_FONT_SIZE;
    reference * font_size / REFERENCE_FONT_SIZE
}

#[cfg(test)]
mod tests
{
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn empty_string_has_zero_width()
    {
        assert_eq!(measure("", 12.0,), 0.0);
    }

    #[test]
    fn known_characters_use_table_values()
    {
        let width = measure("a", 10.0,);
        assert!((width - 5.546_875).abs() < 1e-9);
        let digits = measure("1000", 12.0,);
        assert!((digits - 4.0 * 0.554_687_5 * 12.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_characters_fall_back_to_average()
    {
        let width = measure("ж", 10.0,);
        assert!((width - AVERAGE_CHAR_WIDTH * 10.0).abs() < 1e-9);
    }

    #[test]
    fn control_characters_measure_as_zero()
    {
        assert_eq!(measure("\u{7}", 10.0,), 0.0);
    }

    proptest! {
        #[test]
        fn appending_never_shrinks_width(base in "[ -~]{0,40}", suffix in "[ -~]{1,10}") {
            let extended = format!("{base}{suffix}");
            prop_assert!(measure(&extended, 12.0) >= measure(&base, 12.0));
        }

        #[test]
        fn width_scales_linearly_with_font_size(text in "[A-Za-z0-9 ]{1,30}", size in 1.0f64..64.0) {
            let expected = measure(&text, 10.0) * size / 10.0;
            prop_assert!((measure(&text, size) - expected).abs() < 1e-6);
        }
    }
}
