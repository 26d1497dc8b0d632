// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Four-stroke spark glyphs flashing at random spots.

use super::{Inks, RandomSource};
use crate::svg::coord;

const SPARKS: usize = 10;
const MARGIN: f64 = 15.0;

/// Strokes of one spark, centered on the origin.
const GLYPH: &str = "<line x1=\"0\" y1=\"-5\" x2=\"0\" y2=\"5\"/>\
                     <line x1=\"-5\" y1=\"0\" x2=\"5\" y2=\"0\"/>\
                     <line x1=\"-3\" y1=\"-3\" x2=\"3\" y2=\"3\"/>\
                     <line x1=\"-3\" y1=\"3\" x2=\"3\" y2=\"-3\"/>";

pub(super) fn render(
    inks: &Inks<'_,>,
    width: f64,
    height: f64,
    random: &mut dyn RandomSource,
) -> (String, String,)
{
    let css = format!(
        ".spark {{ stroke: {accent}; stroke-width: 1.2; stroke-linecap: round; opacity: 0; \
         animation: sparkFlash 5s ease-out infinite; }}\n\
         @keyframes sparkFlash {{ 0%, 100% {{ opacity: 0; }} 5% {{ opacity: 1; stroke: {primary}; }} \
         15% {{ opacity: 0; }} }}\n",
        accent = inks.accent,
        primary = inks.primary,
    );

    let span_x = (width - 2.0 * MARGIN).max(0.0,);
    let span_y = (height - 2.0 * MARGIN).max(0.0,);
    let mut shapes = String::new();
    for index in 0..SPARKS {
        let x = MARGIN + random.next_f64() * span_x;
        let y = MARGIN + random.next_f64() * span_y;
        let rotation = random.next_f64() * 360.0;
        shapes.push_str(&format!(
            "<g transform=\"translate({}, {}) rotate({})\"><g class=\"spark\" \
             style=\"animation-delay: {}s\">{GLYPH}</g></g>",
            coord(x,),
            coord(y,),
            coord(rotation,),
            coord(index as f64 * 0.5,),
        ),);
    }

    (css, shapes,)
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::animation::{SequenceRandom, StdRandom};

    fn inks() -> Inks<'static,>
    {
        Inks {
            primary: "#586069", accent: "#2f80ed", text: "#434d58",
        }
    }

    #[test]
    fn renders_ten_four_stroke_sparks()
    {
        let (_, shapes,) = render(&inks(), 400.0, 120.0, &mut StdRandom::seeded(3,),);
        assert_eq!(shapes.matches("class=\"spark\"",).count(), 10);
        assert_eq!(shapes.matches("<line",).count(), 40);
    }

    #[test]
    fn placement_follows_injected_source()
    {
        let mut source = SequenceRandom::new(vec![0.5, 0.0, 0.25],);
        let (_, shapes,) = render(&inks(), 400.0, 120.0, &mut source,);
        assert!(shapes.starts_with("<g transform=\"translate(200, 15) rotate(90)\">"));
    }

    #[test]
    fn seeds_change_placement()
    {
        let first = render(&inks(), 400.0, 120.0, &mut StdRandom::seeded(5,),);
        let second = render(&inks(), 400.0, 120.0, &mut StdRandom::seeded(6,),);
        assert_eq!(first.0, second.0);
        assert_ne!(first.1, second.1);
    }
}
