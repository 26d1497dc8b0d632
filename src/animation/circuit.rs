// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Data pulses travelling around an inset border.

use super::Inks;
use crate::svg::coord;

const DOTS: usize = 6;
const INSET: f64 = 8.0;
const LOOP_SECONDS: f64 = 8.0;

pub(super) fn render(inks: &Inks<'_,>, width: f64, height: f64,) -> (String, String,)
{
    let css = format!(
        ".circuit-edge {{ stroke: {accent}; stroke-width: 1; opacity: 0.15; \
         animation: circuitGlow 3s ease-in-out infinite; }}\n\
         @keyframes circuitGlow {{ 0%, 100% {{ opacity: 0.15; }} 50% {{ opacity: 0.6; }} }}\n\
         .circuit-dot {{ fill: {primary}; opacity: 0.8; }}\n",
        accent = inks.accent,
        primary = inks.primary,
    );

    let left = INSET;
    let top = INSET;
    let right = (width - INSET).max(left,);
    let bottom = (height - INSET).max(top,);

    let edges = [
        (left, top, right, top,),
        (right, top, right, bottom,),
        (right, bottom, left, bottom,),
        (left, bottom, left, top,),
    ];
    let mut shapes = String::new();
    for (index, (x1, y1, x2, y2,),) in edges.into_iter().enumerate() {
        shapes.push_str(&format!(
            "<line class=\"circuit-edge\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" \
             style=\"animation-delay: {}s\"/>",
            coord(x1,),
            coord(y1,),
            coord(x2,),
            coord(y2,),
            coord(index as f64 * 0.75,),
        ),);
    }

    let path = format!(
        "M {l} {t} L {r} {t} L {r} {b} L {l} {b} Z",
        l = coord(left,),
        t = coord(top,),
        r = coord(right,),
        b = coord(bottom,),
    );
    for index in 0..DOTS {
        let offset = index as f64 * LOOP_SECONDS / DOTS as f64;
        shapes.push_str(&format!(
            "<circle class=\"circuit-dot\" r=\"2\"><animateMotion dur=\"{}s\" begin=\"-{}s\" \
             repeatCount=\"indefinite\" path=\"{}\"/></circle>",
            coord(LOOP_SECONDS,),
            coord(offset,),
            path,
        ),);
    }

    (css, shapes,)
}
