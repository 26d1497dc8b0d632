// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Glowing embers scattered over the lower half of the card.

use super::{Inks, RandomSource};
use crate::svg::coord;

const EMBERS: usize = 12;

pub(super) fn render(
    inks: &Inks<'_,>,
    width: f64,
    height: f64,
    random: &mut dyn RandomSource,
) -> (String, String,)
{
    let css = format!(
        ".ember {{ fill: {}; opacity: 0.2; animation: emberGlow 3s ease-in-out infinite; }}\n\
         @keyframes emberGlow {{ 0%, 100% {{ opacity: 0.2; transform: translateY(0); }} \
         50% {{ opacity: 0.9; transform: translateY(-4px); }} }}\n",
        inks.accent,
    );

    let mut shapes = String::new();
    for index in 0..EMBERS {
        let cx = 20.0 + random.next_f64() * (width - 40.0).max(0.0,);
        let cy = height * 0.35 + random.next_f64() * height * 0.55;
        let radius = 1.5 + (index % 3) as f64 * 0.75;
        shapes.push_str(&format!(
            "<circle class=\"ember\" cx=\"{}\" cy=\"{}\" r=\"{}\" style=\"animation-delay: {}s\"/>",
            coord(cx,),
            coord(cy,),
            coord(radius,),
            coord(index as f64 * 0.25,),
        ),);
    }

    (css, shapes,)
}
