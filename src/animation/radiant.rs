// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Rays sweeping out from the card center around a pulsing core.

use super::Inks;
use crate::svg::coord;

const RAYS: usize = 16;
const STEP_DEGREES: f64 = 22.5;
const INNER_RADIUS: f64 = 20.0;

pub(super) fn render(inks: &Inks<'_,>, width: f64, height: f64,) -> (String, String,)
{
    let css = format!(
        ".radiant-ray {{ stroke: {accent}; stroke-width: 1.5; stroke-linecap: round; opacity: 0.08; \
         animation: rayPulse 2s ease-in-out infinite; }}\n\
         @keyframes rayPulse {{ 0%, 100% {{ opacity: 0.08; }} 50% {{ opacity: 0.45; }} }}\n\
         .radiant-core {{ fill: {primary}; opacity: 0.25; transform-origin: center; transform-box: fill-box; \
         animation: corePulse 2s ease-in-out infinite; }}\n\
         @keyframes corePulse {{ 0%, 100% {{ transform: scale(1); opacity: 0.25; }} \
         50% {{ transform: scale(1.4); opacity: 0.5; }} }}\n",
        accent = inks.accent,
        primary = inks.primary,
    );

    let cx = width / 2.0;
    let cy = height / 2.0;
    let outer = width.hypot(height,) / 2.0;

    let mut shapes = String::new();
    for index in 0..RAYS {
        let angle = (index as f64 * STEP_DEGREES).to_radians();
        let (sin, cos,) = angle.sin_cos();
        shapes.push_str(&format!(
            "<line class=\"radiant-ray\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" \
             style=\"animation-delay: {}s\"/>",
            coord(cx + INNER_RADIUS * cos,),
            coord(cy + INNER_RADIUS * sin,),
            coord(cx + outer * cos,),
            coord(cy + outer * sin,),
            coord(index as f64 * 0.125,),
        ),);
    }
    shapes.push_str(&format!(
        "<circle class=\"radiant-core\" cx=\"{}\" cy=\"{}\" r=\"{}\"/>",
        coord(cx,),
        coord(cy,),
        coord(INNER_RADIUS / 2.0,),
    ),);

    (css, shapes,)
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn inks() -> Inks<'static,>
    {
        Inks {
            primary: "#586069", accent: "#2f80ed", text: "#434d58",
        }
    }

    #[test]
    fn renders_sixteen_rays_and_one_core()
    {
        let (_, shapes,) = render(&inks(), 400.0, 120.0,);
        assert_eq!(shapes.matches("class=\"radiant-ray\"",).count(), 16);
        assert_eq!(shapes.matches("class=\"radiant-core\"",).count(), 1);
    }

    #[test]
    fn output_is_byte_identical_across_calls()
    {
        assert_eq!(render(&inks(), 400.0, 120.0), render(&inks(), 400.0, 120.0));
    }

    #[test]
    fn first_ray_points_right_and_delays_sweep()
    {
        let (_, shapes,) = render(&inks(), 400.0, 120.0,);
        assert!(shapes.starts_with("<line class=\"radiant-ray\" x1=\"220\" y1=\"60\""));
        assert!(shapes.contains("animation-delay: 0.5s"));
        assert!(shapes.contains("animation-delay: 1s"));
    }
}
