// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Underwater scene: rising bubbles, drifting jellyfish and starfish, plus the
//! per-character wave title.

use std::f64::consts::PI;

use unicode_segmentation::UnicodeSegmentation;

use super::{Inks, WaveTuning};
use crate::svg::{coord, escape_xml};

const BUBBLES: usize = 8;
const JELLYFISH: usize = 2;
const TENTACLES: usize = 6;
const STARFISH: usize = 2;
const STAR_OUTER_RADIUS: f64 = 7.0;
const STAR_INNER_RADIUS: f64 = 3.0;

pub(super) fn render(inks: &Inks<'_,>, width: f64, height: f64, tuning: &WaveTuning,) -> (String, String,)
{
    let mut shapes = String::from(
        "<defs><filter id=\"jelly-glow\" x=\"-50%\" y=\"-50%\" width=\"200%\" height=\"200%\">\
         <feGaussianBlur stdDeviation=\"1.5\" result=\"blur\"/>\
         <feMerge><feMergeNode in=\"blur\"/><feMergeNode in=\"SourceGraphic\"/></feMerge>\
         </filter></defs>",
    );
    for index in 0..BUBBLES {
        shapes.push_str(&bubble(inks, width, height, index,),);
    }
    for index in 0..JELLYFISH {
        shapes.push_str(&jellyfish(inks, width, height, index,),);
    }
    for index in 0..STARFISH {
        shapes.push_str(&starfish(inks, height, index,),);
    }

    (style_sheet(inks, width, height, tuning,), shapes,)
}

fn style_sheet(inks: &Inks<'_,>, width: f64, height: f64, tuning: &WaveTuning,) -> String
{
    let mut css = format!(
        ".bubble {{ opacity: 0; animation-name: bubbleRise; animation-timing-function: ease-in; \
         animation-iteration-count: infinite; }}\n\
         @keyframes bubbleRise {{ 0% {{ transform: translateY(0); opacity: 0; }} \
         10% {{ opacity: 0.6; }} 100% {{ transform: translateY(-{rise}px); opacity: 0; }} }}\n\
         .jellyfish {{ opacity: 0; }}\n\
         @keyframes jellyDrift {{ 0%, 100% {{ opacity: 0; }} 15%, 85% {{ opacity: 0.7; }} }}\n\
         @keyframes starfishDrift {{ 0% {{ transform: translateX({start}px) rotate(0deg); }} \
         100% {{ transform: translateX(-20px) rotate(-360deg); }} }}\n\
         .wave-char {{ display: inline-block; animation: waveChar {speed}s ease-in-out infinite; }}\n\
         @keyframes waveChar {{ 0%, 100% {{ transform: translateY(0); }} \
         50% {{ transform: translateY(-{amplitude}px); }} }}\n",
        rise = coord(height + 20.0,),
        start = coord(width + 20.0,),
        speed = coord(tuning.speed,),
        amplitude = coord(tuning.amplitude,),
    );

    if tuning.color_morph {
        css.push_str(&format!(
            ".header {{ animation: colorMorph {cycle}s linear infinite; }}\n\
             @keyframes colorMorph {{ 0%, 100% {{ fill: {accent}; }} 33% {{ fill: {primary}; }} \
             66% {{ fill: {text}; }} }}\n",
            cycle = coord(tuning.speed * 3.0,),
            accent = inks.accent,
            primary = inks.primary,
            text = inks.text,
        ),);
    }

    css
}

fn bubble(inks: &Inks<'_,>, width: f64, height: f64, index: usize,) -> String
{
    let slot = width / BUBBLES as f64;
    let cx = slot * (index as f64 + 0.5);
    let radius = 3.0 + (index % 3) as f64 * 1.5;
    let duration = 6.0 + (index % 4) as f64;
    let delay = index as f64 * 0.6;

    format!(
        "<circle class=\"bubble\" cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" fill-opacity=\"0.35\" \
         style=\"animation-duration: {}s; animation-delay: {}s\"/>",
        coord(cx,),
        coord(height + radius,),
        coord(radius,),
        inks.primary,
        coord(duration,),
        coord(delay,),
    )
}

fn jellyfish(inks: &Inks<'_,>, width: f64, height: f64, index: usize,) -> String
{
    let baseline = height * (0.35 + 0.3 * index as f64);
    let duration = 12.0 + index as f64 * 4.0;
    let delay = index as f64 * 6.0;

    let mut tentacles = String::new();
    for strand in 0..TENTACLES {
        let x = -6.25 + strand as f64 * 2.5;
        tentacles.push_str(&format!(
            "<path class=\"tentacle\" d=\"M {x} 0 q 2 4 0 8 q -2 4 0 8\" fill=\"none\" stroke=\"{}\" \
             stroke-width=\"0.8\" stroke-linecap=\"round\"/>",
            inks.accent,
            x = coord(x,),
        ),);
    }

    format!(
        "<g class=\"jellyfish\" filter=\"url(#jelly-glow)\" \
         style=\"animation: jellyDrift {dur}s ease-in-out {delay}s infinite\">\
         <animateMotion dur=\"{dur}s\" begin=\"{delay}s\" repeatCount=\"indefinite\" \
         path=\"M -30 {y} Q {mid} {crest} {end} {y}\"/>\
         <path d=\"M -8 0 A 8 8 0 0 1 8 0 Z\" fill=\"{accent}\" fill-opacity=\"0.5\"/>{tentacles}</g>",
        dur = coord(duration,),
        delay = coord(delay,),
        y = coord(baseline,),
        mid = coord(width / 2.0,),
        crest = coord(baseline - 30.0,),
        end = coord(width + 30.0,),
        accent = inks.accent,
    )
}

/// Five-pointed star as ten alternating outer/inner vertices around the origin.
fn star_points() -> String
{
    (0..10)
        .map(|vertex| {
            let radius = if vertex % 2 == 0 { STAR_OUTER_RADIUS } else { STAR_INNER_RADIUS };
            let angle = -PI / 2.0 + vertex as f64 * PI / 5.0;
            format!("{},{}", coord(radius * angle.cos(),), coord(radius * angle.sin(),))
        },)
        .collect::<Vec<String,>>()
        .join(" ",)
}

fn starfish(inks: &Inks<'_,>, height: f64, index: usize,) -> String
{
    let y = height * (0.3 + 0.45 * index as f64);
    let duration = 15.0 + index as f64 * 5.0;
    let delay = index as f64 * 7.0;

    format!(
        "<g transform=\"translate(0, {})\"><g class=\"starfish\" \
         style=\"animation: starfishDrift {}s linear {}s infinite backwards\">\
         <polygon points=\"{}\" fill=\"{}\" fill-opacity=\"0.45\"/></g></g>",
        coord(y,),
        coord(duration,),
        coord(delay,),
        star_points(),
        inks.primary,
    )
}

/// Splits `text` into one delayed `<tspan>` per grapheme for the wave title.
///
/// Whitespace becomes a non-breaking space so each span keeps its advance.
pub fn wave_title(text: &str, tuning: &WaveTuning,) -> String
{
    let mut markup = String::new();
    for (index, grapheme,) in text.graphemes(true,).enumerate() {
        let content =
            if grapheme.chars().all(char::is_whitespace,) { "\u{a0}".into() } else { escape_xml(grapheme,) };
        markup.push_str(&format!(
            "<tspan class=\"wave-char\" style=\"animation-delay: {}s\">{}</tspan>",
            coord(index as f64 * tuning.delay,),
            content,
        ),);
    }
    markup
}
