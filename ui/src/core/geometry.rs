//! Geometry for the inline SVG charts.
//!
//! The chart cards draw themselves with plain `rect` and `path` elements;
//! everything that needs trigonometry or scaling is computed here so the
//! components stay declarative and the math stays testable.

use std::fmt::Write as _;

use std::f32::consts::{PI, TAU};

/// One bar of the skills chart, in plot-local SVG units (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Lays out `values` as vertical bars filling a `plot_w` x `plot_h` region.
///
/// Bars keep the input order, are scaled against `scale_max` (normally the
/// top axis tick, so bars line up with the gridlines), and get 30% of each
/// slot as breathing room. A zero `scale_max` collapses every bar onto the
/// baseline rather than dividing by zero.
pub fn bar_rects(values: &[u64], scale_max: u64, plot_w: f32, plot_h: f32) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }

    let slot = plot_w / values.len() as f32;
    let width = slot * 0.7;

    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let height = if scale_max == 0 {
                0.0
            } else {
                plot_h * value as f32 / scale_max as f32
            };
            BarRect {
                x: i as f32 * slot + slot * 0.15,
                y: plot_h - height,
                width,
                height,
            }
        })
        .collect()
}

/// Axis tick values from zero through (at least) `max`, at a step of
/// 1, 2, or 5 times a power of ten, aiming for about `target` intervals.
pub fn nice_ticks(max: u64, target: usize) -> Vec<u64> {
    if max == 0 {
        return vec![0];
    }

    let target = target.max(1) as u64;
    let step = nice_step(max.div_ceil(target));

    let mut ticks = Vec::new();
    let mut tick = 0u64;
    loop {
        ticks.push(tick);
        if tick >= max {
            break;
        }
        tick += step;
    }
    ticks
}

fn nice_step(raw: u64) -> u64 {
    let mut magnitude = 1u64;
    loop {
        for mult in [1, 2, 5] {
            let step = mult * magnitude;
            if step >= raw {
                return step;
            }
        }
        magnitude *= 10;
    }
}

/// One doughnut segment: the SVG path for its annular sector, the index of
/// the value it came from (zero-count values produce no segment), and its
/// share of the total.
#[derive(Debug, Clone, PartialEq)]
pub struct DoughnutSegment {
    pub index: usize,
    pub path: String,
    pub fraction: f32,
}

/// Slices `values` into doughnut segments around (`cx`, `cy`).
///
/// Starts at twelve o'clock and runs clockwise. Zero values are skipped
/// (their index simply never appears); an all-zero or empty input yields no
/// segments. A single non-zero value produces one full ring.
pub fn doughnut_segments(
    values: &[u64],
    cx: f32,
    cy: f32,
    outer: f32,
    inner: f32,
) -> Vec<DoughnutSegment> {
    let total: u64 = values.iter().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut angle = -TAU / 4.0;

    for (index, &value) in values.iter().enumerate() {
        if value == 0 {
            continue;
        }
        let fraction = value as f32 / total as f32;
        let end = angle + fraction * TAU;

        let mut path = String::new();
        let (start_x, start_y) = polar(cx, cy, outer, angle);
        let _ = write!(path, "M {start_x:.2} {start_y:.2}");
        push_arc(&mut path, cx, cy, outer, angle, end);
        let (inner_x, inner_y) = polar(cx, cy, inner, end);
        let _ = write!(path, " L {inner_x:.2} {inner_y:.2}");
        push_arc(&mut path, cx, cy, inner, end, angle);
        path.push_str(" Z");

        segments.push(DoughnutSegment {
            index,
            path,
            fraction,
        });
        angle = end;
    }

    segments
}

fn polar(cx: f32, cy: f32, radius: f32, angle: f32) -> (f32, f32) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// Appends arc commands from `a0` to `a1` at `radius`, splitting anything
/// wider than a half turn in two so the large-arc flag is never needed.
/// A full turn therefore becomes two semicircles, which is what lets a
/// lone segment render as a complete ring.
fn push_arc(d: &mut String, cx: f32, cy: f32, radius: f32, a0: f32, a1: f32) {
    let sweep = u8::from(a1 >= a0);
    let steps = if (a1 - a0).abs() > PI { 2 } else { 1 };
    let step = (a1 - a0) / steps as f32;

    let mut from = a0;
    for _ in 0..steps {
        let to = from + step;
        let (x, y) = polar(cx, cy, radius, to);
        let _ = write!(d, " A {radius:.2} {radius:.2} 0 0 {sweep} {x:.2} {y:.2}");
        from = to;
    }
}
