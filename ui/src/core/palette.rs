//! Accent colors for the charts.
//!
//! The doughnut cycles through four brand hues. Job-type lists longer than
//! the palette wrap around; each completed cycle darkens the hues by a fixed
//! factor so a wrapped segment never repeats an earlier one exactly.

/// An `rgba(...)` color. Alpha is kept separate so the same hue can serve
/// as translucent fill and stronger border.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    /// CSS color function form, e.g. `rgba(59, 130, 246, 0.5)`.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// One chart slot: translucent fill plus a border of the same hue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentColor {
    pub fill: Rgba,
    pub border: Rgba,
}

/// Bar fill for the skills chart.
pub const BAR_FILL: Rgba = Rgba {
    r: 59,
    g: 130,
    b: 246,
    a: 0.3,
};

/// Bar border for the skills chart.
pub const BAR_BORDER: Rgba = Rgba {
    r: 59,
    g: 130,
    b: 246,
    a: 0.8,
};

/// Brand hues, in doughnut order: blue, green, violet, rose.
const BASE_HUES: [(u8, u8, u8); 4] = [
    (59, 130, 246),
    (16, 185, 129),
    (139, 92, 246),
    (244, 63, 94),
];

const FILL_ALPHA: f32 = 0.5;
const BORDER_ALPHA: f32 = 0.8;

/// Darkening applied per completed trip through [`BASE_HUES`].
const CYCLE_DARKEN: f32 = 0.72;

/// Color for doughnut segment `index`.
///
/// Indices 0..=3 are the brand hues verbatim; each later cycle reuses them
/// darkened, so arbitrarily long job-type lists stay distinguishable.
pub fn segment_color(index: usize) -> SegmentColor {
    let (r, g, b) = BASE_HUES[index % BASE_HUES.len()];
    let cycle = (index / BASE_HUES.len()) as i32;
    let factor = CYCLE_DARKEN.powi(cycle);

    let darken = |channel: u8| -> u8 { (f32::from(channel) * factor).round() as u8 };
    let (r, g, b) = (darken(r), darken(g), darken(b));

    SegmentColor {
        fill: Rgba {
            r,
            g,
            b,
            a: FILL_ALPHA,
        },
        border: Rgba {
            r,
            g,
            b,
            a: BORDER_ALPHA,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_four_slots_are_the_brand_hues() {
        for (index, &(r, g, b)) in BASE_HUES.iter().enumerate() {
            let color = segment_color(index);
            assert_eq!((color.fill.r, color.fill.g, color.fill.b), (r, g, b));
            assert_eq!((color.border.r, color.border.g, color.border.b), (r, g, b));
        }
    }

    #[test]
    fn fills_and_borders_share_the_hue_but_not_the_alpha() {
        let color = segment_color(1);
        assert_eq!(color.fill.r, color.border.r);
        assert_eq!(color.fill.a, FILL_ALPHA);
        assert_eq!(color.border.a, BORDER_ALPHA);
    }

    #[test]
    fn second_cycle_is_darker_than_the_first() {
        let first = segment_color(0);
        let wrapped = segment_color(4);

        assert_ne!(first, wrapped);
        assert!(wrapped.fill.r < first.fill.r);
        assert!(wrapped.fill.g < first.fill.g);
        assert!(wrapped.fill.b < first.fill.b);
    }

    #[test]
    fn colors_are_deterministic() {
        assert_eq!(segment_color(7), segment_color(7));
    }

    #[test]
    fn css_form_is_chart_ready() {
        assert_eq!(BAR_FILL.css(), "rgba(59, 130, 246, 0.3)");
        assert_eq!(segment_color(0).fill.css(), "rgba(59, 130, 246, 0.5)");
    }
}
