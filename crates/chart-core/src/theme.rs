// File: crates/chart-core/src/theme.rs
// Summary: Colors and named theme presets for chart scenes.

use std::fmt;

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    /// `0xRRGGBB`.
    pub const fn from_hex(rgb: u32) -> Self {
        Self::from_rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    pub fn is_opaque(&self) -> bool { self.a == 255 }
}

/// CSS color: `#rrggbb`, or `rgba(...)` when translucent.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            let alpha = self.a as f64 / 255.0;
            write!(f, "rgba({},{},{},{:.3})", self.r, self.g, self.b, alpha)
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub tick_label: Color,
    pub box_fill: Color,
    pub box_stroke: Color,
    pub line_stroke: Color,
    /// Categorical palette for post types.
    pub palette: Vec<Color>,
}

impl Theme {
    /// White page, black axes; the classic engagement-report look.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::WHITE,
            axis_line: Color::BLACK,
            axis_label: Color::BLACK,
            tick_label: Color::BLACK,
            box_fill: Color::from_hex(0x69b3a2),
            box_stroke: Color::BLACK,
            line_stroke: Color::from_hex(0x4682b4), // steelblue
            palette: vec![
                Color::from_hex(0x1f77b4),
                Color::from_hex(0xff7f0e),
                Color::from_hex(0x2ca02c),
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_rgb(18, 18, 20),
            axis_line: Color::from_rgb(180, 180, 190),
            axis_label: Color::from_rgb(235, 235, 245),
            tick_label: Color::from_rgb(150, 150, 160),
            box_fill: Color::from_rgb(64, 160, 140),
            box_stroke: Color::from_rgb(210, 210, 220),
            line_stroke: Color::from_rgb(64, 160, 255),
            palette: vec![
                Color::from_rgb(96, 156, 255),
                Color::from_rgb(255, 160, 64),
                Color::from_rgb(40, 200, 120),
            ],
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            background: Color::from_hex(0x000000),
            axis_line: Color::from_hex(0xffffff),
            axis_label: Color::from_hex(0xffffff),
            tick_label: Color::from_hex(0xcccccc),
            box_fill: Color::from_hex(0x00aaff),
            box_stroke: Color::from_hex(0xffffff),
            line_stroke: Color::from_hex(0x00ffff),
            palette: vec![
                Color::from_hex(0xffff00),
                Color::from_hex(0xff00ff),
                Color::from_hex(0x00ff00),
            ],
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
