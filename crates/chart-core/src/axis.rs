// File: crates/chart-core/src/axis.rs
// Summary: Axis model (ticks + labels) built from band/linear scales, and its shape layout.

use crate::scale::{BandScale, LinearScale, Range};
use crate::scene::{FontSpec, Group, LineShape, PathCommand, PathShape, Shape, Stroke, TextAnchor, TextShape};
use crate::theme::Theme;
use crate::types::ChartLayout;

pub const TICK_SIZE: f64 = 6.0;
pub const TICK_PADDING: f64 = 3.0;
pub const FONT_SIZE: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrientation {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Rotated tick labels (e.g. crowded date labels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelRotation {
    pub degrees: f64,
    pub dx_em: f64,
    pub dy_em: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orientation: AxisOrientation,
    pub range: Range,
    pub ticks: Vec<Tick>,
    pub tick_size_inner: f64,
    pub tick_size_outer: f64,
    pub rotation: Option<LabelRotation>,
}

impl Axis {
    pub fn new(orientation: AxisOrientation, range: Range, ticks: Vec<Tick>) -> Self {
        Self {
            orientation,
            range,
            ticks,
            tick_size_inner: TICK_SIZE,
            tick_size_outer: TICK_SIZE,
            rotation: None,
        }
    }

    /// One tick per category, at the band center.
    pub fn from_band(orientation: AxisOrientation, scale: &BandScale) -> Self {
        let ticks = scale
            .domain()
            .filter_map(|v| scale.center(v).map(|position| Tick { position, label: v.to_string() }))
            .collect();
        Self::new(orientation, scale.range(), ticks)
    }

    /// About `count` round-valued ticks.
    pub fn from_linear(orientation: AxisOrientation, scale: &LinearScale, count: usize) -> Self {
        let fmt = scale.tick_format(count);
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|v| Tick { position: scale.map(v), label: fmt(v) })
            .collect();
        Self::new(orientation, scale.range(), ticks)
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: LabelRotation) -> Self {
        self.rotation = Some(rotation);
        self
    }

    /// Lay the axis out as a group translated to `at`.
    pub fn to_shape(&self, at: (f64, f64), theme: &Theme) -> Shape {
        let stroke = Stroke::new(theme.axis_line, 1.0);
        let anchor = match self.orientation {
            AxisOrientation::Bottom => TextAnchor::Middle,
            AxisOrientation::Left => TextAnchor::End,
        };
        let mut g = Group::at(at.0, at.1).with_class("axis").with_font(FontSpec {
            size: Some(FONT_SIZE),
            family: Some("sans-serif"),
            anchor: Some(anchor),
        });

        let (r0, r1) = self.range;
        let outer = self.tick_size_outer;
        let domain = match self.orientation {
            AxisOrientation::Bottom => vec![
                PathCommand::MoveTo(r0, outer),
                PathCommand::VerticalTo(0.0),
                PathCommand::HorizontalTo(r1),
                PathCommand::VerticalTo(outer),
            ],
            AxisOrientation::Left => vec![
                PathCommand::MoveTo(-outer, r0),
                PathCommand::HorizontalTo(0.0),
                PathCommand::VerticalTo(r1),
                PathCommand::HorizontalTo(-outer),
            ],
        };
        g.push(PathShape { commands: domain, fill: None, stroke: Some(stroke) });

        let spacing = self.tick_size_inner.max(0.0) + TICK_PADDING;
        for tick in &self.ticks {
            let mut tg = match self.orientation {
                AxisOrientation::Bottom => Group::at(tick.position, 0.0),
                AxisOrientation::Left => Group::at(0.0, tick.position),
            }
            .with_class("tick");

            let (line, text) = match self.orientation {
                AxisOrientation::Bottom => (
                    LineShape { x1: 0.0, y1: 0.0, x2: 0.0, y2: self.tick_size_inner, stroke },
                    TextShape::new(0.0, spacing, tick.label.as_str()).with_offset_em(0.0, 0.71),
                ),
                AxisOrientation::Left => (
                    LineShape { x1: 0.0, y1: 0.0, x2: -self.tick_size_inner, y2: 0.0, stroke },
                    TextShape::new(-spacing, 0.0, tick.label.as_str()).with_offset_em(0.0, 0.32),
                ),
            };
            let mut text = text.with_fill(theme.tick_label);
            if let Some(rot) = self.rotation {
                text = text
                    .with_anchor(TextAnchor::End)
                    .with_offset_em(rot.dx_em, rot.dy_em)
                    .with_rotation(rot.degrees);
            }
            tg.push(line);
            tg.push(text);
            g.push(tg);
        }
        g.into()
    }
}

/// Centered x title below the plot and rotated y title left of it.
pub fn axis_titles(layout: &ChartLayout, x_label: &str, y_label: &str, theme: &Theme) -> Vec<Shape> {
    let w = layout.plot_width();
    let h = layout.plot_height();
    let bottom = layout.insets.bottom as f64;
    let left = layout.insets.left as f64;
    vec![
        TextShape::new(w / 2.0, h + bottom / 2.0, x_label)
            .with_anchor(TextAnchor::Middle)
            .with_class("axis-label")
            .with_fill(theme.axis_label)
            .into(),
        TextShape::new(-h / 2.0, -left / 2.0 - 10.0, y_label)
            .with_rotation(-90.0)
            .with_anchor(TextAnchor::Middle)
            .with_class("axis-label")
            .with_fill(theme.axis_label)
            .into(),
    ]
}
