// File: crates/chart-core/src/scene.rs
// Summary: Declarative shape descriptors produced by chart renderers and consumed by drawing backends.

use crate::theme::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Baseline {
    Middle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineShape {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: Stroke,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectShape {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
    pub opacity: Option<f64>,
}

impl RectShape {
    /// Rect with negative extents clamped to zero.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width: width.max(0.0), height: height.max(0.0), fill: None, stroke: None, opacity: None }
    }
    #[must_use]
    pub fn with_fill(mut self, fill: Color) -> Self { self.fill = Some(fill); self }
    #[must_use]
    pub fn with_stroke(mut self, stroke: Stroke) -> Self { self.stroke = Some(stroke); self }
    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self { self.opacity = Some(opacity); self }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    HorizontalTo(f64),
    VerticalTo(f64),
    /// Two control points, then the end point.
    CubicTo(f64, f64, f64, f64, f64, f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct PathShape {
    pub commands: Vec<PathCommand>,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextShape {
    pub x: f64,
    pub y: f64,
    /// Offsets in em, applied after positioning.
    pub dx: f64,
    pub dy: f64,
    /// Degrees, about the SVG origin of the text's coordinate system.
    pub rotate: Option<f64>,
    pub anchor: Option<TextAnchor>,
    pub baseline: Option<Baseline>,
    pub fill: Option<Color>,
    pub class: Option<&'static str>,
    pub content: String,
}

impl TextShape {
    pub fn new(x: f64, y: f64, content: impl Into<String>) -> Self {
        Self {
            x,
            y,
            dx: 0.0,
            dy: 0.0,
            rotate: None,
            anchor: None,
            baseline: None,
            fill: None,
            class: None,
            content: content.into(),
        }
    }
    #[must_use]
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self { self.anchor = Some(anchor); self }
    #[must_use]
    pub fn with_offset_em(mut self, dx: f64, dy: f64) -> Self { self.dx = dx; self.dy = dy; self }
    #[must_use]
    pub fn with_rotation(mut self, degrees: f64) -> Self { self.rotate = Some(degrees); self }
    #[must_use]
    pub fn with_baseline(mut self, baseline: Baseline) -> Self { self.baseline = Some(baseline); self }
    #[must_use]
    pub fn with_fill(mut self, fill: Color) -> Self { self.fill = Some(fill); self }
    #[must_use]
    pub fn with_class(mut self, class: &'static str) -> Self { self.class = Some(class); self }
}

/// Text attributes inherited by a group's children.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FontSpec {
    pub size: Option<f64>,
    pub family: Option<&'static str>,
    pub anchor: Option<TextAnchor>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Group {
    pub translate: (f64, f64),
    pub font: FontSpec,
    pub class: Option<&'static str>,
    pub children: Vec<Shape>,
}

impl Group {
    pub fn at(x: f64, y: f64) -> Self {
        Self { translate: (x, y), ..Self::default() }
    }
    #[must_use]
    pub fn with_class(mut self, class: &'static str) -> Self { self.class = Some(class); self }
    #[must_use]
    pub fn with_font(mut self, font: FontSpec) -> Self { self.font = font; self }
    pub fn push(&mut self, shape: impl Into<Shape>) { self.children.push(shape.into()); }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Line(LineShape),
    Rect(RectShape),
    Path(PathShape),
    Text(TextShape),
    Group(Group),
}

impl From<LineShape> for Shape {
    fn from(s: LineShape) -> Self { Shape::Line(s) }
}
impl From<RectShape> for Shape {
    fn from(s: RectShape) -> Self { Shape::Rect(s) }
}
impl From<PathShape> for Shape {
    fn from(s: PathShape) -> Self { Shape::Path(s) }
}
impl From<TextShape> for Shape {
    fn from(s: TextShape) -> Self { Shape::Text(s) }
}
impl From<Group> for Shape {
    fn from(s: Group) -> Self { Shape::Group(s) }
}

impl Shape {
    /// Depth-first visit of this shape and all nested group children.
    pub fn walk<'a>(&'a self, f: &mut dyn FnMut(&'a Shape)) {
        f(self);
        if let Shape::Group(g) = self {
            for c in &g.children {
                c.walk(f);
            }
        }
    }
}

/// One chart, ready to be drawn into the mount point named `mount`.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub mount: String,
    pub width: u32,
    pub height: u32,
    /// Plot-area origin inside the outer box.
    pub origin: (f64, f64),
    pub background: Option<Color>,
    pub shapes: Vec<Shape>,
}

impl Scene {
    /// All shapes, flattened depth-first.
    pub fn iter_shapes(&self) -> Vec<&Shape> {
        let mut out = Vec::new();
        for s in &self.shapes {
            s.walk(&mut |shape| out.push(shape));
        }
        out
    }

    pub fn count_where(&self, pred: impl Fn(&Shape) -> bool) -> usize {
        self.iter_shapes().into_iter().filter(|s| pred(*s)).count()
    }
}
