// File: crates/chart-render-svg/src/lib.rs
// Summary: SVG backend: turns chart-core scenes into SVG markup and an HTML page with one mount point per chart.

use std::fmt::Write;

use chart_core::scene::{
    Baseline, FontSpec, Group, LineShape, PathCommand, PathShape, RectShape, Scene, Shape, TextAnchor, TextShape,
};

/// Stylesheet shared by every page.
const PAGE_STYLE: &str = "body { font-family: sans-serif; margin: 24px; }
.chart { margin-bottom: 32px; }
.axis-label { font-size: 14px; font-weight: bold; }";

/// Render one scene as a standalone `<svg>` element.
pub fn render_svg(scene: &Scene) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        scene.width, scene.height, scene.width, scene.height
    );
    if let Some(bg) = scene.background {
        let _ = writeln!(out, r#"  <rect width="100%" height="100%" fill="{bg}"/>"#);
    }
    let _ = writeln!(
        out,
        r#"  <g transform="translate({},{})">"#,
        num(scene.origin.0),
        num(scene.origin.1)
    );
    for shape in &scene.shapes {
        write_shape(&mut out, shape, 2);
    }
    out.push_str("  </g>\n</svg>\n");
    out
}

/// Full HTML document; each scene sits in a `<div id="{mount}">`.
pub fn render_page(title: &str, scenes: &[Scene]) -> String {
    let title = escape(title);
    let mut out = String::new();
    let _ = writeln!(out, "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">");
    let _ = writeln!(out, "<title>{title}</title>\n<style>\n{PAGE_STYLE}\n</style>\n</head>\n<body>");
    let _ = writeln!(out, "<h1>{title}</h1>");
    for scene in scenes {
        let _ = writeln!(out, r#"<div id="{}" class="chart">"#, escape(&scene.mount));
        out.push_str(&render_svg(scene));
        out.push_str("</div>\n");
    }
    out.push_str("</body>\n</html>\n");
    out
}

fn write_shape(out: &mut String, shape: &Shape, depth: usize) {
    let pad = "  ".repeat(depth);
    match shape {
        Shape::Line(l) => {
            let _ = writeln!(out, "{pad}{}", line(l));
        }
        Shape::Rect(r) => {
            let _ = writeln!(out, "{pad}{}", rect(r));
        }
        Shape::Path(p) => {
            let _ = writeln!(out, "{pad}{}", path(p));
        }
        Shape::Text(t) => {
            let _ = writeln!(out, "{pad}{}", text(t));
        }
        Shape::Group(g) => {
            let _ = writeln!(out, "{pad}{}", group_open(g));
            for child in &g.children {
                write_shape(out, child, depth + 1);
            }
            let _ = writeln!(out, "{pad}</g>");
        }
    }
}

fn line(l: &LineShape) -> String {
    format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
        num(l.x1),
        num(l.y1),
        num(l.x2),
        num(l.y2),
        l.stroke.color,
        num(l.stroke.width)
    )
}

fn rect(r: &RectShape) -> String {
    let mut s = format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
        num(r.x),
        num(r.y),
        num(r.width),
        num(r.height)
    );
    if let Some(fill) = r.fill {
        let _ = write!(s, r#" fill="{fill}""#);
    }
    if let Some(stroke) = r.stroke {
        let _ = write!(s, r#" stroke="{}" stroke-width="{}""#, stroke.color, num(stroke.width));
    }
    if let Some(o) = r.opacity {
        let _ = write!(s, r#" opacity="{}""#, num(o));
    }
    s.push_str("/>");
    s
}

fn path(p: &PathShape) -> String {
    let fill = p.fill.map_or_else(|| "none".to_string(), |c| c.to_string());
    let mut s = format!(r#"<path d="{}" fill="{fill}""#, path_data(&p.commands));
    if let Some(stroke) = p.stroke {
        let _ = write!(s, r#" stroke="{}" stroke-width="{}""#, stroke.color, num(stroke.width));
    }
    s.push_str("/>");
    s
}

/// SVG path data, e.g. `M0,6V0H540V6`.
pub fn path_data(commands: &[PathCommand]) -> String {
    let mut d = String::new();
    for c in commands {
        let _ = match *c {
            PathCommand::MoveTo(x, y) => write!(d, "M{},{}", num(x), num(y)),
            PathCommand::LineTo(x, y) => write!(d, "L{},{}", num(x), num(y)),
            PathCommand::HorizontalTo(x) => write!(d, "H{}", num(x)),
            PathCommand::VerticalTo(y) => write!(d, "V{}", num(y)),
            PathCommand::CubicTo(x1, y1, x2, y2, x, y) => write!(
                d,
                "C{},{},{},{},{},{}",
                num(x1),
                num(y1),
                num(x2),
                num(y2),
                num(x),
                num(y)
            ),
        };
    }
    d
}

fn text(t: &TextShape) -> String {
    let mut s = String::from("<text");
    if let Some(deg) = t.rotate {
        let _ = write!(s, r#" transform="rotate({})""#, num(deg));
    }
    let _ = write!(s, r#" x="{}" y="{}""#, num(t.x), num(t.y));
    if t.dx != 0.0 {
        let _ = write!(s, r#" dx="{}em""#, num(t.dx));
    }
    if t.dy != 0.0 {
        let _ = write!(s, r#" dy="{}em""#, num(t.dy));
    }
    if let Some(a) = t.anchor {
        let _ = write!(s, r#" text-anchor="{}""#, anchor(a));
    }
    if let Some(Baseline::Middle) = t.baseline {
        s.push_str(r#" alignment-baseline="middle""#);
    }
    if let Some(fill) = t.fill {
        let _ = write!(s, r#" fill="{fill}""#);
    }
    if let Some(class) = t.class {
        let _ = write!(s, r#" class="{class}""#);
    }
    let _ = write!(s, ">{}</text>", escape(&t.content));
    s
}

fn group_open(g: &Group) -> String {
    let mut s = String::from("<g");
    if g.translate != (0.0, 0.0) {
        let _ = write!(s, r#" transform="translate({},{})""#, num(g.translate.0), num(g.translate.1));
    }
    if let Some(class) = g.class {
        let _ = write!(s, r#" class="{class}""#);
    }
    let FontSpec { size, family, anchor: a } = g.font;
    if let Some(size) = size {
        let _ = write!(s, r#" font-size="{}""#, num(size));
    }
    if let Some(family) = family {
        let _ = write!(s, r#" font-family="{family}""#);
    }
    if let Some(a) = a {
        let _ = write!(s, r#" text-anchor="{}""#, anchor(a));
    }
    s.push('>');
    s
}

fn anchor(a: TextAnchor) -> &'static str {
    match a {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

/// Coordinates rounded to 3 decimals with trailing zeros removed.
pub fn num(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        _ => s.to_string(),
    }
}

/// Escape text content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
