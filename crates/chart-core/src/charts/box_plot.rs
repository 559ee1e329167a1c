// File: crates/chart-core/src/charts/box_plot.rs
// Summary: Side-by-side box plot of likes per platform.

use crate::axis::{axis_titles, Axis, AxisOrientation};
use crate::charts::{max_value, ChartRenderer};
use crate::data::Record;
use crate::error::ComputationError;
use crate::scale::{BandScale, LinearScale};
use crate::scene::{Group, LineShape, RectShape, Scene, Stroke};
use crate::stats::rollup_box_stats;
use crate::theme::Theme;
use crate::types::ChartLayout;

pub struct BoxPlot {
    pub layout: ChartLayout,
    pub padding: f64,
    pub box_opacity: f64,
}

impl BoxPlot {
    pub fn new(layout: ChartLayout) -> Self {
        Self { layout, padding: 0.3, box_opacity: 0.7 }
    }
}

impl ChartRenderer for BoxPlot {
    fn mount(&self) -> &str { "boxplot" }

    fn render(&self, records: &[Record], theme: &Theme) -> Result<Scene, ComputationError> {
        let w = self.layout.plot_width();
        let h = self.layout.plot_height();

        let max_likes = max_value(records.iter().map(|r| r.likes as f64), "boxplot")?;
        let stats = rollup_box_stats(records, |r| r.platform.clone())?;

        let x = BandScale::new(stats.keys().cloned(), (0.0, w)).with_padding(self.padding);
        let y = LinearScale::new((0.0, max_likes), (h, 0.0)).nice();

        let mut shapes = vec![
            Axis::from_band(AxisOrientation::Bottom, &x).to_shape((0.0, h), theme),
            Axis::from_linear(AxisOrientation::Left, &y, 10).to_shape((0.0, 0.0), theme),
        ];
        shapes.extend(axis_titles(&self.layout, "Platform", "Number of Likes", theme));

        let bw = x.bandwidth();
        let outline = Stroke::new(theme.box_stroke, 1.0);
        for (platform, q) in &stats {
            let Some(left) = x.position(platform) else { continue };
            let mid = left + bw / 2.0;
            let mut g = Group::default().with_class("box");
            // whisker, min to max
            g.push(LineShape { x1: mid, y1: y.map(q.min), x2: mid, y2: y.map(q.max), stroke: outline });
            g.push(
                RectShape::new(left, y.map(q.q3), bw, y.map(q.q1) - y.map(q.q3))
                    .with_stroke(outline)
                    .with_fill(theme.box_fill)
                    .with_opacity(self.box_opacity),
            );
            g.push(LineShape {
                x1: left,
                y1: y.map(q.median),
                x2: left + bw,
                y2: y.map(q.median),
                stroke: Stroke::new(theme.box_stroke, 2.0),
            });
            shapes.push(g.into());
        }

        Ok(Scene {
            mount: self.mount().to_string(),
            width: self.layout.width,
            height: self.layout.height,
            origin: self.layout.origin(),
            background: Some(theme.background),
            shapes,
        })
    }
}
