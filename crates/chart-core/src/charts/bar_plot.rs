// File: crates/chart-core/src/charts/bar_plot.rs
// Summary: Grouped bar plot of mean likes per platform and post type, with legend.

use indexmap::IndexSet;

use crate::axis::{axis_titles, Axis, AxisOrientation};
use crate::charts::{max_value, ChartRenderer};
use crate::data::Record;
use crate::error::ComputationError;
use crate::scale::{BandScale, LinearScale, OrdinalScale};
use crate::scene::{Baseline, Group, RectShape, Scene, Shape, TextShape};
use crate::stats::rollup_mean_nested;
use crate::theme::Theme;
use crate::types::ChartLayout;

const SWATCH: f64 = 15.0;
const LEGEND_ROW: f64 = 20.0;

pub struct BarPlot {
    pub layout: ChartLayout,
    pub outer_padding: f64,
    pub inner_padding: f64,
    pub bar_opacity: f64,
}

impl BarPlot {
    pub fn new(layout: ChartLayout) -> Self {
        Self { layout, outer_padding: 0.2, inner_padding: 0.05, bar_opacity: 0.8 }
    }
}

impl ChartRenderer for BarPlot {
    fn mount(&self) -> &str { "barplot" }

    fn render(&self, records: &[Record], theme: &Theme) -> Result<Scene, ComputationError> {
        let w = self.layout.plot_width();
        let h = self.layout.plot_height();

        let means = rollup_mean_nested(records, |r| r.platform.clone(), |r| r.post_type.clone())?;
        let max_mean = max_value(means.iter().map(|p| p.value), "barplot")?;

        let platforms: IndexSet<&str> = means.iter().map(|p| p.key.0.as_str()).collect();
        let post_types: IndexSet<&str> = means.iter().map(|p| p.key.1.as_str()).collect();

        let x0 = BandScale::new(platforms.iter().copied(), (0.0, w)).with_padding(self.outer_padding);
        let x1 = BandScale::new(post_types.iter().copied(), (0.0, x0.bandwidth())).with_padding(self.inner_padding);
        let y = LinearScale::new((0.0, max_mean), (h, 0.0)).nice();
        let color = OrdinalScale::new(post_types.iter().copied(), theme.palette.clone())?;

        let mut shapes = vec![
            Axis::from_band(AxisOrientation::Bottom, &x0).to_shape((0.0, h), theme),
            Axis::from_linear(AxisOrientation::Left, &y, 10).to_shape((0.0, 0.0), theme),
        ];
        shapes.extend(axis_titles(&self.layout, "Platform", "Average Number of Likes", theme));

        for point in &means {
            let (platform, post_type) = &point.key;
            let (Some(gx), Some(bx)) = (x0.position(platform), x1.position(post_type)) else { continue };
            let top = y.map(point.value);
            let mut bar = RectShape::new(bx, top, x1.bandwidth(), h - top).with_opacity(self.bar_opacity);
            if let Some(c) = color.get(post_type) {
                bar = bar.with_fill(c);
            }
            let mut g = Group::at(gx, 0.0).with_class("bar");
            g.push(bar);
            shapes.push(g.into());
        }

        shapes.push(legend(&color, (w - 200.0, -30.0), theme));

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

/// One swatch + label row per category.
fn legend(color: &OrdinalScale, at: (f64, f64), theme: &Theme) -> Shape {
    let mut g = Group::at(at.0, at.1).with_class("legend");
    for (i, name) in color.domain().enumerate() {
        let row = i as f64 * LEGEND_ROW;
        let mut swatch = RectShape::new(0.0, row, SWATCH, SWATCH);
        if let Some(c) = color.get(name) {
            swatch = swatch.with_fill(c);
        }
        g.push(swatch);
        g.push(
            TextShape::new(20.0, row + 12.0, name)
                .with_baseline(Baseline::Middle)
                .with_fill(theme.axis_label),
        );
    }
    g.into()
}
