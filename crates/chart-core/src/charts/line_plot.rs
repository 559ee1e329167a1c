// File: crates/chart-core/src/charts/line_plot.rs
// Summary: Time-series line plot of mean likes per date, drawn as a natural cubic curve.

use crate::axis::{axis_titles, Axis, AxisOrientation, LabelRotation};
use crate::charts::{max_value, ChartRenderer};
use crate::curve::natural_curve;
use crate::data::Record;
use crate::error::ComputationError;
use crate::scale::{BandScale, LinearScale};
use crate::scene::{PathShape, Scene, Stroke};
use crate::stats::{group_by, mean};
use crate::theme::Theme;
use crate::types::ChartLayout;

pub struct LinePlot {
    pub layout: ChartLayout,
    pub padding: f64,
    /// Headroom multiplier on the largest mean.
    pub headroom: f64,
    pub stroke_width: f64,
}

impl LinePlot {
    pub fn new(layout: ChartLayout) -> Self {
        Self { layout, padding: 0.1, headroom: 1.1, stroke_width: 2.5 }
    }
}

impl ChartRenderer for LinePlot {
    fn mount(&self) -> &str { "lineplot" }

    fn render(&self, records: &[Record], theme: &Theme) -> Result<Scene, ComputationError> {
        let w = self.layout.plot_width();
        let h = self.layout.plot_height();

        // Grouped by calendar date; the first label seen names the group.
        let mut series = group_by(records, |r| r.date)
            .into_iter()
            .map(|(date, rows)| {
                let likes: Vec<f64> = rows.iter().map(|r| r.likes as f64).collect();
                Ok((date, rows[0].date_label.clone(), mean(&likes)?))
            })
            .collect::<Result<Vec<_>, ComputationError>>()?;
        series.sort_by_key(|(date, _, _)| *date);

        let max_mean = max_value(series.iter().map(|(_, _, v)| *v), "lineplot")?;

        let x = BandScale::new(series.iter().map(|(_, label, _)| label.clone()), (0.0, w)).with_padding(self.padding);
        let y = LinearScale::new((0.0, max_mean * self.headroom), (h, 0.0)).nice();

        let rotation = LabelRotation { degrees: -25.0, dx_em: -0.8, dy_em: 0.15 };
        let mut shapes = vec![
            Axis::from_band(AxisOrientation::Bottom, &x).with_rotation(rotation).to_shape((0.0, h), theme),
            Axis::from_linear(AxisOrientation::Left, &y, 10).to_shape((0.0, 0.0), theme),
        ];
        shapes.extend(axis_titles(&self.layout, "Date", "Average Number of Likes", theme));

        let points: Vec<(f64, f64)> = series
            .iter()
            .filter_map(|(_, label, v)| x.center(label).map(|cx| (cx, y.map(*v))))
            .collect();
        shapes.push(
            PathShape {
                commands: natural_curve(&points),
                fill: None,
                stroke: Some(Stroke::new(theme.line_stroke, self.stroke_width)),
            }
            .into(),
        );

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
