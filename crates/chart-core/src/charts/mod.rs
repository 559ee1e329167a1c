// File: crates/chart-core/src/charts/mod.rs
// Summary: Chart renderer trait, dashboard configuration and the fixed box/bar/line render sequence.

mod bar_plot;
mod box_plot;
mod line_plot;

pub use bar_plot::BarPlot;
pub use box_plot::BoxPlot;
pub use line_plot::LinePlot;

use tracing::debug;

use crate::data::{Dataset, Record};
use crate::error::ComputationError;
use crate::scene::Scene;
use crate::theme::Theme;
use crate::types::{ChartLayout, Insets, HEIGHT, WIDTH};

/// A pure function from records to a drawable scene.
pub trait ChartRenderer {
    /// Mount point the scene is drawn into.
    fn mount(&self) -> &str;
    fn render(&self, records: &[Record], theme: &Theme) -> Result<Scene, ComputationError>;
}

/// Layouts for the three dashboard charts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardConfig {
    pub box_plot: ChartLayout,
    pub bar_plot: ChartLayout,
    pub line_plot: ChartLayout,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            box_plot: ChartLayout::new(WIDTH, HEIGHT, Insets::new(60, 30, 40, 60)),
            // room above the plot for the legend
            bar_plot: ChartLayout::new(WIDTH, HEIGHT, Insets::new(60, 30, 80, 60)),
            // room below for rotated date labels
            line_plot: ChartLayout::new(WIDTH, HEIGHT, Insets::new(60, 30, 40, 120)),
        }
    }
}

impl DashboardConfig {
    pub fn renderers(&self) -> [Box<dyn ChartRenderer>; 3] {
        [
            Box::new(BoxPlot::new(self.box_plot)),
            Box::new(BarPlot::new(self.bar_plot)),
            Box::new(LinePlot::new(self.line_plot)),
        ]
    }
}

/// Render box, bar and line charts, in that order, from one shared dataset.
/// The first failure aborts the sequence.
pub fn render_dashboard(dataset: &Dataset, theme: &Theme, config: &DashboardConfig) -> Result<Vec<Scene>, ComputationError> {
    config
        .renderers()
        .iter()
        .map(|r| -> Result<Scene, ComputationError> {
            let scene = r.render(dataset.records(), theme)?;
            debug!(mount = r.mount(), shapes = scene.iter_shapes().len(), "chart rendered");
            Ok(scene)
        })
        .collect()
}

/// `[0, max]` upper bound of a value set, or an error when there is none.
pub(crate) fn max_value(values: impl Iterator<Item = f64>, chart: &'static str) -> Result<f64, ComputationError> {
    let mut max: Option<f64> = None;
    for v in values {
        if !v.is_finite() {
            return Err(ComputationError::NonFinite(v));
        }
        max = Some(max.map_or(v, |m| m.max(v)));
    }
    max.ok_or(ComputationError::EmptyDataset(chart))
}
