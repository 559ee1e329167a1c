// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports loader, statistics, scales and chart scene construction.

pub mod axis;
pub mod charts;
pub mod curve;
pub mod data;
pub mod error;
pub mod grid;
pub mod scale;
pub mod scene;
pub mod stats;
pub mod theme;
pub mod types;

pub use axis::{Axis, AxisOrientation};
pub use charts::{render_dashboard, BarPlot, BoxPlot, ChartRenderer, DashboardConfig, LinePlot};
pub use data::{load_path, load_reader, Dataset, LoadOptions, MalformedRows, Record};
pub use error::{ComputationError, LoadError, ScaleError};
pub use scale::{BandScale, LinearScale, OrdinalScale};
pub use scene::{Scene, Shape};
pub use stats::{box_stats, group_by, mean, AggregatePoint, BoxStats};
pub use theme::{Color, Theme};
pub use types::{ChartLayout, Insets};
