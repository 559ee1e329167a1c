// File: crates/chart-core/tests/charts.rs
// Purpose: Box/bar/line scene geometry, render order, determinism and empty-input errors.

mod common;

use chart_core::scene::{PathCommand, Shape};
use chart_core::{
    render_dashboard, BarPlot, BoxPlot, ChartRenderer, ComputationError, DashboardConfig, Dataset, LinePlot, Theme,
};
use common::{approx, rec, small_dataset};

fn groups_with_class<'a>(scene: &'a chart_core::Scene, class: &str) -> Vec<&'a chart_core::scene::Group> {
    scene
        .iter_shapes()
        .into_iter()
        .filter_map(|s| match s {
            Shape::Group(g) if g.class == Some(class) => Some(g),
            _ => None,
        })
        .collect()
}

fn texts(scene: &chart_core::Scene) -> Vec<String> {
    scene
        .iter_shapes()
        .into_iter()
        .filter_map(|s| match s {
            Shape::Text(t) => Some(t.content.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn box_plot_draws_one_box_per_platform() {
    let ds = small_dataset();
    let cfg = DashboardConfig::default();
    let scene = BoxPlot::new(cfg.box_plot).render(ds.records(), &Theme::light()).expect("render");
    assert_eq!(scene.mount, "boxplot");
    assert_eq!(scene.origin, (60.0, 40.0));

    let boxes = groups_with_class(&scene, "box");
    assert_eq!(boxes.len(), 2);
    for b in &boxes {
        let lines = b.children.iter().filter(|c| matches!(c, Shape::Line(_))).count();
        let rects = b.children.iter().filter(|c| matches!(c, Shape::Rect(_))).count();
        assert_eq!((lines, rects), (2, 1));
    }

    // Platform A: likes 10,30,40,50 -> q1 25, q3 42.5; y domain 0..50 over 300px.
    let Shape::Rect(r) = &boxes[0].children[1] else { panic!("box rect expected") };
    assert!(approx(r.y, 45.0), "{}", r.y);
    assert!(approx(r.height, 105.0), "{}", r.height);
    assert_eq!(r.opacity, Some(0.7));

    let t = texts(&scene);
    assert!(t.contains(&"Platform".to_string()));
    assert!(t.contains(&"Number of Likes".to_string()));
}

#[test]
fn single_value_box_is_flat() {
    let ds = small_dataset();
    let scene = BoxPlot::new(DashboardConfig::default().box_plot).render(ds.records(), &Theme::light()).expect("render");
    let boxes = groups_with_class(&scene, "box");
    let Shape::Rect(r) = &boxes[1].children[1] else { panic!("box rect expected") };
    assert_eq!(r.height, 0.0);
}

#[test]
fn bar_plot_draws_occurring_combinations_only() {
    let ds = small_dataset();
    let scene = BarPlot::new(DashboardConfig::default().bar_plot).render(ds.records(), &Theme::light()).expect("render");
    assert_eq!(scene.mount, "barplot");
    // (A,Image) (A,Video) (B,Image); no (B,Video)
    let bars = groups_with_class(&scene, "bar");
    assert_eq!(bars.len(), 3);
    assert_eq!(bars[0].translate, bars[1].translate);
    assert!(bars[2].translate.0 > bars[0].translate.0);

    let legend = groups_with_class(&scene, "legend");
    assert_eq!(legend.len(), 1);
    assert_eq!(legend[0].children.len(), 4);

    let palette = Theme::light().palette;
    let Shape::Rect(video) = &bars[1].children[0] else { panic!("bar rect expected") };
    assert_eq!(video.fill, Some(palette[1]));
    // mean 30 on a 0..35 axis over 260px
    assert!(approx(video.height, 260.0 * 30.0 / 35.0), "{}", video.height);
}

#[test]
fn line_plot_sorts_dates_and_curves_through_means() {
    let ds = small_dataset();
    let scene = LinePlot::new(DashboardConfig::default().line_plot).render(ds.records(), &Theme::light()).expect("render");
    assert_eq!(scene.mount, "lineplot");

    let labels: Vec<String> = texts(&scene).into_iter().filter(|t| t.starts_with("2024-")).collect();
    assert_eq!(labels, vec!["2024-03-01", "2024-03-02", "2024-03-03"]);

    let paths: Vec<_> = scene
        .shapes
        .iter()
        .filter_map(|s| match s {
            Shape::Path(p) if p.fill.is_none() && p.stroke.map(|s| s.width) == Some(2.5) => Some(p),
            _ => None,
        })
        .collect();
    assert_eq!(paths.len(), 1);
    let cmds = &paths[0].commands;
    assert_eq!(cmds.len(), 3);
    // means 20, 35, 40 on a 0..45 axis over 240px
    let PathCommand::MoveTo(_, y0) = cmds[0] else { panic!("move expected") };
    assert!(approx(y0, 240.0 - 20.0 / 45.0 * 240.0), "{y0}");
    let PathCommand::CubicTo(_, _, _, _, _, y2) = cmds[2] else { panic!("curve expected") };
    assert!(approx(y2, 240.0 - 40.0 / 45.0 * 240.0), "{y2}");
}

#[test]
fn rotated_date_ticks() {
    let ds = small_dataset();
    let scene = LinePlot::new(DashboardConfig::default().line_plot).render(ds.records(), &Theme::light()).expect("render");
    let rotated = scene.count_where(|s| matches!(s, Shape::Text(t) if t.rotate == Some(-25.0)));
    assert_eq!(rotated, 3);
}

#[test]
fn dashboard_renders_in_fixed_order() {
    let ds = small_dataset();
    let scenes = render_dashboard(&ds, &Theme::light(), &DashboardConfig::default()).expect("render");
    let mounts: Vec<&str> = scenes.iter().map(|s| s.mount.as_str()).collect();
    assert_eq!(mounts, vec!["boxplot", "barplot", "lineplot"]);
}

#[test]
fn rendering_is_deterministic() {
    let ds = small_dataset();
    let theme = Theme::dark();
    let cfg = DashboardConfig::default();
    let a = render_dashboard(&ds, &theme, &cfg).expect("first");
    let b = render_dashboard(&ds, &theme, &cfg).expect("second");
    assert_eq!(a, b);
}

#[test]
fn empty_dataset_is_a_computation_error() {
    let ds = Dataset::default();
    let err = render_dashboard(&ds, &Theme::light(), &DashboardConfig::default()).unwrap_err();
    assert_eq!(err, ComputationError::EmptyDataset("boxplot"));
}

#[test]
fn single_record_dataset_renders_every_chart() {
    let ds = Dataset::new(vec![rec("A", "Image", "2024-03-01", 10)]);
    assert_eq!(ds.len(), 1);
    assert_eq!(ds.skipped(), 0);
    let scenes = render_dashboard(&ds, &Theme::light(), &DashboardConfig::default()).expect("renders");
    let mounts: Vec<&str> = scenes.iter().map(|s| s.mount.as_str()).collect();
    assert_eq!(mounts, ["boxplot", "barplot", "lineplot"]);
    assert_eq!(groups_with_class(&scenes[0], "box").len(), 1);
}

#[test]
fn theme_lookup_falls_back_to_light() {
    assert_eq!(chart_core::theme::find("DARK").name, "dark");
    assert_eq!(chart_core::theme::find("no-such-theme").name, "light");
}
