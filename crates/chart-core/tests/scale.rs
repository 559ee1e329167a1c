// File: crates/chart-core/tests/scale.rs
// Purpose: Band, linear and ordinal scale mappings, nice bounds, ticks and tick labels.

mod common;

use chart_core::grid::{format_tick, nice_bounds, ticks};
use chart_core::{BandScale, Color, LinearScale, OrdinalScale, ScaleError};
use common::approx;

#[test]
fn band_without_padding_splits_range_evenly() {
    let x = BandScale::new(["a", "b", "c"], (0.0, 300.0));
    assert_eq!(x.bandwidth(), 100.0);
    assert_eq!(x.position("a"), Some(0.0));
    assert_eq!(x.position("b"), Some(100.0));
    assert_eq!(x.position("c"), Some(200.0));
    assert_eq!(x.center("b"), Some(150.0));
    assert_eq!(x.position("zzz"), None);
}

#[test]
fn band_padding_shrinks_and_centers_bands() {
    let x = BandScale::new(["a", "b", "c"], (0.0, 540.0)).with_padding(0.2);
    assert!(approx(x.step(), 168.75));
    assert!(approx(x.bandwidth(), 135.0));
    assert!(approx(x.position("a").unwrap(), 33.75));
    assert!(approx(x.position("c").unwrap(), 371.25));
}

#[test]
fn band_reversed_range_and_duplicates() {
    let x = BandScale::new(["a", "b", "a", "c"], (300.0, 0.0));
    assert_eq!(x.domain().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert_eq!(x.position("a"), Some(200.0));
    assert_eq!(x.position("c"), Some(0.0));
}

#[test]
fn band_inner_padding_only() {
    let x = BandScale::new(["a", "b"], (0.0, 100.0)).with_padding_inner(0.5);
    // no outer padding: bands hug the range ends
    assert!(approx(x.step(), 100.0 / 1.5));
    assert!(approx(x.bandwidth(), 100.0 / 3.0));
    assert!(approx(x.position("a").unwrap(), 0.0));
    assert!(approx(x.position("b").unwrap() + x.bandwidth(), 100.0));
}

#[test]
fn band_outer_padding_with_alignment() {
    let third = 100.0 / 3.0;
    let x = BandScale::new(["a", "b"], (0.0, 100.0)).with_padding_outer(0.5).with_align(0.0);
    assert!(approx(x.step(), third));
    assert!(approx(x.bandwidth(), third));
    // all the slack goes to the end of the range
    assert!(approx(x.position("a").unwrap(), 0.0));
    assert!(approx(x.position("b").unwrap(), third));

    let x = BandScale::new(["a", "b"], (0.0, 100.0)).with_padding_outer(0.5).with_align(1.0);
    assert!(approx(x.position("a").unwrap(), third));
    assert!(approx(x.position("b").unwrap() + x.bandwidth(), 100.0));

    // default alignment splits the slack evenly
    let x = BandScale::new(["a", "b"], (0.0, 100.0)).with_padding_outer(0.5);
    assert!(approx(x.position("a").unwrap(), third / 2.0));
}

#[test]
fn linear_maps_and_inverts() {
    let y = LinearScale::new((0.0, 100.0), (300.0, 0.0));
    assert_eq!(y.map(0.0), 300.0);
    assert_eq!(y.map(100.0), 0.0);
    assert_eq!(y.map(25.0), 225.0);
    assert_eq!(y.invert(225.0), 25.0);
}

#[test]
fn linear_degenerate_domain_maps_to_midpoint() {
    let y = LinearScale::new((5.0, 5.0), (0.0, 100.0));
    assert_eq!(y.map(5.0), 50.0);
    assert_eq!(y.map(99.0), 50.0);
    assert_eq!(y.nice().domain(), (5.0, 5.0));
}

#[test]
fn nice_rounds_outward() {
    assert_eq!(LinearScale::new((0.0, 487.0), (0.0, 1.0)).nice().domain(), (0.0, 500.0));
    assert_eq!(LinearScale::new((0.0, 50.0), (0.0, 1.0)).nice().domain(), (0.0, 50.0));
    let (lo, hi) = LinearScale::new((0.0, 0.97), (0.0, 1.0)).nice().domain();
    assert!(approx(lo, 0.0) && approx(hi, 1.0));
    let (lo, hi) = nice_bounds(13.0, 87.0, 10);
    assert_eq!((lo, hi), (10.0, 90.0));
}

#[test]
fn ticks_are_round_and_cover_domain() {
    let t = ticks(0.0, 500.0, 10);
    assert_eq!(t.len(), 11);
    assert_eq!(t[0], 0.0);
    assert_eq!(t[1], 50.0);
    assert_eq!(t[10], 500.0);

    let t = ticks(0.0, 1.0, 5);
    let want = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0];
    assert_eq!(t.len(), want.len());
    for (a, b) in t.iter().zip(want) {
        assert!(approx(*a, b), "{a} vs {b}");
    }
    assert_eq!(ticks(3.0, 3.0, 10), vec![3.0]);
    assert!(ticks(0.0, 1.0, 0).is_empty());
}

#[test]
fn tick_labels_use_step_precision_and_grouping() {
    let y = LinearScale::new((0.0, 12_500.0), (0.0, 1.0));
    let fmt = y.tick_format(10);
    assert_eq!(fmt(12_000.0), "12,000");
    assert_eq!(fmt(0.0), "0");

    let y = LinearScale::new((0.0, 1.0), (0.0, 1.0));
    let fmt = y.tick_format(5);
    assert_eq!(fmt(0.4), "0.4");

    assert_eq!(format_tick(1_000_000.0, 0), "1,000,000");
    assert_eq!(format_tick(-1234.5, 1), "-1,234.5");
    assert_eq!(format_tick(999.0, 0), "999");
}

#[test]
fn ordinal_wraps_short_palette_and_truncates_long_one() {
    let p = vec![Color::from_hex(0x1f77b4), Color::from_hex(0xff7f0e), Color::from_hex(0x2ca02c)];
    let c = OrdinalScale::new(["a", "b", "c", "d"], p.clone()).expect("scale");
    assert_eq!(c.get("a"), Some(p[0]));
    assert_eq!(c.get("c"), Some(p[2]));
    assert_eq!(c.get("d"), Some(p[0]));
    assert_eq!(c.get("nope"), None);

    let c = OrdinalScale::new(["x", "y"], p.clone()).expect("scale");
    assert_eq!(c.get("y"), Some(p[1]));
}

#[test]
fn ordinal_needs_a_palette() {
    assert_eq!(OrdinalScale::new(["a"], Vec::new()).unwrap_err(), ScaleError::EmptyPalette);
}

#[test]
fn color_css_forms() {
    assert_eq!(Color::from_hex(0x69b3a2).to_string(), "#69b3a2");
    assert_eq!(Color::from_argb(0, 255, 0, 0).to_string(), "rgba(255,0,0,0.000)");
}
