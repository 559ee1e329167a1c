// File: crates/chart-core/tests/curve.rs
// Purpose: Natural cubic curve control points and degenerate inputs.

mod common;

use chart_core::curve::natural_curve;
use chart_core::scene::PathCommand;
use common::approx;

#[test]
fn short_inputs() {
    assert!(natural_curve(&[]).is_empty());
    assert_eq!(natural_curve(&[(1.0, 2.0)]), vec![PathCommand::MoveTo(1.0, 2.0)]);
    assert_eq!(
        natural_curve(&[(0.0, 0.0), (4.0, 2.0)]),
        vec![PathCommand::MoveTo(0.0, 0.0), PathCommand::LineTo(4.0, 2.0)]
    );
}

#[test]
fn collinear_points_stay_straight() {
    let cmds = natural_curve(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
    assert_eq!(cmds.len(), 3);
    let PathCommand::CubicTo(x1, y1, x2, y2, x, y) = cmds[1] else { panic!("curve expected") };
    assert!(approx(x1, 1.0 / 3.0) && approx(y1, 1.0 / 3.0));
    assert!(approx(x2, 2.0 / 3.0) && approx(y2, 2.0 / 3.0));
    assert_eq!((x, y), (1.0, 1.0));
    let PathCommand::CubicTo(.., x, y) = cmds[2] else { panic!("curve expected") };
    assert_eq!((x, y), (2.0, 2.0));
}

#[test]
fn curve_passes_through_every_point() {
    let pts = [(0.0, 5.0), (10.0, 1.0), (20.0, 8.0), (30.0, 3.0), (40.0, 4.0)];
    let cmds = natural_curve(&pts);
    assert_eq!(cmds[0], PathCommand::MoveTo(0.0, 5.0));
    for (cmd, want) in cmds[1..].iter().zip(&pts[1..]) {
        let PathCommand::CubicTo(.., x, y) = *cmd else { panic!("curve expected") };
        assert_eq!((x, y), *want);
    }
}
