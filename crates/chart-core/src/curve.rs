// File: crates/chart-core/src/curve.rs
// Summary: Natural cubic spline through points, emitted as Bezier path commands.

use crate::scene::PathCommand;

/// Path through `points` using a natural cubic spline (zero second
/// derivative at both ends). Two points give a straight segment; fewer give
/// only a move.
pub fn natural_curve(points: &[(f64, f64)]) -> Vec<PathCommand> {
    let Some(&(x0, y0)) = points.first() else { return Vec::new() };
    let mut out = vec![PathCommand::MoveTo(x0, y0)];
    match points.len() {
        1 => {}
        2 => out.push(PathCommand::LineTo(points[1].0, points[1].1)),
        _ => {
            let xs: Vec<f64> = points.iter().map(|p| p.0).collect();
            let ys: Vec<f64> = points.iter().map(|p| p.1).collect();
            let (ax, bx) = control_points(&xs);
            let (ay, by) = control_points(&ys);
            for i in 0..points.len() - 1 {
                out.push(PathCommand::CubicTo(ax[i], ay[i], bx[i], by[i], xs[i + 1], ys[i + 1]));
            }
        }
    }
    out
}

/// Solves the tridiagonal system for the first and second control points
/// of each segment (Thomas algorithm). Needs at least three values.
fn control_points(x: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = x.len() - 1;
    let mut a = vec![0.0; n];
    let mut b = vec![0.0; n];
    let mut r = vec![0.0; n];

    a[0] = 0.0;
    b[0] = 2.0;
    r[0] = x[0] + 2.0 * x[1];
    for i in 1..n - 1 {
        a[i] = 1.0;
        b[i] = 4.0;
        r[i] = 4.0 * x[i] + 2.0 * x[i + 1];
    }
    a[n - 1] = 2.0;
    b[n - 1] = 7.0;
    r[n - 1] = 8.0 * x[n - 1] + x[n];

    for i in 1..n {
        let m = a[i] / b[i - 1];
        b[i] -= m;
        r[i] -= m * r[i - 1];
    }
    a[n - 1] = r[n - 1] / b[n - 1];
    for i in (0..n - 1).rev() {
        a[i] = (r[i] - a[i + 1]) / b[i];
    }
    b[n - 1] = (x[n] + a[n - 1]) / 2.0;
    for i in 0..n - 1 {
        b[i] = 2.0 * x[i + 1] - a[i + 1];
    }
    (a, b)
}
