// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers: human-friendly increments, tick lists and label formatting.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Tick index range and increment. A negative `inc` means the step is
/// `1 / -inc` (used for sub-unit steps to avoid float drift).
#[derive(Clone, Copy, Debug, PartialEq)]
struct TickSpec {
    i1: f64,
    i2: f64,
    inc: f64,
}

fn tick_spec(start: f64, stop: f64, count: f64) -> Option<TickSpec> {
    let step = (stop - start) / count.max(0.0);
    if !step.is_finite() || step <= 0.0 {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 { 10.0 } else if error >= E5 { 5.0 } else if error >= E2 { 2.0 } else { 1.0 };
    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        i1 = (start * inv).round();
        i2 = (stop * inv).round();
        if i1 / inv < start { i1 += 1.0; }
        if i2 / inv > stop { i2 -= 1.0; }
        inc = -inv;
    } else {
        let s = 10f64.powf(power) * factor;
        i1 = (start / s).round();
        i2 = (stop / s).round();
        if i1 * s < start { i1 += 1.0; }
        if i2 * s > stop { i2 -= 1.0; }
        inc = s;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    Some(TickSpec { i1, i2, inc })
}

/// Signed tick increment for `[start, stop]` at roughly `count` ticks:
/// positive values are the step itself, negative values are `-1 / step`.
/// Zero when the interval is empty or degenerate.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    tick_spec(start, stop, count as f64).map_or(0.0, |s| s.inc)
}

/// Absolute tick step for `[start, stop]` at roughly `count` ticks.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let inc = tick_increment(lo, hi, count);
    if inc < 0.0 { -1.0 / inc } else { inc }
}

/// Evenly spaced, human-friendly values covering `[start, stop]`.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let Some(spec) = tick_spec(lo, hi, count as f64) else { return Vec::new() };
    if spec.i2 < spec.i1 {
        return Vec::new();
    }
    let n = (spec.i2 - spec.i1) as usize + 1;
    let mut out: Vec<f64> = (0..n)
        .map(|i| {
            let k = spec.i1 + i as f64;
            if spec.inc < 0.0 { k / -spec.inc } else { k * spec.inc }
        })
        .collect();
    if reverse {
        out.reverse();
    }
    out
}

/// Round `[start, stop]` outward to tick increments. Iterates until the
/// increment stabilises; leaves degenerate intervals untouched.
pub fn nice_bounds(mut start: f64, mut stop: f64, count: usize) -> (f64, f64) {
    let mut prestep = None;
    for _ in 0..10 {
        let step = tick_increment(start, stop, count);
        if prestep == Some(step) {
            break;
        } else if step > 0.0 {
            start = (start / step).floor() * step;
            stop = (stop / step).ceil() * step;
        } else if step < 0.0 {
            start = (start * step).ceil() / step;
            stop = (stop * step).floor() / step;
        } else {
            break;
        }
        prestep = Some(step);
    }
    (start, stop)
}

/// Decimal places needed to distinguish ticks spaced `step` apart.
pub fn precision_for_step(step: f64) -> usize {
    let step = step.abs();
    if step == 0.0 || !step.is_finite() {
        return 0;
    }
    (-step.log10().floor()).max(0.0) as usize
}

/// Fixed-point with thousands separators, e.g. `12,500` or `0.25`.
pub fn format_tick(value: f64, precision: usize) -> String {
    let raw = format!("{:.*}", precision, value.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let negative = value < 0.0 && raw.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}
