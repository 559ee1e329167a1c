// File: crates/chart-core/src/scale.rs
// Summary: Band (categorical), linear (continuous, nice-able) and ordinal (color) scales.

use indexmap::IndexSet;

use crate::error::ScaleError;
use crate::grid;
use crate::theme::Color;

/// Pixel interval `(start, end)`; `end < start` is a reversed range.
pub type Range = (f64, f64);

/// Maps a finite ordered set of categories to equal-width slots.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    domain: IndexSet<String>,
    range: Range,
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
    // derived
    step: f64,
    bandwidth: f64,
    positions: Vec<f64>,
}

impl BandScale {
    /// Duplicates in `domain` are dropped; first occurrence wins.
    pub fn new<I, S>(domain: I, range: Range) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let domain = domain.into_iter().map(Into::into).collect();
        Self::rescaled(domain, range, 0.0, 0.0, 0.5)
    }

    /// Same fraction for inner and outer padding.
    #[must_use]
    pub fn with_padding(self, padding: f64) -> Self {
        let p = padding.clamp(0.0, 1.0);
        Self::rescaled(self.domain, self.range, p, p, self.align)
    }

    #[must_use]
    pub fn with_padding_inner(self, padding: f64) -> Self {
        Self::rescaled(self.domain, self.range, padding.clamp(0.0, 1.0), self.padding_outer, self.align)
    }

    #[must_use]
    pub fn with_padding_outer(self, padding: f64) -> Self {
        Self::rescaled(self.domain, self.range, self.padding_inner, padding.max(0.0), self.align)
    }

    #[must_use]
    pub fn with_align(self, align: f64) -> Self {
        Self::rescaled(self.domain, self.range, self.padding_inner, self.padding_outer, align.clamp(0.0, 1.0))
    }

    fn rescaled(domain: IndexSet<String>, range: Range, padding_inner: f64, padding_outer: f64, align: f64) -> Self {
        let n = domain.len() as f64;
        let reverse = range.1 < range.0;
        let (mut start, stop) = if reverse { (range.1, range.0) } else { range };
        let step = (stop - start) / (n - padding_inner + padding_outer * 2.0).max(1.0);
        start += (stop - start - step * (n - padding_inner)) * align;
        let bandwidth = step * (1.0 - padding_inner);
        let mut positions: Vec<f64> = (0..domain.len()).map(|i| start + step * i as f64).collect();
        if reverse {
            positions.reverse();
        }
        Self { domain, range, padding_inner, padding_outer, align, step, bandwidth, positions }
    }

    /// Left edge of the band for `value`, or `None` outside the domain.
    pub fn position(&self, value: &str) -> Option<f64> {
        self.domain.get_index_of(value).map(|i| self.positions[i])
    }

    pub fn center(&self, value: &str) -> Option<f64> {
        self.position(value).map(|x| x + self.bandwidth * 0.5)
    }

    pub fn bandwidth(&self) -> f64 { self.bandwidth }
    pub fn step(&self) -> f64 { self.step }
    pub fn range(&self) -> Range { self.range }

    pub fn domain(&self) -> impl Iterator<Item = &str> + '_ {
        self.domain.iter().map(String::as_str)
    }
}

/// Continuous mapping from a numeric domain onto a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: Range,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: Range) -> Self {
        Self { domain, range }
    }

    /// Extend the domain outward to round tick boundaries (about ten ticks).
    #[must_use]
    pub fn nice(self) -> Self {
        self.nice_with(10)
    }

    #[must_use]
    pub fn nice_with(self, count: usize) -> Self {
        let (d0, d1) = self.domain;
        if !d0.is_finite() || !d1.is_finite() {
            return self;
        }
        let domain = if d1 < d0 {
            let (lo, hi) = grid::nice_bounds(d1, d0, count);
            (hi, lo)
        } else {
            grid::nice_bounds(d0, d1, count)
        };
        Self { domain, ..self }
    }

    /// Degenerate domains map everything to the middle of the range.
    #[inline]
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        r0 + t * (r1 - r0)
    }

    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        let t = if span == 0.0 { 0.5 } else { (px - r0) / span };
        d0 + t * (d1 - d0)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        grid::ticks(self.domain.0, self.domain.1, count)
    }

    /// Formatter matching the precision of `ticks(count)`.
    pub fn tick_format(&self, count: usize) -> impl Fn(f64) -> String {
        let precision = grid::precision_for_step(grid::tick_step(self.domain.0, self.domain.1, count));
        move |v| grid::format_tick(v, precision)
    }

    pub fn domain(&self) -> (f64, f64) { self.domain }
    pub fn range(&self) -> Range { self.range }
}

/// Categorical color mapping. Domain index `i` takes `palette[i % len]`,
/// so short palettes wrap and long ones are truncated.
#[derive(Clone, Debug, PartialEq)]
pub struct OrdinalScale {
    domain: IndexSet<String>,
    palette: Vec<Color>,
}

impl OrdinalScale {
    pub fn new<I, S>(domain: I, palette: Vec<Color>) -> Result<Self, ScaleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if palette.is_empty() {
            return Err(ScaleError::EmptyPalette);
        }
        Ok(Self { domain: domain.into_iter().map(Into::into).collect(), palette })
    }

    /// `None` for values outside the domain.
    pub fn get(&self, value: &str) -> Option<Color> {
        self.domain
            .get_index_of(value)
            .map(|i| self.palette[i % self.palette.len()])
    }

    pub fn domain(&self) -> impl Iterator<Item = &str> + '_ {
        self.domain.iter().map(String::as_str)
    }
}
