//! Linear and quantize scales.

use crate::format::format_grouped_fixed;
use crate::ticks::{nice, tick_step, ticks};

/// ColorBrewer sequential Blues, 9 classes (lightest to darkest).
pub const SCHEME_BLUES_9: [&str; 9] = [
    "#f7fbff", "#deebf7", "#c6dbef", "#9ecae1", "#6baed6", "#4292c6", "#2171b5", "#08519c", "#08306b",
];

/// Fill for counties with no data or a NaN value.
pub const NO_DATA_COLOR: &str = "#ccc";

/// A continuous linear mapping from a numeric domain to a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Extend the domain to round tick values.
    pub fn nice(self, count: usize) -> Self {
        Self {
            domain: nice(self.domain.0, self.domain.1, count),
            ..self
        }
    }

    /// Map a domain value to the range. A zero-width domain maps everything
    /// to the middle of the range.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = if d1 == d0 { 0.5 } else { (value - d0) / (d1 - d0) };
        r0 + t * (r1 - r0)
    }

    /// Map a range value back to the domain.
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = if r1 == r0 { 0.5 } else { (px - r0) / (r1 - r0) };
        d0 + t * (d1 - d0)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }

    /// Ticks paired with their pixel position and a `,f` label whose
    /// precision follows the tick step.
    pub fn axis_ticks(&self, count: usize) -> Vec<(f64, String)> {
        let step = tick_step(self.domain.0, self.domain.1, count);
        let decimals = precision_fixed(step);
        self.ticks(count)
            .into_iter()
            .map(|t| (self.scale(t), format_grouped_fixed(t, decimals)))
            .collect()
    }
}

/// Digits after the decimal point needed to distinguish values `step` apart.
pub fn precision_fixed(step: f64) -> usize {
    let step = step.abs();
    if !step.is_finite() || step == 0.0 {
        return 0;
    }
    let exponent = step.log10().floor() as i32;
    (-exponent).max(0) as usize
}

/// Maps a continuous domain onto a fixed list of colors in equal-width classes.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantizeScale {
    domain: (f64, f64),
    colors: Vec<&'static str>,
    thresholds: Vec<f64>,
}

impl QuantizeScale {
    pub fn new(domain: (f64, f64), colors: &[&'static str]) -> Self {
        let (x0, x1) = domain;
        let n = colors.len().saturating_sub(1);
        let thresholds = (0..n)
            .map(|i| ((i as f64 + 1.0) * x1 - (i as f64 - n as f64) * x0) / (n as f64 + 1.0))
            .collect();
        Self {
            domain,
            colors: colors.to_vec(),
            thresholds,
        }
    }

    /// The Blues-9 scale over `extent`, or `None` when there is no extent.
    pub fn blues(extent: Option<(f64, f64)>) -> Option<Self> {
        extent.map(|d| Self::new(d, &SCHEME_BLUES_9))
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn colors(&self) -> &[&'static str] {
        &self.colors
    }

    /// Color for `value`. Values outside the domain clamp to the end classes.
    pub fn color(&self, value: f64) -> Option<&'static str> {
        if value.is_nan() {
            return None;
        }
        let i = self.thresholds.partition_point(|&t| t <= value);
        self.colors.get(i).copied()
    }

    /// Like [`color`](Self::color) but falls back to [`NO_DATA_COLOR`].
    pub fn fill(&self, value: f64) -> &'static str {
        self.color(value).unwrap_or(NO_DATA_COLOR)
    }

    /// The domain interval covered by color class `index`.
    pub fn invert_extent(&self, index: usize) -> Option<(f64, f64)> {
        if index >= self.colors.len() {
            return None;
        }
        let lo = if index == 0 { self.domain.0 } else { self.thresholds[index - 1] };
        let hi = self.thresholds.get(index).copied().unwrap_or(self.domain.1);
        Some((lo, hi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_maps_endpoints() {
        let s = LinearScale::new((0.0, 10.0), (0.0, 500.0));
        assert_eq!(s.scale(0.0), 0.0);
        assert_eq!(s.scale(5.0), 250.0);
        assert_eq!(s.scale(10.0), 500.0);
        assert_eq!(s.invert(250.0), 5.0);
    }

    #[test]
    fn linear_inverted_range_for_y_axes() {
        let s = LinearScale::new((0.0, 100.0), (320.0, 0.0));
        assert_eq!(s.scale(0.0), 320.0);
        assert_eq!(s.scale(100.0), 0.0);
    }

    #[test]
    fn linear_zero_width_domain_maps_to_middle() {
        let s = LinearScale::new((3.0, 3.0), (0.0, 100.0));
        assert_eq!(s.scale(3.0), 50.0);
    }

    #[test]
    fn nice_rounds_domain() {
        let s = LinearScale::new((10.4, 30.7), (0.0, 1.0)).nice(10);
        assert_eq!(s.domain(), (10.0, 32.0));
    }

    #[test]
    fn axis_ticks_are_labelled() {
        let s = LinearScale::new((0.0, 60000.0), (0.0, 600.0));
        let ticks = s.axis_ticks(5);
        assert_eq!(ticks.first(), Some(&(0.0, "0".to_string())));
        assert_eq!(ticks.last(), Some(&(600.0, "60,000".to_string())));

        let fractional = LinearScale::new((0.0, 1.0), (0.0, 100.0)).axis_ticks(5);
        assert_eq!(fractional[1].1, "0.2");
    }

    #[test]
    fn precision_from_step() {
        assert_eq!(precision_fixed(2.0), 0);
        assert_eq!(precision_fixed(0.5), 1);
        assert_eq!(precision_fixed(0.05), 2);
        assert_eq!(precision_fixed(10000.0), 0);
    }

    #[test]
    fn quantize_assigns_equal_width_classes() {
        let q = QuantizeScale::new((0.0, 9.0), &SCHEME_BLUES_9);
        assert_eq!(q.color(0.0), Some("#f7fbff"));
        assert_eq!(q.color(0.99), Some("#f7fbff"));
        assert_eq!(q.color(1.0), Some("#deebf7"));
        assert_eq!(q.color(8.5), Some("#08306b"));
        assert_eq!(q.color(9.0), Some("#08306b"));
        assert_eq!(q.color(-5.0), Some("#f7fbff"));
        assert_eq!(q.color(50.0), Some("#08306b"));
    }

    #[test]
    fn quantize_nan_is_gray() {
        let q = QuantizeScale::new((0.0, 9.0), &SCHEME_BLUES_9);
        assert_eq!(q.color(f64::NAN), None);
        assert_eq!(q.fill(f64::NAN), NO_DATA_COLOR);
    }

    #[test]
    fn quantize_invert_extent() {
        let q = QuantizeScale::new((0.0, 9.0), &SCHEME_BLUES_9);
        assert_eq!(q.invert_extent(0), Some((0.0, 1.0)));
        assert_eq!(q.invert_extent(4), Some((4.0, 5.0)));
        assert_eq!(q.invert_extent(8), Some((8.0, 9.0)));
        assert_eq!(q.invert_extent(9), None);
    }

    #[test]
    fn blues_without_extent_is_none() {
        assert!(QuantizeScale::blues(None).is_none());
    }
}
