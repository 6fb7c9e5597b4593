//! Geometry helpers: axis extents plus terminal size plumbing.

use terminal_size::{Height, Width, terminal_size};

use crate::core::{
    constants::{BORDER_WIDTH, DOTS_PER_CELL_X, LABEL_GUTTER, MIN_GRAPH_HEIGHT, MIN_GRAPH_WIDTH},
    data::Sample,
};

fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (mut low, mut high) = (f64::INFINITY, f64::NEG_INFINITY);
    for v in values {
        low = low.min(v);
        high = high.max(v);
    }
    // No points, or only non-finite ones.
    if !low.is_finite() || !high.is_finite() {
        return (0.0, 1.0);
    }
    // A flat series still needs non-zero span to map onto pixels.
    if (high - low).abs() < f64::EPSILON {
        return (low - 0.5, high + 0.5);
    }
    (low, high)
}

/// Inclusive x extent of the series, without padding.
#[must_use]
pub fn x_extent(samples: &[Sample]) -> (f64, f64) {
    extent(samples.iter().map(|s| s.x))
}

/// Inclusive y extent of the series, without padding.
#[must_use]
pub fn y_extent(samples: &[Sample]) -> (f64, f64) {
    extent(samples.iter().map(|s| s.y))
}

/// Current terminal geometry in character cells (80x30 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (usize, usize) {
    let (Width(w), Height(h)) = terminal_size().unwrap_or((Width(80), Height(30)));
    (usize::from(w), usize::from(h))
}

/// Fit the plot grid into the terminal, leaving room for borders, the label
/// gutter and `label_w` columns of y labels. Width is capped by the
/// terminal (the sample count only shrinks it further) and floored at
/// `MIN_GRAPH_WIDTH`.
#[must_use]
pub fn graph_dims((term_w, term_h): (usize, usize), samples: usize, label_w: usize) -> (usize, usize) {
    let cols_available = term_w.saturating_sub(BORDER_WIDTH + LABEL_GUTTER + label_w + 1);
    let x_chars = std::cmp::min(samples.div_ceil(DOTS_PER_CELL_X), cols_available)
        .max(MIN_GRAPH_WIDTH);
    // Title row, bottom border and the x-label line eat vertical space.
    let y_chars = term_h.saturating_sub(4).max(MIN_GRAPH_HEIGHT);
    (x_chars, y_chars)
}

/// Widest y-axis label for the given range at `decimals` precision.
#[must_use]
pub fn y_label_width(low: f64, high: f64, decimals: usize) -> usize {
    let lo = format!("{low:.decimals$}").len();
    let hi = format!("{high:.decimals$}").len();
    lo.max(hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(x: f64, y: f64) -> Sample {
        Sample { x, y }
    }

    #[test]
    fn extents_cover_the_series() {
        let data = [s(0.0, -2.0), s(1.0, 5.0), s(2.0, 1.0)];
        assert_eq!(x_extent(&data), (0.0, 2.0));
        assert_eq!(y_extent(&data), (-2.0, 5.0));
    }

    #[test]
    fn empty_or_non_finite_series_falls_back() {
        assert_eq!(y_extent(&[]), (0.0, 1.0));
        assert_eq!(y_extent(&[s(0.0, f64::NAN)]), (0.0, 1.0));
    }

    #[test]
    fn flat_series_gets_breathing_room() {
        let data = [s(0.0, 3.0), s(1.0, 3.0)];
        assert_eq!(y_extent(&data), (2.5, 3.5));
    }

    #[test]
    fn label_width_takes_the_wider_bound() {
        assert_eq!(y_label_width(-10.25, 3.0, 1), 5); // "-10.2"
        assert_eq!(y_label_width(0.0, 100.0, 1), 5); // "100.0"
    }
}
