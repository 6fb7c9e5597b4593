//! Downsampling into per-dot-column envelopes.
//!
//! Each braille char column carries two dot columns; every dot column gets
//! one [`Span`], the min/max envelope of the samples that fell into its
//! bucket. Extrema survive downsampling by construction.

use crate::core::{config::Config, constants::DOTS_PER_CELL_X, data::Sample};

/// Data-space y envelope for one dot column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub lo: f64,
    pub hi: f64,
}

/// Drop samples outside the configured x window, if any.
#[must_use]
pub fn clip_to_range(mut samples: Vec<Sample>, cfg: &Config) -> Vec<Sample> {
    if let Some((lo, hi)) = cfg.x_range {
        samples.retain(|s| s.x >= lo && s.x <= hi);
    }
    samples
}

/// Reduce `samples` to at most `x_chars * 2` spans by index bucketing.
///
/// When the series already fits, each sample becomes its own degenerate
/// span; trailing dot columns stay empty.
#[must_use]
pub fn envelope(samples: &[Sample], x_chars: usize) -> Vec<Span> {
    let dots = x_chars * DOTS_PER_CELL_X;
    if samples.is_empty() || dots == 0 {
        return Vec::new();
    }

    if samples.len() <= dots {
        return samples.iter().map(|s| Span { lo: s.y, hi: s.y }).collect();
    }

    let mut spans = Vec::with_capacity(dots);
    for i in 0..dots {
        let start = i * samples.len() / dots;
        let end = ((i + 1) * samples.len() / dots).max(start + 1);
        let bucket = &samples[start..end.min(samples.len())];

        let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
        for s in bucket {
            lo = lo.min(s.y);
            hi = hi.max(s.y);
        }
        if !lo.is_finite() {
            // Bucket held only non-finite values; reuse the neighbour.
            let prev = spans.last().copied().unwrap_or(Span { lo: 0.0, hi: 0.0 });
            spans.push(prev);
        } else {
            spans.push(Span { lo, hi });
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{color::AnsiCode, config::Config};

    fn cfg(x_chars: usize, x_range: Option<(f64, f64)>) -> Config {
        Config {
            title: String::new(),
            subtitle: None,
            y_min: 0.0,
            y_max: 1.0,
            x_chars,
            y_chars: 10,
            color: AnsiCode::amber(),
            x_range,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn series(n: usize) -> Vec<Sample> {
        (0..n).map(|i| Sample { x: i as f64, y: i as f64 }).collect()
    }

    #[test]
    fn short_series_maps_one_sample_per_dot() {
        let spans = envelope(&series(5), 20);
        assert_eq!(spans.len(), 5);
        assert_eq!(spans[3], Span { lo: 3.0, hi: 3.0 });
    }

    #[test]
    fn long_series_keeps_extrema() {
        let mut data = series(1000);
        data[500].y = -9999.0;
        data[501].y = 9999.0;
        let spans = envelope(&data, 10); // 20 dot columns
        assert_eq!(spans.len(), 20);
        // Both spikes land in the same bucket and both survive.
        let lo = spans.iter().map(|s| s.lo).fold(f64::INFINITY, f64::min);
        let hi = spans.iter().map(|s| s.hi).fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(lo, -9999.0);
        assert_eq!(hi, 9999.0);
    }

    #[test]
    fn clip_honours_the_x_window() {
        let clipped = clip_to_range(series(10), &cfg(5, Some((2.0, 4.0))));
        assert_eq!(clipped.len(), 3);
        assert_eq!(clipped[0].x, 2.0);
        assert_eq!(clipped[2].x, 4.0);
    }

    #[test]
    fn clip_without_window_is_identity() {
        assert_eq!(clip_to_range(series(10), &cfg(5, None)).len(), 10);
    }
}
