//! Span rasterization onto a braille character grid.
//!
//! The plot area is a grid of `x_chars` by `y_chars` cells; each cell is a
//! braille glyph (U+2800 block) addressing 2x4 dots. A [`Span`] paints the
//! contiguous vertical dot run between its mapped `lo` and `hi` pixels in
//! its dot column.

use crate::{
    core::{config::Config, constants::DOTS_PER_CELL_Y, error::PlotError},
    render::sampler::Span,
};

// Offsets into the braille pattern for (dot column, dot row). The lower two
// dots live in the supplementary bits 6 and 7.
const DOT_BITS: [[u32; 4]; 2] = [
    [0x01, 0x02, 0x04, 0x40],
    [0x08, 0x10, 0x20, 0x80],
];

/// Rasterized plot area, row-major.
#[derive(Debug)]
pub struct BrailleGrid {
    pub x_chars: usize,
    pub y_chars: usize,
    cells: Vec<char>,
}

impl BrailleGrid {
    /// One rendered row as a string of braille glyphs.
    #[must_use]
    pub fn row(&self, r: usize) -> String {
        self.cells[r * self.x_chars..(r + 1) * self.x_chars]
            .iter()
            .collect()
    }
}

/// Map spans into pixel rows and fill the glyph grid.
///
/// Spans beyond `x_chars * 2` are ignored; missing trailing spans leave
/// blank columns. Fails on an empty data set or a zero-dimension grid.
pub fn rasterize(spans: &[Span], cfg: &Config) -> Result<BrailleGrid, PlotError> {
    if spans.is_empty() {
        return Err(crate::core::error::DataError::Empty.into());
    }
    // A zero-dimension grid has no pixel space to map into.
    if cfg.x_chars == 0 || cfg.y_chars == 0 {
        return Err(PlotError::GraphTooSmall {
            want_w: crate::core::constants::MIN_GRAPH_WIDTH,
            want_h: crate::core::constants::MIN_GRAPH_HEIGHT,
            got_w: cfg.x_chars,
            got_h: cfg.y_chars,
        });
    }

    let vert_px = cfg.y_chars * DOTS_PER_CELL_Y;
    let y_span = cfg.y_max - cfg.y_min; // > 0 by Config::build

    // Data y to pixel row, row 0 at the top.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let map = |y: f64| -> usize {
        let unit = ((y - cfg.y_min) / y_span).clamp(0.0, 1.0);
        (vert_px - 1) - (unit * (vert_px - 1) as f64).round() as usize
    };

    let mut cells = vec!['\u{2800}'; cfg.x_chars * cfg.y_chars];

    for (dot_col, span) in spans.iter().enumerate().take(cfg.x_chars * 2) {
        let col = dot_col / 2;
        let bits = &DOT_BITS[dot_col % 2];

        // hi maps to the smaller (upper) pixel row.
        let top = map(span.hi);
        let bottom = map(span.lo);

        for px in top..=bottom {
            let row = px / DOTS_PER_CELL_Y;
            let cell = &mut cells[row * cfg.x_chars + col];
            let mask = (*cell as u32) | bits[px % DOTS_PER_CELL_Y];
            // Masks stay within U+2800..=U+28FF.
            *cell = char::from_u32(mask).unwrap_or('\u{2800}');
        }
    }

    Ok(BrailleGrid {
        x_chars: cfg.x_chars,
        y_chars: cfg.y_chars,
        cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::AnsiCode;

    fn cfg(x_chars: usize, y_chars: usize) -> Config {
        Config {
            title: String::new(),
            subtitle: None,
            y_min: 0.0,
            y_max: 1.0,
            x_chars,
            y_chars,
            color: AnsiCode::amber(),
            x_range: None,
        }
    }

    #[test]
    fn empty_spans_error() {
        assert!(rasterize(&[], &cfg(4, 2)).is_err());
    }

    #[test]
    fn zero_dimension_grids_are_rejected() {
        let spans = [Span { lo: 0.0, hi: 1.0 }];
        let err = rasterize(&spans, &cfg(20, 0)).unwrap_err();
        assert!(matches!(err, PlotError::GraphTooSmall { got_h: 0, .. }));
        let err = rasterize(&spans, &cfg(0, 10)).unwrap_err();
        assert!(matches!(err, PlotError::GraphTooSmall { got_w: 0, .. }));
    }

    #[test]
    fn single_dot_at_the_top_left() {
        // One span pinned to y_max paints exactly dot (0,0): U+2801.
        let grid = rasterize(&[Span { lo: 1.0, hi: 1.0 }], &cfg(2, 1)).unwrap();
        assert_eq!(grid.row(0), "\u{2801}\u{2800}");
    }

    #[test]
    fn full_span_fills_a_half_column() {
        // Whole y range in dot column 0 of a one-cell grid: bits
        // 0x01|0x02|0x04|0x40 = U+2847.
        let grid = rasterize(&[Span { lo: 0.0, hi: 1.0 }], &cfg(1, 1)).unwrap();
        assert_eq!(grid.row(0), "\u{2847}");
    }

    #[test]
    fn second_dot_column_uses_right_bits() {
        let spans = [Span { lo: 1.0, hi: 1.0 }, Span { lo: 1.0, hi: 1.0 }];
        let grid = rasterize(&spans, &cfg(1, 1)).unwrap();
        // Dots (0,0) and (1,0): 0x01 | 0x08.
        assert_eq!(grid.row(0), "\u{2809}");
    }

    #[test]
    fn spans_past_the_grid_are_ignored() {
        let spans = vec![Span { lo: 0.5, hi: 0.5 }; 100];
        let grid = rasterize(&spans, &cfg(2, 2)).unwrap();
        assert_eq!(grid.x_chars, 2);
    }
}
