//! Frame assembly: borders, title, axis labels around a braille grid.

use std::io::Write;

use crate::{
    core::{
        color::{AnsiCode, colorize},
        config::Config,
        constants::{DECIMAL_PRECISION, LABEL_GUTTER, MIN_GRAPH_HEIGHT, MIN_GRAPH_WIDTH},
        error::PlotError,
    },
    render::braille::BrailleGrid,
};

// Box-drawing glyphs.
const TL: char = '\u{250c}';
const TR: char = '\u{2510}';
const BL: char = '\u{2514}';
const BR: char = '\u{2518}';
const H: &str = "\u{2500}";
const V: char = '\u{2502}';

/// Two leading spaces plus one trailing space around an inlined caption.
const CAPTION_PADDING: usize = 3;

/// A horizontal rule of `width` chars with `text` centered inside, or a
/// plain rule when the text is empty or does not fit.
fn centered_rule(text: &str, width: usize, color: Option<&AnsiCode>) -> String {
    let len = text.chars().count();
    let inner = width.saturating_sub(CAPTION_PADDING);
    if len == 0 || len > inner {
        return H.repeat(width);
    }
    let pad_left = (inner - len) / 2;
    let pad_right = inner - len - pad_left;

    let caption = match color {
        Some(c) => colorize(c, text),
        None => text.to_owned(),
    };
    format!("{}  {caption} {}", H.repeat(pad_left), H.repeat(pad_right))
}

/// Write the full framed plot to `out`.
///
/// Layout, top to bottom: titled top border, one line per grid row with the
/// y extrema labelled on the first and last, bottom border carrying the
/// subtitle, x extrema underneath the plot corners.
pub fn render<W: Write>(out: &mut W, cfg: &Config, grid: &BrailleGrid) -> Result<(), PlotError> {
    if cfg.x_chars < MIN_GRAPH_WIDTH || cfg.y_chars < MIN_GRAPH_HEIGHT {
        return Err(PlotError::GraphTooSmall {
            want_w: MIN_GRAPH_WIDTH,
            want_h: MIN_GRAPH_HEIGHT,
            got_w: cfg.x_chars,
            got_h: cfg.y_chars,
        });
    }

    let prec = DECIMAL_PRECISION;
    let label_w = crate::core::bounds::y_label_width(cfg.y_min, cfg.y_max, prec);
    let pad = " ".repeat(label_w + LABEL_GUTTER);

    writeln!(
        out,
        "{pad}{TL}{}{TR}",
        centered_rule(&cfg.title, cfg.x_chars, Some(&cfg.color))
    )?;

    for r in 0..grid.y_chars {
        let label = if r == 0 {
            format!("{:>label_w$.prec$}", cfg.y_max)
        } else if r == grid.y_chars - 1 {
            format!("{:>label_w$.prec$}", cfg.y_min)
        } else {
            " ".repeat(label_w)
        };
        let gutter = " ".repeat(LABEL_GUTTER);
        writeln!(out, "{label}{gutter}{V}{}{V}", colorize(&cfg.color, &grid.row(r)))?;
    }

    writeln!(
        out,
        "{pad}{BL}{}{BR}",
        centered_rule(cfg.subtitle.as_deref().unwrap_or(""), cfg.x_chars, None)
    )?;

    if let Some((x_lo, x_hi)) = cfg.x_range {
        let left = format!("{x_lo:.prec$}");
        let right = format!("{x_hi:.prec$}");
        let inner = cfg.x_chars + 2;
        if left.len() + right.len() + 1 <= inner {
            let fill = " ".repeat(inner - left.len() - right.len());
            writeln!(out, "{pad}{left}{fill}{right}")?;
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{color::AnsiCode, config::Config},
        render::{braille::rasterize, sampler::Span},
    };

    fn cfg() -> Config {
        Config {
            title: "Demo".into(),
            subtitle: Some("sub".into()),
            y_min: 0.0,
            y_max: 10.0,
            x_chars: 20,
            y_chars: 8,
            color: AnsiCode::amber(),
            x_range: Some((0.0, 5.0)),
        }
    }

    fn rendered(cfg: &Config) -> String {
        let spans: Vec<Span> = (0..40)
            .map(|i| {
                let y = f64::from(i) / 4.0;
                Span { lo: y, hi: y }
            })
            .collect();
        let grid = rasterize(&spans, cfg).unwrap();
        let mut buf = Vec::new();
        render(&mut buf, cfg, &grid).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn frame_carries_title_labels_and_borders() {
        let out = rendered(&cfg());
        assert!(out.contains("Demo"));
        assert!(out.contains("sub"));
        assert!(out.contains(TL));
        assert!(out.contains(BR));
        assert!(out.contains("10.0"));
        assert!(out.contains("0.0"));
        // One line per grid row plus chrome (top, bottom, x labels).
        assert_eq!(out.lines().count(), 8 + 3);
    }

    #[test]
    fn tiny_grids_are_rejected() {
        let mut small = cfg();
        small.x_chars = 3;
        let spans = [Span { lo: 1.0, hi: 1.0 }];
        let grid = rasterize(&spans, &small).unwrap();
        let err = render(&mut Vec::new(), &small, &grid).unwrap_err();
        assert!(matches!(err, PlotError::GraphTooSmall { .. }));
    }

    #[test]
    fn oversized_captions_degrade_to_plain_rules() {
        let rule = centered_rule("a very very long caption", 10, None);
        assert_eq!(rule.chars().count(), 10);
        assert!(!rule.contains("caption"));
    }
}
