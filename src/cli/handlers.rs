//! One handler per subcommand.

use std::io::{Write, stdout};

use log::debug;

use crate::{
    core::{
        bounds::{graph_dims, terminal_geometry, x_extent, y_extent, y_label_width},
        color::{AnsiCode, colorize, resolve_color},
        config::Config,
        constants::DECIMAL_PRECISION,
        data::read_csv_path,
        error::PlotError,
    },
    render::{clip_to_range, envelope, rasterize, render},
};

use super::parse::CsvArgs;

pub fn csv(a: &CsvArgs) -> Result<(), PlotError> {
    let mut data = read_csv_path(&a.file)?;
    debug!("loaded {} rows from {}", data.len(), a.file);
    if a.sort {
        data.sort_by(|l, r| l.x.total_cmp(&r.x));
    }

    let (y_lo, y_hi) = y_extent(&data);
    let y_min = a.y_min.unwrap_or(y_lo);
    let y_max = a.y_max.unwrap_or(y_hi);

    let label_w = y_label_width(y_min, y_max, DECIMAL_PRECISION);
    let (x_chars, y_chars) = graph_dims(terminal_geometry(), data.len(), label_w);
    debug!("plot grid {x_chars}x{y_chars} chars, labels {label_w} wide");

    let mut b = Config::builder(x_chars, y_chars)
        .title(&a.title)
        .subtitle_opt(a.subtitle.as_deref())
        .color(resolve_color(&a.color)?)
        .y_min(y_min)
        .y_max(y_max);

    let (x_lo, x_hi) = match (a.x_min, a.x_max) {
        (Some(lo), Some(hi)) => (lo, hi),
        _ => x_extent(&data),
    };
    b = b.x_range(x_lo, x_hi);
    let cfg = b.build()?;

    let data = clip_to_range(data, &cfg);
    let spans = envelope(&data, cfg.x_chars);
    let grid = rasterize(&spans, &cfg)?;
    render(&mut stdout().lock(), &cfg, &grid)
}

/// Pretty-print the named palette plus the hex syntax.
pub fn colors() {
    let mut out = stdout().lock();
    let _ = writeln!(out, "\nPossible colors:");
    for name in [
        "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white", "amber",
    ] {
        if let Ok(code) = resolve_color(name) {
            let _ = writeln!(out, "{}", colorize(&code, name));
        }
    }
    let _ = writeln!(
        out,
        "{}  (#505050 or any other #RRGGBB)\n",
        colorize(&AnsiCode::rgb(0x50, 0x50, 0x50), "#505050")
    );
}

/// Print handy invocations for new users.
pub fn examples() {
    println!(
        "
Example invocations
-------------------
* Basic CSV      : harry csv data/series.csv
* From stdin     : some-tool | harry csv
* Named color    : harry csv data/series.csv --color blue
* Hex color      : harry csv data/series.csv --color '#6048c1'
* Custom title   : harry csv data/series.csv --title \"Production Index\"
* Clipped window : harry csv data/series.csv --x-min 10 --x-max 90
"
    );
}
