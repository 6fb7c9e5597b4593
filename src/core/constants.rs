//! Shared layout constants.

/// Left and right frame border, one character each.
pub const BORDER_WIDTH: usize = 2;
/// Blank column between the y-axis labels and the left border.
pub const LABEL_GUTTER: usize = 1;

/// Smallest plot the renderer will accept, in character cells.
pub const MIN_GRAPH_WIDTH: usize = 14;
pub const MIN_GRAPH_HEIGHT: usize = 7;

/// A braille cell carries 2 dot columns and 4 dot rows.
pub const DOTS_PER_CELL_X: usize = 2;
pub const DOTS_PER_CELL_Y: usize = 4;

/// Axis labels are printed with one decimal place.
pub const DECIMAL_PRECISION: usize = 1;
