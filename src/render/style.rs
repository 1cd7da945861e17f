//! Drawing constants for the text preview.

// Characters per grid column
pub const COLUMN_WIDTH: usize = 5;

pub const CELL_SEPARATOR: char = '|';
pub const FILLER_CHAR: char = '.';
pub const ELLIPSIS: char = '~';
