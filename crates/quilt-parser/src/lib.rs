//! Parser for the quilt textual layout-design grammar.
//!
//! A design is a grid of characters, one row per line: every distinct
//! non-gap character names a cell region, and `#` marks a cell that stays
//! intentionally empty. Same-character cells must form a contiguous
//! rectangle (a merged cell); anything else is a construction error, never
//! deferred to render time.
//!
//! ```
//! let design = quilt_parser::parse(
//!     "
//!     AAB
//!     C#B
//!     ",
//! )
//! .expect("valid design");
//!
//! assert_eq!(design.nrow(), 2);
//! assert_eq!(design.ncol(), 3);
//! assert_eq!(design.len(), 3);
//! ```

mod design;
mod error;

pub use design::{Design, GAP, Region};
pub use error::DesignError;

use log::debug;
use winnow::{
    Parser as _,
    ascii::line_ending,
    combinator::separated,
    token::take_till,
};

type Input<'src> = &'src str;

/// One raw line of the design source, up to (not including) the line break.
fn raw_row<'src>(input: &mut Input<'src>) -> winnow::Result<&'src str> {
    take_till(0.., ('\r', '\n')).parse_next(input)
}

/// The full source: raw lines separated by line breaks.
fn raw_grid<'src>(input: &mut Input<'src>) -> winnow::Result<Vec<&'src str>> {
    separated(1.., raw_row, line_ending).parse_next(input)
}

/// Parses a textual design into a validated [`Design`].
///
/// Per-line surrounding whitespace and blank lines are ignored, so callers
/// may indent design literals naturally. Whitespace *inside* a row is a
/// [`DesignError::InvalidCell`].
///
/// # Errors
///
/// Returns a [`DesignError`] for an empty design, ragged rows, invalid
/// cell characters, or a non-rectangular region.
pub fn parse(source: &str) -> Result<Design, DesignError> {
    let lines = raw_grid.parse(source).map_err(|_| DesignError::Empty)?;

    let rows: Vec<Vec<char>> = lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().collect())
        .collect();

    let design = Design::from_rows(&rows)?;
    debug!(nrow = design.nrow(), ncol = design.ncol(), regions = design.len();
        "Parsed design");
    Ok(design)
}
