//! Error types for design parsing.
//!
//! All design problems are reported at construction time, before any
//! layout work happens; a [`DesignError`] never escapes from a render
//! pass.

use thiserror::Error;

/// Error produced while parsing or validating a textual design.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DesignError {
    /// The design has no rows, or rows with no cells.
    #[error("design is empty")]
    Empty,

    /// Rows have differing cell counts.
    #[error("design row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        /// 0-based index of the offending row.
        row: usize,
        /// Cell count of the first row.
        expected: usize,
        /// Cell count of the offending row.
        found: usize,
    },

    /// A cell character is not a printable region label.
    #[error("design row {row} contains invalid cell character {cell:?}")]
    InvalidCell {
        /// 0-based index of the offending row.
        row: usize,
        /// The offending character.
        cell: char,
    },

    /// A label's occupied cells do not form a contiguous rectangle.
    #[error("design region '{label}' does not form a contiguous rectangle")]
    NonRectangular {
        /// The offending region label.
        label: char,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_ragged() {
        let err = DesignError::RaggedRows {
            row: 2,
            expected: 3,
            found: 4,
        };
        assert_eq!(err.to_string(), "design row 2 has 4 cells, expected 3");
    }

    #[test]
    fn test_display_non_rectangular() {
        let err = DesignError::NonRectangular { label: 'A' };
        assert_eq!(
            err.to_string(),
            "design region 'A' does not form a contiguous rectangle"
        );
    }
}
