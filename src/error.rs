//! Error types for graph coloring.
//!
//! A failed search at a single color count is *not* an error: it is reported
//! as [`SearchOutcome::NoSolutionFound`](crate::ga::SearchOutcome) and absorbed
//! by the minimization scan. Errors here are either invalid input or a
//! broken internal invariant.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ColoringError>;

/// Errors raised by the coloring engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColoringError {
    /// The input graph violates a well-formedness condition.
    #[error("malformed graph: {0}")]
    MalformedGraph(ValidationError),

    /// Crossover was called with mismatched parents or an out-of-range point.
    ///
    /// Every chromosome of a population shares the graph's vertex count, so
    /// this indicates a bug upstream rather than bad user input.
    #[error("invalid crossover input: {reason}")]
    InvalidCrossover {
        /// What was wrong with the parents or the point.
        reason: String,
    },

    /// No color count up to the palette limit produced a valid coloring.
    #[error("graph is not colorable within the palette limit of {max_colors} colors")]
    NotColorable {
        /// Largest color count that was tried.
        max_colors: usize,
    },

    /// The requested color count is outside `1..=max`.
    #[error("color count {k} is outside the supported range 1..={max}")]
    InvalidColorCount {
        /// Requested color count.
        k: usize,
        /// Largest supported color count.
        max: usize,
    },

    /// A search parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The palette is empty or contains duplicate tokens.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// A chromosome refers to a color the palette does not have.
    #[error("color index {color} is not in a palette of {palette_len} colors")]
    ColorOutOfPalette {
        /// Offending color index.
        color: usize,
        /// Number of tokens in the palette.
        palette_len: usize,
    },
}

impl From<ValidationError> for ColoringError {
    fn from(err: ValidationError) -> Self {
        ColoringError::MalformedGraph(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_validation_error_converts() {
        let err: ColoringError = ValidationError::new(
            ValidationErrorKind::SelfLoop,
            "Vertex 3 has a self-loop",
        )
        .into();
        assert!(matches!(err, ColoringError::MalformedGraph(_)));
        assert!(err.to_string().contains("self-loop"));
    }

    #[test]
    fn test_display_messages() {
        let err = ColoringError::NotColorable { max_colors: 35 };
        assert!(err.to_string().contains("35"));

        let err = ColoringError::InvalidColorCount { k: 0, max: 35 };
        assert_eq!(
            err.to_string(),
            "color count 0 is outside the supported range 1..=35"
        );
    }
}
