//! Color palette.
//!
//! The search works on color indices `0..k`. A palette maps those indices to
//! display tokens (hex strings by default) for whoever renders the result,
//! and its size caps the number of colors the minimization scan tries.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{ColoringError, Result};
use crate::ga::ColoringChromosome;

/// Default display colors, in the order they are handed out.
const DEFAULT_TOKENS: [&str; 35] = [
    "#FB0000", "#004CFB", "#DEB887", "#008080", "#FFA500", "#FFB6C1", "#00FFFF",
    "#7FFFD4", "#008000", "#FFFF00", "#964B00", "#FAF0E6", "#000000", "#A020F0",
    "#DFFF00", "#7B3F00", "#DC143C", "#4682B4", "#8B0000", "#00008B", "#006400",
    "#808080", "#FF00FF", "#800000", "#BC8F8F", "#DDA0DD", "#CD853F", "#4169E1",
    "#2E8B57", "#D8BFD8", "#30D5C8", "#A50055", "#FF1493", "#FFD700", "#E6E6FA",
];

/// An ordered list of distinguishable color tokens.
///
/// Tokens are unique under case-insensitive comparison, so `"#ff0000"` and
/// `"#FF0000"` can never name two different colors.
///
/// # Example
/// ```
/// use u_chroma::models::Palette;
///
/// let palette = Palette::default();
/// assert_eq!(palette.len(), 35);
/// assert_eq!(palette.token(0), Some("#FB0000"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    tokens: Vec<String>,
}

impl Palette {
    /// Creates a palette from display tokens.
    ///
    /// Fails if the list is empty or two tokens differ only by case.
    pub fn new<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if tokens.is_empty() {
            return Err(ColoringError::InvalidPalette(
                "palette must contain at least one color".into(),
            ));
        }

        let mut seen = HashSet::new();
        for token in &tokens {
            if !seen.insert(token.trim().to_ascii_lowercase()) {
                return Err(ColoringError::InvalidPalette(format!(
                    "duplicate color token '{token}'"
                )));
            }
        }

        Ok(Self { tokens })
    }

    /// Number of colors available.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false for a constructed palette.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token for a color index.
    pub fn token(&self, color: usize) -> Option<&str> {
        self.tokens.get(color).map(String::as_str)
    }

    /// Compares two tokens the way the palette does (case-insensitive).
    pub fn same_color(a: &str, b: &str) -> bool {
        a.trim().eq_ignore_ascii_case(b.trim())
    }

    /// Maps every gene of a chromosome to its display token.
    pub fn tokens_for(&self, chromosome: &ColoringChromosome) -> Result<Vec<&str>> {
        chromosome
            .genes
            .iter()
            .map(|&color| {
                self.token(color).ok_or(ColoringError::ColorOutOfPalette {
                    color,
                    palette_len: self.len(),
                })
            })
            .collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            tokens: DEFAULT_TOKENS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_is_valid() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 35);
        // Re-validating the defaults catches accidental duplicates.
        assert!(Palette::new(DEFAULT_TOKENS).is_ok());
    }

    #[test]
    fn test_empty_palette_rejected() {
        let err = Palette::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, ColoringError::InvalidPalette(_)));
    }

    #[test]
    fn test_case_insensitive_duplicates_rejected() {
        let err = Palette::new(["#00ffff", "#00FFFF"]).unwrap_err();
        assert!(matches!(err, ColoringError::InvalidPalette(_)));
        assert!(Palette::same_color("#abcdef", " #ABCDEF"));
    }

    #[test]
    fn test_tokens_for_chromosome() {
        let palette = Palette::new(["red", "green"]).unwrap();
        let ch = ColoringChromosome::new(vec![0, 1, 0]);
        assert_eq!(palette.tokens_for(&ch).unwrap(), vec!["red", "green", "red"]);

        let out_of_range = ColoringChromosome::new(vec![0, 2]);
        assert_eq!(
            palette.tokens_for(&out_of_range).unwrap_err(),
            ColoringError::ColorOutOfPalette {
                color: 2,
                palette_len: 2
            }
        );
    }
}
