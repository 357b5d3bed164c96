//! Width-annotated text blocks, the unit every pillar part is made of.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::text::display_width;

/// Text alignment applied when a block is formatted at its final width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
    /// Center text (pad on both sides).
    Center,
}

/// A rendered fragment of a pillar: zero or more lines plus declared
/// width metadata.
///
/// The declared `width` is the block's ideal width; `min_width` is the
/// narrowest width it can still be shown at (content is truncated between
/// the two). A block without a declared width cannot take part in width
/// negotiation; handing one to the layout as a required part is a contract
/// violation, not a recoverable condition.
///
/// Blocks are immutable once handed to a pillar.
///
/// # Example
///
/// ```rust
/// use peristyle::Block;
///
/// let block = Block::new(vec!["alpha".into(), "beta".into()]);
/// assert_eq!(block.width(), Some(5));
/// assert_eq!(block.height(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Block {
    lines: Vec<String>,
    width: Option<usize>,
    min_width: Option<usize>,
    align: Align,
}

impl Block {
    /// Creates a block whose width is measured from its content.
    pub fn new(lines: Vec<String>) -> Self {
        let width = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);
        Block {
            lines,
            width: Some(width),
            min_width: None,
            align: Align::default(),
        }
    }

    /// Creates a block with zero lines and zero declared width.
    ///
    /// Empty blocks negotiate as `(0, 0)` and contribute nothing to
    /// vertical stacking.
    pub fn empty() -> Self {
        Block::new(Vec::new())
    }

    /// Creates a block with caller-declared ideal and minimum widths,
    /// rejecting a minimum above the ideal.
    pub fn sized(lines: Vec<String>, width: usize, min_width: usize) -> Result<Self> {
        if min_width > width {
            return Err(LayoutError::MinExceedsWidth {
                min: min_width,
                width,
            });
        }
        Ok(Block {
            lines,
            width: Some(width),
            min_width: Some(min_width),
            align: Align::default(),
        })
    }

    /// Replaces the declared ideal width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Declares a minimum width distinct from the ideal width.
    ///
    /// Consistency with the ideal width is enforced when the block is
    /// negotiated, so a bad value surfaces on the display call that uses
    /// it.
    pub fn with_min_width(mut self, min_width: usize) -> Self {
        self.min_width = Some(min_width);
        self
    }

    /// Sets the alignment used when formatting at the final width.
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// The block's lines, unpadded.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Declared ideal width, if any.
    pub fn width(&self) -> Option<usize> {
        self.width
    }

    /// Declared minimum width, if it differs from the ideal width.
    pub fn min_width(&self) -> Option<usize> {
        self.min_width
    }

    /// Alignment used at format time.
    pub fn align(&self) -> Align {
        self.align
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_measures_widest_line() {
        let block = Block::new(vec!["ab".into(), "abcd".into(), "a".into()]);
        assert_eq!(block.width(), Some(4));
        assert_eq!(block.min_width(), None);
        assert_eq!(block.height(), 3);
    }

    #[test]
    fn new_measures_past_ansi_and_wide_chars() {
        let block = Block::new(vec!["\x1b[2mdim\x1b[0m".into(), "\u{65e5}\u{672c}".into()]);
        assert_eq!(block.width(), Some(4));
    }

    #[test]
    fn empty_declares_zero() {
        let block = Block::empty();
        assert_eq!(block.width(), Some(0));
        assert_eq!(block.height(), 0);
    }

    #[test]
    fn default_declares_nothing() {
        let block = Block::default();
        assert_eq!(block.width(), None);
        assert_eq!(block.min_width(), None);
    }

    #[test]
    fn sized_rejects_min_above_width() {
        let err = Block::sized(vec!["x".into()], 3, 7).unwrap_err();
        assert_eq!(err, LayoutError::MinExceedsWidth { min: 7, width: 3 });

        let block = Block::sized(vec!["x".into()], 7, 3).unwrap();
        assert_eq!(block.width(), Some(7));
        assert_eq!(block.min_width(), Some(3));
    }

    #[test]
    fn setters_override() {
        let block = Block::new(vec!["abcdef".into()])
            .with_width(10)
            .with_min_width(2)
            .with_align(Align::Right);
        assert_eq!(block.width(), Some(10));
        assert_eq!(block.min_width(), Some(2));
        assert_eq!(block.align(), Align::Right);
    }
}
