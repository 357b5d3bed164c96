//! The controller protocol: who produces each part of a pillar.
//!
//! A controller is resolved once per display session and shared read-only
//! by every column in that session. The layout calls it lazily, left to
//! right, only for columns that might still fit.

use crate::block::Block;
use crate::column::ColumnData;
use crate::decor::Decor;
use crate::error::Result;
use crate::options::LayoutOptions;
use crate::shaft;

/// Produces the header, body, and footer blocks of a pillar.
///
/// Every method has a baseline default, so an implementation overrides
/// only what it wants to change; the untouched parts stay byte-identical
/// to [`DefaultController`] output. Implementations that vary by column
/// typically branch on [`ColumnData::kind`].
///
/// Returned blocks must declare a width. Handing back a block without one
/// (for a required part) aborts the display call with
/// [`LayoutError::UndeclaredWidth`](crate::LayoutError::UndeclaredWidth).
///
/// # Example
///
/// ```rust
/// use peristyle::{Block, ColumnData, Controller, Decor};
///
/// struct CountFooter;
///
/// impl Controller for CountFooter {
///     fn footer(&self, column: &ColumnData, decor: &Decor) -> peristyle::Result<Block> {
///         Ok(Block::new(vec![decor.subtle(&format!("n = {}", column.len()))]))
///     }
/// }
/// ```
pub trait Controller {
    /// Produces the header block: the column name (when present) above
    /// the subtle type abbreviation.
    fn header(&self, column: &ColumnData, decor: &Decor) -> Result<Block> {
        Ok(default_header(column, decor))
    }

    /// Produces the body block, or `None` to skip the column entirely.
    fn body(&self, column: &ColumnData, options: &LayoutOptions) -> Result<Option<Block>> {
        Ok(shaft::render(column, options))
    }

    /// Produces the footer block. Empty by default; override for
    /// summaries under the data.
    fn footer(&self, column: &ColumnData, decor: &Decor) -> Result<Block> {
        let _ = (column, decor);
        Ok(Block::empty())
    }
}

/// The baseline controller: every part produced by the defaults.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultController;

impl Controller for DefaultController {}

/// The baseline header: name line above the decorated `<type>` line,
/// aligned like the column's body. Width is the measured text width; a
/// header is shown whole or not at all, so no separate minimum.
pub fn default_header(column: &ColumnData, decor: &Decor) -> Block {
    let label = decor.subtle(&format!("<{}>", column.type_label()));
    let lines = match column.name() {
        Some(name) => vec![name.to_string(), label],
        None => vec![label],
    };
    Block::new(lines).with_align(column.kind().alignment())
}
