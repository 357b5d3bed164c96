//! Pillars: one column's parts, assembled and renderable on their own.

use crate::block::Block;
use crate::column::ColumnData;
use crate::controller::{Controller, DefaultController};
use crate::decor::Decor;
use crate::error::Result;
use crate::negotiate;
use crate::options::LayoutOptions;
use crate::render::format_line;

/// Part name for the header block.
pub const HEADER: &str = "header";
/// Part name for the body block.
pub const DATA: &str = "data";
/// Part name for the footer block.
pub const FOOTER: &str = "footer";

/// A named part of a pillar.
#[derive(Clone, Debug, PartialEq)]
pub struct Part {
    name: String,
    block: Block,
}

impl Part {
    /// The part's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The part's block.
    pub fn block(&self) -> &Block {
        &self.block
    }
}

/// One column's complete renderable unit.
///
/// Parts keep the order they were pushed in; that order is the vertical
/// stacking order and never changes afterwards. The optional overall
/// width, when set, is the width every part renders at; otherwise the
/// widest part wins at render time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pillar {
    parts: Vec<Part>,
    width: Option<usize>,
}

impl Pillar {
    /// Creates a pillar with no parts.
    pub fn new() -> Self {
        Pillar::default()
    }

    /// Appends a named part. Names beyond the standard three are fine;
    /// they stack in push order.
    pub fn push(mut self, name: impl Into<String>, block: Block) -> Self {
        self.parts.push(Part {
            name: name.into(),
            block,
        });
        self
    }

    /// Fixes the overall render width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// The parts, in stacking order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Looks up a part by name.
    pub fn part(&self, name: &str) -> Option<&Block> {
        self.parts
            .iter()
            .find(|part| part.name == name)
            .map(|part| &part.block)
    }

    /// The fixed overall width, if one was set.
    pub fn width(&self) -> Option<usize> {
        self.width
    }

    /// Assembles a pillar for one column through a controller.
    ///
    /// Returns `Ok(None)` when the body cannot be produced (the skip
    /// signal) and `Err` when the controller breaks the width contract.
    /// A column-declared width becomes the pillar's overall width.
    pub fn assemble(
        column: &ColumnData,
        controller: &dyn Controller,
        options: &LayoutOptions,
        decor: &Decor,
    ) -> Result<Option<Pillar>> {
        let header = controller.header(column, decor)?;
        let Some(body) = controller.body(column, options)? else {
            return Ok(None);
        };
        let footer = controller.footer(column, decor)?;

        let mut pillar = Pillar::new()
            .push(HEADER, header)
            .push(DATA, body)
            .push(FOOTER, footer);
        pillar.width = column.declared_width();
        Ok(Some(pillar))
    }

    /// Renders the pillar alone at its overall width (or its negotiated
    /// ideal width when none is set).
    ///
    /// Returns `Ok(None)` when the width is below the pillar's negotiated
    /// minimum. Zero-height parts contribute no lines.
    pub fn render(&self, options: &LayoutOptions) -> Result<Option<Vec<String>>> {
        let range = negotiate::pillar(self)?;
        let width = self.width.unwrap_or(range.ideal);
        if width < range.min {
            return Ok(None);
        }

        let mut lines = Vec::new();
        for part in &self.parts {
            for line in part.block.lines() {
                lines.push(format_line(line, width, part.block.align(), &options.marker));
            }
        }
        Ok(Some(lines))
    }
}

/// Renders one column as a standalone pillar with the default controller,
/// options, and decoration.
///
/// `width` overrides the intrinsic ideal width. Returns `None` when the
/// width cannot accommodate the pillar, per the skip contract.
///
/// # Example
///
/// ```rust
/// use peristyle::{render_pillar, ColumnData};
///
/// let column = ColumnData::ints("id", [1, 20, 300]);
/// let lines = render_pillar(&column, None).unwrap();
/// assert_eq!(lines, vec!["   id", "<int>", "    1", "   20", "  300"]);
/// ```
pub fn render_pillar(column: &ColumnData, width: Option<usize>) -> Option<Vec<String>> {
    render_pillar_with(
        column,
        width,
        &DefaultController,
        &LayoutOptions::default(),
        &Decor::standard(),
    )
    .ok()
    .flatten()
}

/// Renders one column as a standalone pillar with explicit collaborators.
pub fn render_pillar_with(
    column: &ColumnData,
    width: Option<usize>,
    controller: &dyn Controller,
    options: &LayoutOptions,
    decor: &Decor,
) -> Result<Option<Vec<String>>> {
    let column = match width {
        Some(w) => column.clone().with_width(w),
        None => column.clone(),
    };
    let Some(pillar) = Pillar::assemble(&column, controller, options, decor)? else {
        return Ok(None);
    };
    pillar.render(options)
}
