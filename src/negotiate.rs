//! Width negotiation: what a part needs, what a pillar would like.
//!
//! Negotiation never decides whether a column is shown; it only reports
//! widths. The layout compares them against its remaining budget. Probing
//! is monotonic: a block accepted at some width renders at every width up
//! to its ideal, so nothing here is ever probed twice.

use crate::block::Block;
use crate::error::{LayoutError, Result};
use crate::pillar::Pillar;

/// A negotiated width range: the narrowest acceptable width and the
/// width the content would ideally get.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WidthRange {
    /// Narrowest width the pillar can be shown at.
    pub min: usize,
    /// Width the pillar wants when space allows.
    pub ideal: usize,
}

/// Negotiates a single part.
///
/// A block without a declared width cannot be negotiated; that is the
/// contract violation of a misbehaving controller, reported against the
/// part name. A minimum above the declared width is rejected the same
/// way. Both abort the display call.
pub fn part(name: &str, block: &Block) -> Result<(usize, usize)> {
    let width = block
        .width()
        .ok_or_else(|| LayoutError::UndeclaredWidth {
            part: name.to_string(),
        })?;
    let min = block.min_width().unwrap_or(width);
    if min > width {
        return Err(LayoutError::MinExceedsWidth { min, width });
    }
    Ok((min, width))
}

/// Negotiates a whole pillar.
///
/// Parts stack vertically, so the pillar's range is the maximum over its
/// parts on both ends. Empty parts report `(0, 0)` and change nothing.
pub fn pillar(pillar: &Pillar) -> Result<WidthRange> {
    let mut range = WidthRange::default();
    for part in pillar.parts() {
        let (min, ideal) = self::part(part.name(), part.block())?;
        range.min = range.min.max(min);
        range.ideal = range.ideal.max(ideal);
    }
    Ok(range)
}
