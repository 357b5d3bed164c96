//! Layout prelude for convenient imports.
//!
//! This module re-exports the most commonly used types for laying out
//! columns, allowing you to import everything you need in one line:
//!
//! ```rust
//! use peristyle::prelude::*;
//!
//! let colonnade = Colonnade::builder(40)
//!     .decor(Decor::plain())
//!     .push(ColumnData::ints("id", [1, 2, 3]))
//!     .push(ColumnData::text("word", ["one", "two", "three"]))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(colonnade.widths(), vec![5, 5]);
//! ```

// Core layout entry points
pub use crate::layout::{build_colonnade, Colonnade};
pub use crate::pillar::{render_pillar, Pillar};
pub use crate::render::render_colonnade;

// Column inputs
pub use crate::column::{CellValue, ColumnData, ColumnKind};

// Building blocks and customization
pub use crate::block::{Align, Block};
pub use crate::controller::{Controller, DefaultController};
pub use crate::decor::Decor;
pub use crate::options::{terminal_width, LayoutOptions};

// Error types
pub use crate::error::{LayoutError, Result};

// Re-export console::Style for convenience
pub use console::Style;
