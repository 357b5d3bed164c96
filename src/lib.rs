//! # Peristyle - Column Layout Under a Width Budget
//!
//! `peristyle` renders columnar data to fixed-width text. Given an ordered
//! set of columns and a total character budget, it decides how many columns
//! fit, how wide each one gets, and produces the final lines: headers,
//! bodies, and footers stacked top-aligned, each cell truncated to its
//! column's width, with a trailing summary for columns that had to be
//! dropped.
//!
//! Columns are always shown as a contiguous prefix of the input order: a
//! later column never appears unless every earlier one does. Width is
//! handed out greedily left to right, so earlier columns reach their ideal
//! width before later columns see any budget. Columns that cannot fit are
//! never formatted at all, which keeps the cost of a display call
//! proportional to the characters actually printed.
//!
//! ## Core Concepts
//!
//! - [`ColumnData`]: one column's raw cells plus an optional name and width
//! - [`Colonnade`]: an ordered set of columns laid out under one budget
//! - [`Pillar`]: one column's renderable parts (header, data, footer)
//! - [`Block`]: lines annotated with width and minimum-width metadata
//! - [`Controller`]: override points for header/body/footer production
//! - [`Decor`]: the injected text decoration used for the quiet parts
//!
//! ## Quick Start
//!
//! ```rust
//! use peristyle::{Colonnade, ColumnData, Decor};
//!
//! let colonnade = Colonnade::builder(40)
//!     .decor(Decor::plain())
//!     .push(ColumnData::ints("id", [1, 2]))
//!     .push(ColumnData::text("name", ["ada", "grace"]))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(colonnade.render(), vec![
//!     "   id name ",
//!     "<int> <str>",
//!     "    1 ada  ",
//!     "    2 grace",
//! ]);
//! ```
//!
//! ## Sizing to the Terminal
//!
//! The layout never queries the terminal itself; the caller passes the
//! budget in, typically via [`terminal_width`]:
//!
//! ```rust
//! use peristyle::{build_colonnade, terminal_width, ColumnData};
//!
//! let columns = vec![
//!     ColumnData::ints("id", [1, 2, 3]),
//!     ColumnData::text("name", ["ada", "grace", "alan"]),
//! ];
//!
//! let colonnade = build_colonnade(columns, terminal_width(80)).unwrap();
//! for line in colonnade.render() {
//!     println!("{}", line);
//! }
//! ```
//!
//! ## Dropping Columns
//!
//! A column that cannot fit is dropped along with everything after it, and
//! the rendered output ends with a summary line instead of failing:
//!
//! ```rust
//! use peristyle::{Colonnade, ColumnData, Decor};
//!
//! let colonnade = Colonnade::builder(11)
//!     .decor(Decor::plain())
//!     .push(ColumnData::ints("id", [1, 2]))
//!     .push(ColumnData::text("name", ["ada", "grace"]))
//!     .push(ColumnData::text("notes", ["-", "-"]))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(colonnade.widths(), vec![5, 5]);
//! assert_eq!(colonnade.extra_columns(), 1);
//! assert_eq!(
//!     colonnade.render().last().unwrap(),
//!     "\u{2026} and 1 more column: notes"
//! );
//! ```
//!
//! ## Custom Controllers
//!
//! A [`Controller`] overrides how any part of a pillar is produced; parts
//! that are not overridden stay byte-identical to the default output:
//!
//! ```rust
//! use peristyle::{Block, Colonnade, ColumnData, Controller, Decor};
//!
//! struct Tally;
//!
//! impl Controller for Tally {
//!     fn footer(&self, column: &ColumnData, decor: &Decor) -> peristyle::Result<Block> {
//!         Ok(Block::new(vec![decor.subtle(&format!("n = {}", column.len()))]))
//!     }
//! }
//!
//! let colonnade = Colonnade::builder(30)
//!     .controller(&Tally)
//!     .decor(Decor::plain())
//!     .push(ColumnData::floats("score", [9.5, 8.25]))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(colonnade.render().last().unwrap(), "n = 2");
//! ```

pub mod block;
pub mod column;
pub mod controller;
pub mod decor;
mod error;
pub mod layout;
pub mod negotiate;
pub mod options;
pub mod pillar;
pub mod prelude;
pub mod render;
pub mod shaft;
pub mod text;

// Error types
pub use error::{LayoutError, Result};

// Building blocks
pub use block::{Align, Block};
pub use column::{CellValue, ColumnData, ColumnKind};

// Session collaborators
pub use controller::{default_header, Controller, DefaultController};
pub use decor::Decor;
pub use options::{terminal_width, LayoutOptions};

// Single-pillar entry points
pub use pillar::{render_pillar, render_pillar_with, Part, Pillar};

// Layout and rendering
pub use layout::{build_colonnade, Colonnade, ColonnadeBuilder, FittedPillar};
pub use negotiate::WidthRange;
pub use render::{format_line, render_colonnade};
