//! The colonnade layout engine: deciding which columns are shown and how
//! wide each one is.
//!
//! Columns are processed strictly left to right, and that order is part
//! of the contract: a column is only shown when every column before it is
//! shown, so the materialized set is always a contiguous prefix of the
//! input. Materialization is lazy; a column that cannot fit is never
//! formatted, which keeps the cost of a display call proportional to the
//! characters actually printed.

use std::fmt;

use crate::column::ColumnData;
use crate::controller::{Controller, DefaultController};
use crate::decor::Decor;
use crate::error::Result;
use crate::negotiate;
use crate::options::LayoutOptions;
use crate::pillar::Pillar;
use crate::render;

/// A materialized pillar together with its assigned width.
#[derive(Clone, Debug)]
pub struct FittedPillar {
    pillar: Pillar,
    width: usize,
}

impl FittedPillar {
    /// The materialized pillar.
    pub fn pillar(&self) -> &Pillar {
        &self.pillar
    }

    /// The width the renderer will format this pillar at.
    pub fn width(&self) -> usize {
        self.width
    }
}

/// An ordered set of pillars laid out under one width budget.
///
/// Produced by [`Colonnade::builder`] or [`build_colonnade`]; consumed by
/// [`Colonnade::render`] or [`render_colonnade`](crate::render_colonnade).
#[derive(Clone, Debug)]
pub struct Colonnade {
    columns: Vec<FittedPillar>,
    extra: usize,
    extra_names: Vec<String>,
    options: LayoutOptions,
    decor: Decor,
}

impl Colonnade {
    /// Starts a layout for the given total character budget.
    pub fn builder(budget: usize) -> ColonnadeBuilder<'static> {
        ColonnadeBuilder {
            columns: Vec::new(),
            controller: &DefaultController,
            budget,
            reserved: 0,
            options: LayoutOptions::default(),
            decor: Decor::standard(),
        }
    }

    /// The materialized columns, in input order.
    pub fn columns(&self) -> &[FittedPillar] {
        &self.columns
    }

    /// Number of materialized columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True when no column fit the budget.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Assigned width of each materialized column, in order.
    pub fn widths(&self) -> Vec<usize> {
        self.columns.iter().map(|c| c.width).collect()
    }

    /// Number of input columns that were never materialized.
    pub fn extra_columns(&self) -> usize {
        self.extra
    }

    /// Renders the colonnade into its final lines.
    pub fn render(&self) -> Vec<String> {
        render::render_colonnade(self)
    }

    pub(crate) fn extra_names(&self) -> &[String] {
        &self.extra_names
    }

    pub(crate) fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub(crate) fn decor(&self) -> &Decor {
        &self.decor
    }
}

impl fmt::Display for Colonnade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render().join("\n"))
    }
}

/// Builds a [`Colonnade`] from column data plus the session's
/// collaborators.
///
/// # Example
///
/// ```rust
/// use peristyle::{Colonnade, ColumnData, Decor};
///
/// let colonnade = Colonnade::builder(30)
///     .decor(Decor::plain())
///     .push(ColumnData::ints("id", [1, 2]))
///     .push(ColumnData::text("name", ["ada", "grace"]))
///     .build()
///     .unwrap();
/// assert_eq!(colonnade.widths(), vec![5, 5]);
/// ```
pub struct ColonnadeBuilder<'a> {
    columns: Vec<ColumnData>,
    controller: &'a dyn Controller,
    budget: usize,
    reserved: usize,
    options: LayoutOptions,
    decor: Decor,
}

impl<'a> ColonnadeBuilder<'a> {
    /// Reserves leading budget for an always-shown decoration such as a
    /// row-index column. Subtracted from the budget before any column is
    /// considered.
    pub fn reserve(mut self, width: usize) -> Self {
        self.reserved = width;
        self
    }

    /// Uses a caller-supplied controller for every column this session.
    pub fn controller<'b>(self, controller: &'b dyn Controller) -> ColonnadeBuilder<'b> {
        ColonnadeBuilder {
            columns: self.columns,
            controller,
            budget: self.budget,
            reserved: self.reserved,
            options: self.options,
            decor: self.decor,
        }
    }

    /// Replaces the display options.
    pub fn options(mut self, options: LayoutOptions) -> Self {
        self.options = options;
        self
    }

    /// Replaces the decoration collaborator.
    pub fn decor(mut self, decor: Decor) -> Self {
        self.decor = decor;
        self
    }

    /// Appends one column.
    pub fn push(mut self, column: ColumnData) -> Self {
        self.columns.push(column);
        self
    }

    /// Appends columns in order.
    pub fn columns(mut self, columns: impl IntoIterator<Item = ColumnData>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Runs the layout walk.
    ///
    /// Columns are materialized left to right against the remaining
    /// budget. The fit check charges the 1-column separator (none before
    /// the first column); a column that fits is assigned
    /// `min(ideal, remaining)`, so earlier columns reach their ideal
    /// width before later columns see any budget. The first column that
    /// cannot fit stops the walk, and it plus every later column are
    /// counted as extra, unprobed. A truncated final column may extend
    /// into its separator slot, using every available character.
    ///
    /// Fails only on a controller width-contract violation, in which case
    /// nothing is produced.
    pub fn build(self) -> Result<Colonnade> {
        let mut remaining = self.budget.saturating_sub(self.reserved);
        let mut laid: Vec<FittedPillar> = Vec::new();
        let mut stopped_at = None;

        for (index, column) in self.columns.iter().enumerate() {
            let separator = if laid.is_empty() { 0 } else { 1 };

            // Cheapest possible footprint is one character plus the
            // separator; below that there is no point probing.
            if remaining < separator + 1 {
                stopped_at = Some(index);
                break;
            }

            let Some(pillar) =
                Pillar::assemble(column, self.controller, &self.options, &self.decor)?
            else {
                stopped_at = Some(index);
                break;
            };

            let range = negotiate::pillar(&pillar)?;
            if separator + range.min > remaining {
                stopped_at = Some(index);
                break;
            }

            let width = range.ideal.min(remaining);
            remaining = remaining.saturating_sub(separator + width);
            laid.push(FittedPillar { pillar, width });
        }

        let (extra, extra_names) = match stopped_at {
            Some(index) => {
                let dropped = &self.columns[index..];
                let names = dropped
                    .iter()
                    .filter_map(|c| c.name().map(str::to_string))
                    .collect();
                (dropped.len(), names)
            }
            None => (0, Vec::new()),
        };

        Ok(Colonnade {
            columns: laid,
            extra,
            extra_names,
            options: self.options,
            decor: self.decor,
        })
    }
}

/// Lays out columns under `budget` with the default controller, options,
/// and decoration.
pub fn build_colonnade(
    columns: impl IntoIterator<Item = ColumnData>,
    budget: usize,
) -> Result<Colonnade> {
    Colonnade::builder(budget).columns(columns).build()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arbitrary_columns() -> impl Strategy<Value = Vec<ColumnData>> {
        prop::collection::vec(
            ("[a-z]{1,8}", prop::collection::vec("[a-z]{0,12}", 0..5)),
            0..6,
        )
        .prop_map(|columns| {
            columns
                .into_iter()
                .map(|(name, cells)| ColumnData::text(name, cells))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn column_count_grows_with_budget(
            columns in arbitrary_columns(),
            budget in 0usize..60,
        ) {
            let narrow = build_colonnade(columns.clone(), budget).unwrap();
            let wide = build_colonnade(columns, budget + 1).unwrap();
            prop_assert!(
                wide.len() >= narrow.len(),
                "budget {} showed {} columns but budget {} showed {}",
                budget, narrow.len(), budget + 1, wide.len()
            );
        }

        #[test]
        fn materialized_columns_are_a_prefix(
            columns in arbitrary_columns(),
            budget in 0usize..60,
        ) {
            let colonnade = build_colonnade(columns.clone(), budget).unwrap();
            prop_assert_eq!(colonnade.len() + colonnade.extra_columns(), columns.len());

            // Header title lines must match the input names in order.
            for (fitted, column) in colonnade.columns().iter().zip(&columns) {
                let header = fitted.pillar().part(crate::pillar::HEADER).unwrap();
                prop_assert_eq!(header.lines()[0].as_str(), column.name().unwrap());
            }
        }

        #[test]
        fn assigned_widths_fit_the_budget(
            columns in arbitrary_columns(),
            budget in 0usize..60,
        ) {
            let colonnade = build_colonnade(columns, budget).unwrap();
            let widths = colonnade.widths();
            if widths.is_empty() {
                return Ok(());
            }
            let separators = widths.len() - 1;
            let total: usize = widths.iter().sum::<usize>() + separators;
            // The final column may absorb its separator slot, never more.
            prop_assert!(
                total <= budget + 1,
                "widths {:?} plus separators exceed budget {}",
                widths, budget
            );
        }
    }
}
