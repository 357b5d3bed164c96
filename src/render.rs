//! Final line production: pillars stacked side by side.
//!
//! Parts are grouped by name across all materialized pillars, in the order
//! the names first appear. Within a group every column is padded to the
//! group's tallest block, so a shorter header gets blank lines beneath it
//! and every body starts on the same output row. Columns are joined with a
//! single-space separator; a trailing summary line reports columns the
//! budget forced out.

use crate::block::Align;
use crate::layout::{Colonnade, FittedPillar};
use crate::text::{pad_center, pad_left, pad_right, truncate_end};

/// Formats one line at its final width: truncate, then pad out to exactly
/// `width` according to `align`.
///
/// A line that is already exactly `width` wide passes through unchanged,
/// so re-applying this at the same width never drifts.
///
/// # Example
///
/// ```rust
/// use peristyle::{format_line, Align};
///
/// assert_eq!(format_line("negotiation", 8, Align::Left, "\u{2026}"), "negotia\u{2026}");
/// assert_eq!(format_line("42", 5, Align::Right, "\u{2026}"), "   42");
/// ```
pub fn format_line(line: &str, width: usize, align: Align, marker: &str) -> String {
    let truncated = truncate_end(line, width, marker);
    match align {
        Align::Left => pad_right(&truncated, width),
        Align::Right => pad_left(&truncated, width),
        Align::Center => pad_center(&truncated, width),
    }
}

/// Renders a laid-out colonnade into its final lines.
///
/// Every part block is formatted at its column's assigned width, stacked
/// group by group. When columns were dropped, the last line summarizes how
/// many, listing the named ones.
///
/// # Example
///
/// ```rust
/// use peristyle::{build_colonnade, render_colonnade, ColumnData};
///
/// let colonnade = build_colonnade(vec![ColumnData::ints("id", [7, 8])], 20).unwrap();
/// let lines = render_colonnade(&colonnade);
/// assert_eq!(lines[0], "   id");
/// ```
pub fn render_colonnade(colonnade: &Colonnade) -> Vec<String> {
    let columns = colonnade.columns();
    let marker = &colonnade.options().marker;
    let mut lines = Vec::new();

    for name in part_names(columns) {
        let height = columns
            .iter()
            .map(|fitted| fitted.pillar().part(name).map_or(0, |block| block.height()))
            .max()
            .unwrap_or(0);

        for line_index in 0..height {
            lines.push(stacked_row(columns, name, line_index, marker));
        }
    }

    if colonnade.extra_columns() > 0 {
        lines.push(summary_line(colonnade));
    }

    lines
}

/// Part names across all pillars, in first-seen order.
fn part_names(columns: &[FittedPillar]) -> Vec<&str> {
    let mut names = Vec::new();
    for fitted in columns {
        for part in fitted.pillar().parts() {
            if !names.contains(&part.name()) {
                names.push(part.name());
            }
        }
    }
    names
}

/// One output row: the given line of the named part in every column. A
/// column whose block is missing or shorter contributes blank padding.
fn stacked_row(columns: &[FittedPillar], name: &str, line_index: usize, marker: &str) -> String {
    let mut row = String::new();
    for (i, fitted) in columns.iter().enumerate() {
        if i > 0 {
            row.push(' ');
        }
        let cell = fitted
            .pillar()
            .part(name)
            .and_then(|block| block.lines().get(line_index).map(|line| (line, block.align())));
        match cell {
            Some((line, align)) => {
                row.push_str(&format_line(line, fitted.width(), align, marker));
            }
            None => row.push_str(&" ".repeat(fitted.width())),
        }
    }
    row
}

fn summary_line(colonnade: &Colonnade) -> String {
    let extra = colonnade.extra_columns();
    let noun = if extra == 1 { "column" } else { "columns" };
    let mut summary = format!("{} and {} more {}", colonnade.options().marker, extra, noun);
    let names = colonnade.extra_names();
    if !names.is_empty() {
        summary.push_str(": ");
        summary.push_str(&names.join(", "));
    }
    colonnade.decor().subtle(&summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Block;
    use crate::column::{CellValue, ColumnData, ColumnKind};
    use crate::controller::Controller;
    use crate::decor::Decor;
    use crate::error::Result;
    use crate::layout::{build_colonnade, Colonnade};
    use crate::text::display_width;

    #[test]
    fn format_line_truncates_then_pads() {
        assert_eq!(format_line("abcdefgh", 6, Align::Left, "\u{2026}"), "abcde\u{2026}");
        assert_eq!(format_line("ab", 6, Align::Left, "\u{2026}"), "ab    ");
        assert_eq!(format_line("ab", 6, Align::Right, "\u{2026}"), "    ab");
        assert_eq!(format_line("ab", 6, Align::Center, "\u{2026}"), "  ab  ");
        assert_eq!(format_line("ab", 0, Align::Left, "\u{2026}"), "");
    }

    #[test]
    fn format_line_is_a_fixpoint_at_the_same_width() {
        for align in [Align::Left, Align::Right, Align::Center] {
            let once = format_line("hello world", 7, align, "\u{2026}");
            assert_eq!(format_line(&once, 7, align, "\u{2026}"), once);
        }
    }

    #[test]
    fn shorter_headers_pad_to_the_tallest_block() {
        // A named column has a two-line header, an unnamed one a single
        // line; both bodies must start on the same output row.
        let colonnade = Colonnade::builder(20)
            .decor(Decor::plain())
            .push(ColumnData::ints("id", [1, 2]))
            .push(ColumnData::from_cells(vec!["ada".into(), "grace".into()]))
            .build()
            .unwrap();

        assert_eq!(
            colonnade.render(),
            vec![
                "   id <str>",
                "<int>      ",
                "    1 ada  ",
                "    2 grace",
            ]
        );
    }

    #[test]
    fn assigned_width_truncates_every_line_of_a_column() {
        let colonnade = Colonnade::builder(17)
            .decor(Decor::plain())
            .push(ColumnData::text("left", ["abcdefghij", "klm"]))
            .push(ColumnData::text("right", ["0123456789", "xy"]))
            .build()
            .unwrap();

        assert_eq!(colonnade.widths(), vec![10, 7]);
        assert_eq!(
            colonnade.render(),
            vec![
                "left       right  ",
                "<str>      <str>  ",
                "abcdefghij 012345\u{2026}",
                "klm        xy     ",
            ]
        );
    }

    #[test]
    fn summary_names_the_dropped_columns() {
        let columns = vec![
            ColumnData::text("c1", ["abcdefghij", "klm"]),
            ColumnData::text("c2", ["abcdefghij", "klm"]),
            ColumnData::text("c3", ["abcdefghij", "klm"]),
        ];
        let colonnade = Colonnade::builder(22)
            .decor(Decor::plain())
            .columns(columns)
            .build()
            .unwrap();

        let lines = colonnade.render();
        assert_eq!(lines.last().unwrap(), "\u{2026} and 1 more column: c3");
    }

    #[test]
    fn summary_counts_unnamed_columns_without_listing() {
        let columns = vec![
            ColumnData::from_cells(vec!["abcdefghij".into()]),
            ColumnData::from_cells(vec!["xyz".into()]),
            ColumnData::from_cells(vec!["xyz".into()]),
        ];
        let colonnade = Colonnade::builder(11)
            .decor(Decor::plain())
            .columns(columns)
            .build()
            .unwrap();

        assert_eq!(colonnade.extra_columns(), 2);
        let lines = colonnade.render();
        assert_eq!(lines.last().unwrap(), "\u{2026} and 2 more columns");
    }

    #[test]
    fn only_the_summary_remains_when_nothing_fits() {
        let colonnade = Colonnade::builder(4)
            .decor(Decor::plain())
            .push(ColumnData::text("hello", ["ab"]))
            .build()
            .unwrap();

        assert_eq!(
            colonnade.render(),
            vec!["\u{2026} and 1 more column: hello"]
        );
    }

    #[test]
    fn empty_input_renders_nothing() {
        let colonnade = build_colonnade(Vec::new(), 10).unwrap();
        assert!(colonnade.render().is_empty());
    }

    struct SumFooter;

    impl Controller for SumFooter {
        fn footer(&self, column: &ColumnData, decor: &Decor) -> Result<Block> {
            if column.kind() != ColumnKind::Int {
                return Ok(Block::empty());
            }
            let total: i64 = column
                .cells()
                .iter()
                .filter_map(|cell| match cell {
                    CellValue::Int(i) => Some(*i),
                    _ => None,
                })
                .sum();
            Ok(Block::new(vec![decor.subtle(&format!("sum {}", total))]).with_align(Align::Right))
        }
    }

    #[test]
    fn footer_rows_group_across_columns() {
        // Only the integer column carries a footer; the text column pads
        // the footer row with blanks.
        let colonnade = Colonnade::builder(20)
            .controller(&SumFooter)
            .decor(Decor::plain())
            .push(ColumnData::ints("id", [1, 2]))
            .push(ColumnData::text("name", ["ada", "grace"]))
            .build()
            .unwrap();

        assert_eq!(
            colonnade.render(),
            vec![
                "   id name ",
                "<int> <str>",
                "    1 ada  ",
                "    2 grace",
                "sum 3      ",
            ]
        );
    }

    #[test]
    fn rendered_lines_pass_through_the_formatter_unchanged() {
        let colonnade = Colonnade::builder(17)
            .decor(Decor::plain())
            .push(ColumnData::text("left", ["abcdefghij", "klm"]))
            .push(ColumnData::ints("n", [1, 2000]))
            .build()
            .unwrap();

        for line in colonnade.render() {
            let width = display_width(&line);
            assert_eq!(format_line(&line, width, Align::Left, "\u{2026}"), line);
        }
    }
}
