//! The shaft renderer: default production of a column's body block.
//!
//! One line per cell, an ideal width measured from the content, and a
//! minimum width at the truncation floor. Formatting cost is proportional
//! to the column's cells and their rendered widths; the total budget never
//! enters here.

use crate::block::Block;
use crate::column::{CellValue, ColumnData, ColumnKind};
use crate::options::LayoutOptions;
use crate::text::display_width;

/// Renders a column's cells into a body block.
///
/// The block's ideal width is the widest rendered cell unless the column
/// declares its own width. Returns `None` when a declared width sits below
/// the column's minimum, which is the skip signal: the column cannot be
/// shown at all, and that is not an error.
///
/// Float columns whose widest fixed-notation cell exceeds
/// [`LayoutOptions::max_fixed_width`] are re-rendered whole in scientific
/// notation, so magnitude outliers cannot blow up the column width.
pub fn render(column: &ColumnData, options: &LayoutOptions) -> Option<Block> {
    let lines = format_cells(column, options);
    let content_width = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);
    let min_width = options.truncation_floor().min(content_width);

    let width = match column.declared_width() {
        Some(w) if w < min_width => return None,
        Some(w) => w,
        None => content_width,
    };

    Some(
        Block::new(lines)
            .with_width(width)
            .with_min_width(min_width)
            .with_align(column.kind().alignment()),
    )
}

fn format_cells(column: &ColumnData, options: &LayoutOptions) -> Vec<String> {
    let mut lines: Vec<String> = column
        .cells()
        .iter()
        .map(|cell| fixed_cell(cell, options))
        .collect();

    if column.kind() == ColumnKind::Float {
        let widest = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);
        if widest > options.max_fixed_width {
            lines = column
                .cells()
                .iter()
                .map(|cell| scientific_cell(cell, options))
                .collect();
        }
    }

    lines
}

fn fixed_cell(cell: &CellValue, options: &LayoutOptions) -> String {
    match cell {
        CellValue::Str(s) => single_line(s),
        CellValue::Int(i) => i.to_string(),
        CellValue::Float(f) => f.to_string(),
        CellValue::Bool(b) => b.to_string(),
        CellValue::Missing => options.missing.clone(),
    }
}

fn scientific_cell(cell: &CellValue, options: &LayoutOptions) -> String {
    match cell {
        CellValue::Float(f) => format!("{:e}", f),
        CellValue::Int(i) => format!("{:e}", *i as f64),
        other => fixed_cell(other, options),
    }
}

/// Every cell must land on exactly one output line.
fn single_line(s: &str) -> String {
    if s.contains(['\n', '\r', '\t']) {
        s.replace(['\n', '\r', '\t'], " ")
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Align;

    fn options() -> LayoutOptions {
        LayoutOptions::default()
    }

    #[test]
    fn text_column_measures_widest_cell() {
        let column = ColumnData::text("name", ["ada", "grace", "al"]);
        let block = render(&column, &options()).unwrap();
        assert_eq!(block.lines(), &["ada", "grace", "al"]);
        assert_eq!(block.width(), Some(5));
        assert_eq!(block.min_width(), Some(2));
        assert_eq!(block.align(), Align::Left);
    }

    #[test]
    fn numeric_columns_right_align() {
        let column = ColumnData::ints("n", [7, 4200]);
        let block = render(&column, &options()).unwrap();
        assert_eq!(block.lines(), &["7", "4200"]);
        assert_eq!(block.align(), Align::Right);
    }

    #[test]
    fn missing_cells_use_the_sentinel() {
        let column = ColumnData::from_cells(vec![
            CellValue::Int(3),
            CellValue::Missing,
        ]);
        let block = render(&column, &options()).unwrap();
        assert_eq!(block.lines(), &["3", "-"]);

        let block = render(&column, &options().missing("NA")).unwrap();
        assert_eq!(block.lines(), &["3", "NA"]);
    }

    #[test]
    fn control_characters_collapse_to_spaces() {
        let column = ColumnData::text("t", ["a\nb", "c\td"]);
        let block = render(&column, &options()).unwrap();
        assert_eq!(block.lines(), &["a b", "c d"]);
    }

    #[test]
    fn floats_stay_fixed_below_the_limit() {
        let column = ColumnData::floats("x", [2.5, 10.0, -0.25]);
        let block = render(&column, &options()).unwrap();
        assert_eq!(block.lines(), &["2.5", "10", "-0.25"]);
    }

    #[test]
    fn wide_floats_switch_the_whole_column_to_scientific() {
        let column = ColumnData::floats("x", [123.25, 2.0]);
        let block = render(&column, &options().max_fixed_width(4)).unwrap();
        assert_eq!(block.lines(), &["1.2325e2", "2e0"]);
    }

    #[test]
    fn notation_switch_carries_integer_cells_along() {
        let column = ColumnData::from_cells(vec![
            CellValue::Int(2),
            CellValue::Float(1e300),
        ]);
        let block = render(&column, &options()).unwrap();
        assert_eq!(block.lines(), &["2e0", "1e300"]);
    }

    #[test]
    fn non_finite_floats_render() {
        let column = ColumnData::floats("x", [f64::NAN, f64::INFINITY, f64::NEG_INFINITY]);
        let block = render(&column, &options()).unwrap();
        assert_eq!(block.lines(), &["NaN", "inf", "-inf"]);
    }

    #[test]
    fn declared_width_overrides_the_ideal() {
        let column = ColumnData::text("name", ["grace"]).with_width(3);
        let block = render(&column, &options()).unwrap();
        assert_eq!(block.width(), Some(3));
        assert_eq!(block.min_width(), Some(2));
        // Lines are kept at natural width; truncation happens at format
        // time, at the final assigned width.
        assert_eq!(block.lines(), &["grace"]);
    }

    #[test]
    fn declared_width_below_the_floor_skips() {
        let column = ColumnData::text("name", ["grace"]).with_width(1);
        assert!(render(&column, &options()).is_none());
    }

    #[test]
    fn narrow_content_needs_no_floor() {
        let column = ColumnData::text("t", ["a", "b"]);
        let block = render(&column, &options()).unwrap();
        assert_eq!(block.width(), Some(1));
        assert_eq!(block.min_width(), Some(1));

        // A declared width of 1 fits content this narrow.
        let column = column.with_width(1);
        assert!(render(&column, &options()).is_some());
    }

    #[test]
    fn empty_column_renders_empty() {
        let column = ColumnData::from_cells(vec![]);
        let block = render(&column, &options()).unwrap();
        assert_eq!(block.height(), 0);
        assert_eq!(block.width(), Some(0));
        assert_eq!(block.min_width(), Some(0));
    }
}
