//! Grid rendering: columns + page rows + selection in, header/body/footer out.

use crate::column::{Alignment, CellContext, Column, HeaderContext};
use crate::row::TableRow;
use crate::selection::Selection;
use crate::sort::SortState;

/// Text shown in place of an empty body.
pub const NO_RESULTS: &str = "No results.";

/// A rendered header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub column_id: String,
    pub text: String,
    pub align: Alignment,
    pub min_width: u16,
}

/// A rendered body row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyRow {
    /// Row key of the record.
    pub key: String,
    /// Whether the row is in the selection set.
    pub selected: bool,
    /// One rendered cell per visible column.
    pub cells: Vec<String>,
}

/// Table body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Rows(Vec<BodyRow>),
    /// Single full-width row shown when the page has no records.
    Placeholder { text: String, colspan: usize },
}

/// Footer state: selection summary and pager controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Footer {
    /// Selected rows among the filtered rows.
    pub selected: usize,
    /// Filtered row count.
    pub filtered: usize,
    pub page_index: usize,
    pub page_count: usize,
    /// Whether the "Previous" control is enabled.
    pub can_previous: bool,
    /// Whether the "Next" control is enabled.
    pub can_next: bool,
}

impl Footer {
    /// `"X of Y row(s) selected."`
    pub fn summary(&self) -> String {
        crate::selection::selection_summary(self.selected, self.filtered)
    }
}

/// A fully rendered table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    pub header: Vec<HeaderCell>,
    pub body: Body,
    pub footer: Footer,
}

impl RenderedTable {
    /// Whether the body is the "No results." placeholder.
    pub fn is_placeholder(&self) -> bool {
        matches!(self.body, Body::Placeholder { .. })
    }

    /// Body rows, empty for the placeholder.
    pub fn rows(&self) -> &[BodyRow] {
        match &self.body {
            Body::Rows(rows) => rows,
            Body::Placeholder { .. } => &[],
        }
    }
}

/// Aggregate selection flags handed to every header renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectAllState {
    pub all_selected: bool,
    pub some_selected: bool,
}

/// Render one page of a table.
///
/// Pure function of its inputs. `columns` are the visible columns in display
/// order and `rows` the records on the current page.
pub fn render<T: TableRow>(
    columns: &[&Column<T>],
    rows: &[&T],
    selection: &Selection,
    select_all: SelectAllState,
    sort: Option<&SortState>,
    footer: Footer,
) -> RenderedTable {
    let header = columns
        .iter()
        .map(|column| {
            let cx = HeaderContext {
                all_selected: select_all.all_selected,
                some_selected: select_all.some_selected,
                sort: sort
                    .filter(|s| s.column_id == column.id)
                    .map(|s| s.direction),
            };
            let mut text = column.render_header(&cx);
            if let Some(direction) = cx.sort {
                text = format!("{text} {}", direction.indicator());
            }
            HeaderCell {
                column_id: column.id.clone(),
                text,
                align: column.align,
                min_width: column.min_width,
            }
        })
        .collect();

    let body = if rows.is_empty() {
        Body::Placeholder {
            text: NO_RESULTS.to_string(),
            colspan: columns.len(),
        }
    } else {
        Body::Rows(
            rows.iter()
                .enumerate()
                .map(|(row_index, row)| {
                    let key = row.row_key();
                    let cx = CellContext {
                        selected: selection.is_selected(&key),
                        row_index,
                    };
                    BodyRow {
                        cells: columns.iter().map(|c| c.render_cell(row, &cx)).collect(),
                        selected: cx.selected,
                        key,
                    }
                })
                .collect(),
        )
    };

    RenderedTable {
        header,
        body,
        footer,
    }
}
