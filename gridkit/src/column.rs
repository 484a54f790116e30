//! Column descriptors and the ordered column set.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::error::TableError;
use crate::row::checkbox;
use crate::sort::SortDirection;
use crate::value::CellValue;

/// Extracts a value from a record.
pub type Accessor<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;

/// Renders a body cell from the accessor value and the record.
pub type CellFn<T> = Arc<dyn Fn(&CellValue, &T, &CellContext) -> String + Send + Sync>;

/// Renders a header cell from aggregate table state.
pub type HeaderFn = Arc<dyn Fn(&HeaderContext) -> String + Send + Sync>;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// State handed to header renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderContext {
    /// Every row in the select-all scope is selected (and there is at least one).
    pub all_selected: bool,
    /// At least one row in the select-all scope is selected.
    pub some_selected: bool,
    /// Current sort direction of this column, if it is the sort column.
    pub sort: Option<SortDirection>,
}

/// State handed to cell renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellContext {
    /// Whether the row is in the selection set.
    pub selected: bool,
    /// Position of the row within the rendered page.
    pub row_index: usize,
}

/// How a column's header is produced.
#[derive(Clone)]
pub enum Header {
    /// No header content (e.g. the actions column).
    Empty,
    /// Static header text.
    Text(String),
    /// Header computed from table state (e.g. a select-all checkbox).
    Render(HeaderFn),
}

impl fmt::Debug for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Header::Empty => f.write_str("Empty"),
            Header::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Header::Render(_) => f.write_str("Render(..)"),
        }
    }
}

/// Column configuration.
///
/// A column maps a record to a [`CellValue`] through its accessor and turns
/// that value into display text through its cell renderer. Columns without
/// an accessor are display-only: they are never searched or sorted.
///
/// # Examples
///
/// ```
/// use gridkit::{Alignment, Column};
///
/// struct Zone { name: String, cost: i64 }
///
/// let columns: Vec<Column<Zone>> = vec![
///     Column::selection(),
///     Column::new("zoneName", "Zone", |z: &Zone| z.name.clone().into()),
///     Column::new("deliveryCost", "Cost", |z: &Zone| z.cost.into()).align(Alignment::Right),
///     Column::display("actions", |z: &Zone, _| format!("edit {}", z.name)),
/// ];
/// ```
pub struct Column<T> {
    /// Unique id within the table; search keys and sort refer to it.
    pub id: String,
    /// Header content.
    pub header: Header,
    /// Value extractor, `None` for display-only columns.
    pub accessor: Option<Accessor<T>>,
    /// Custom cell renderer; defaults to [`CellValue::display`].
    pub cell: Option<CellFn<T>>,
    /// Whether the column may be sorted.
    pub sortable: bool,
    /// Whether the column may be hidden.
    pub hideable: bool,
    /// Horizontal alignment.
    pub align: Alignment,
    /// Minimum width in terminal columns for text layout.
    pub min_width: u16,
}

impl<T: 'static> Column<T> {
    /// Create a data column with a text header and an accessor.
    ///
    /// Data columns are sortable and hideable unless told otherwise.
    pub fn new(
        id: impl Into<String>,
        header: impl Into<String>,
        accessor: impl Fn(&T) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            header: Header::Text(header.into()),
            accessor: Some(Arc::new(accessor)),
            cell: None,
            sortable: true,
            hideable: true,
            align: Alignment::Left,
            min_width: 0,
        }
    }

    /// Create a display-only column rendered purely from the record.
    pub fn display(
        id: impl Into<String>,
        render: impl Fn(&T, &CellContext) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            header: Header::Empty,
            accessor: None,
            cell: Some(Arc::new(move |_: &CellValue, row: &T, cx: &CellContext| {
                render(row, cx)
            })),
            sortable: false,
            hideable: false,
            align: Alignment::Left,
            min_width: 0,
        }
    }

    /// Row selection checkbox column with a select-all header.
    pub fn selection() -> Self {
        Self {
            id: "select".to_string(),
            header: Header::Render(Arc::new(|cx: &HeaderContext| {
                checkbox(cx.all_selected).to_string()
            })),
            accessor: None,
            cell: Some(Arc::new(|_: &CellValue, _: &T, cx: &CellContext| {
                checkbox(cx.selected).to_string()
            })),
            sortable: false,
            hideable: false,
            align: Alignment::Left,
            min_width: 3,
        }
    }

    /// Replace the header with static text.
    pub fn header(mut self, text: impl Into<String>) -> Self {
        self.header = Header::Text(text.into());
        self
    }

    /// Replace the header with a renderer over table state.
    pub fn header_with(mut self, render: impl Fn(&HeaderContext) -> String + Send + Sync + 'static) -> Self {
        self.header = Header::Render(Arc::new(render));
        self
    }

    /// Use a custom cell renderer.
    pub fn cell_with(
        mut self,
        render: impl Fn(&CellValue, &T, &CellContext) -> String + Send + Sync + 'static,
    ) -> Self {
        self.cell = Some(Arc::new(render));
        self
    }

    /// Enable or disable sorting on this column.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable && self.accessor.is_some();
        self
    }

    /// Enable or disable hiding this column.
    pub fn hideable(mut self, hideable: bool) -> Self {
        self.hideable = hideable;
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set the minimum layout width.
    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }
}

impl<T> Column<T> {
    /// Extract this column's value from a record.
    ///
    /// Display-only columns yield [`CellValue::Null`].
    pub fn value(&self, row: &T) -> CellValue {
        self.accessor
            .as_ref()
            .map(|accessor| accessor(row))
            .unwrap_or(CellValue::Null)
    }

    /// Render the header text.
    pub fn render_header(&self, cx: &HeaderContext) -> String {
        match &self.header {
            Header::Empty => String::new(),
            Header::Text(text) => text.clone(),
            Header::Render(render) => render(cx),
        }
    }

    /// Render a body cell for a record.
    pub fn render_cell(&self, row: &T, cx: &CellContext) -> String {
        let value = self.value(row);
        match &self.cell {
            Some(render) => render(&value, row, cx),
            None => value.display(),
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            accessor: self.accessor.clone(),
            cell: self.cell.clone(),
            sortable: self.sortable,
            hideable: self.hideable,
            align: self.align,
            min_width: self.min_width,
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("has_accessor", &self.accessor.is_some())
            .field("sortable", &self.sortable)
            .field("hideable", &self.hideable)
            .field("align", &self.align)
            .finish()
    }
}

/// An ordered set of columns with unique ids.
pub struct ColumnSet<T> {
    columns: Vec<Column<T>>,
}

impl<T> ColumnSet<T> {
    /// Build a column set, rejecting duplicate ids.
    pub fn new(columns: Vec<Column<T>>) -> Result<Self, TableError> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.id.as_str()) {
                return Err(TableError::DuplicateColumn(column.id.clone()));
            }
        }
        Ok(Self { columns })
    }

    /// Look up a column by id.
    pub fn get(&self, id: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Iterate columns in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Column<T>> {
        self.columns.iter()
    }

    /// Number of columns, hidden ones included.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column ids in display order.
    pub fn ids(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.id.as_str()).collect()
    }
}

impl<T> Clone for ColumnSet<T> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
        }
    }
}

impl<T> fmt::Debug for ColumnSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.columns.iter()).finish()
    }
}
