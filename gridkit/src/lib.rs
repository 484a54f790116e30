//! Headless data tables.
//!
//! `gridkit` provides the pieces an admin screen needs to show a list of
//! records: a declarative column model, a global free-text filter across
//! designated columns, key-based row selection with a select-all toggle,
//! column sorting and hiding, a pager, and a renderer that turns the current
//! page into a header/body/footer grid (plus a monospace text layout of it).
//!
//! Records are held as an immutable snapshot and replaced wholesale; the
//! table never reaches into record fields except through column accessors.

pub mod column;
pub mod error;
pub mod filter;
pub mod pager;
pub mod render;
pub mod row;
pub mod selection;
pub mod sort;
pub mod text;
pub mod value;

mod table;

pub use column::{Alignment, CellContext, Column, ColumnSet, HeaderContext};
pub use error::TableError;
pub use filter::{filter_indices, filter_rows, search_placeholder, FilterGroup};
pub use pager::{Pager, DEFAULT_PAGE_SIZE};
pub use render::{Body, BodyRow, Footer, HeaderCell, RenderedTable, NO_RESULTS};
pub use row::TableRow;
pub use selection::{SelectAllScope, Selection};
pub use sort::{SortDirection, SortState};
pub use table::{DataTable, SearchCallback};
pub use value::{CellValue, Money};
