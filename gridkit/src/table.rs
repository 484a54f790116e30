//! The `DataTable` facade tying columns, filter, selection, sort and pager together.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use log::{debug, warn};

use crate::column::{Column, ColumnSet};
use crate::error::TableError;
use crate::filter::{filter_indices, search_placeholder, FilterGroup};
use crate::pager::Pager;
use crate::render::{render, Footer, RenderedTable, SelectAllState};
use crate::row::TableRow;
use crate::selection::{selection_summary, SelectAllScope, Selection};
use crate::sort::{SortDirection, SortState};

/// Callback invoked with the raw query whenever the search text changes.
pub type SearchCallback = Box<dyn FnMut(&str)>;

/// A headless data table over an immutable record snapshot.
///
/// State is the tuple (query, selection, sort, page, hidden columns). Every
/// operation is synchronous and the visible rows are re-derived on demand,
/// so nothing can go stale between calls.
///
/// # Example
///
/// ```
/// use gridkit::{Column, ColumnSet, DataTable, TableRow};
///
/// #[derive(Clone)]
/// struct Person { name: &'static str }
///
/// impl TableRow for Person {
///     fn row_key(&self) -> String { self.name.to_string() }
/// }
///
/// let columns = ColumnSet::new(vec![
///     Column::selection(),
///     Column::new("name", "Name", |p: &Person| p.name.into()),
/// ]).unwrap();
///
/// let mut table = DataTable::new(columns, vec![Person { name: "Alice" }, Person { name: "Bob" }])
///     .with_search_keys(["name"]);
///
/// table.toggle_row("Alice");
/// table.set_query("b");
/// assert_eq!(table.filtered_rows().len(), 1);
/// assert_eq!(table.selection_summary(), "0 of 1 row(s) selected.");
/// assert!(table.selection().is_selected("Alice"));
/// ```
pub struct DataTable<T> {
    columns: ColumnSet<T>,
    records: Arc<[T]>,
    search_keys: Vec<String>,
    filter_groups: Vec<FilterGroup>,
    query: String,
    selection: Selection,
    pager: Pager,
    sort: Option<SortState>,
    hidden: HashSet<String>,
    select_all_scope: SelectAllScope,
    on_search: Option<SearchCallback>,
}

impl<T: TableRow> DataTable<T> {
    /// Create a table over a record snapshot with no search keys.
    pub fn new(columns: ColumnSet<T>, records: impl Into<Arc<[T]>>) -> Self {
        Self {
            columns,
            records: records.into(),
            search_keys: Vec::new(),
            filter_groups: Vec::new(),
            query: String::new(),
            selection: Selection::new(),
            pager: Pager::default(),
            sort: None,
            hidden: HashSet::new(),
            select_all_scope: SelectAllScope::default(),
            on_search: None,
        }
    }

    /// Set the column ids the global filter searches.
    pub fn with_search_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Attach toolbar filter groups.
    pub fn with_filter_groups(mut self, groups: Vec<FilterGroup>) -> Self {
        self.filter_groups = groups;
        self
    }

    /// Set which rows "select all" applies to.
    pub fn with_select_all_scope(mut self, scope: SelectAllScope) -> Self {
        self.select_all_scope = scope;
        self
    }

    /// Register a callback for search text changes.
    pub fn on_search(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_search = Some(Box::new(callback));
        self
    }

    /// Set the rows per page.
    pub fn with_page_size(mut self, page_size: usize) -> Result<Self, TableError> {
        self.pager.set_page_size(page_size)?;
        Ok(self)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn columns(&self) -> &ColumnSet<T> {
        &self.columns
    }

    /// The full, unfiltered record snapshot.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn search_keys(&self) -> &[String] {
        &self.search_keys
    }

    pub fn filter_groups(&self) -> &[FilterGroup] {
        &self.filter_groups
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    pub fn select_all_scope(&self) -> SelectAllScope {
        self.select_all_scope
    }

    /// Search box placeholder, e.g. `Search by zoneName, city`.
    pub fn search_placeholder(&self) -> String {
        search_placeholder(&self.search_keys)
    }

    // -------------------------------------------------------------------------
    // Derived row sets
    // -------------------------------------------------------------------------

    /// Indices of filtered rows in display (sorted) order.
    fn visible_indices(&self) -> Vec<usize> {
        let mut indices = filter_indices(&self.records, &self.columns, &self.query, &self.search_keys);
        if let Some(sort) = &self.sort {
            sort.apply(&self.columns, &self.records, &mut indices);
        }
        indices
    }

    /// Rows passing the filter, in display order.
    pub fn filtered_rows(&self) -> Vec<&T> {
        self.visible_indices()
            .into_iter()
            .map(|i| &self.records[i])
            .collect()
    }

    /// Rows on the current page.
    pub fn page_rows(&self) -> Vec<&T> {
        let visible = self.visible_indices();
        let range = self.pager.page_range(visible.len());
        visible[range].iter().map(|&i| &self.records[i]).collect()
    }

    /// Number of pages for the current filter.
    pub fn page_count(&self) -> usize {
        self.pager.page_count(self.visible_indices().len())
    }

    /// Selected records from the full snapshot, filtered or not.
    pub fn selected_rows(&self) -> Vec<&T> {
        self.records
            .iter()
            .filter(|r| self.selection.is_selected(&r.row_key()))
            .collect()
    }

    /// Selected rows among the filtered rows.
    pub fn selected_count(&self) -> usize {
        self.filtered_rows()
            .iter()
            .filter(|r| self.selection.is_selected(&r.row_key()))
            .count()
    }

    /// `"X of Y row(s) selected."` over the filtered rows.
    pub fn selection_summary(&self) -> String {
        selection_summary(self.selected_count(), self.filtered_rows().len())
    }

    /// Visible columns in display order.
    pub fn visible_columns(&self) -> Vec<&Column<T>> {
        self.columns
            .iter()
            .filter(|c| !self.hidden.contains(&c.id))
            .collect()
    }

    fn select_all_keys(&self) -> Vec<String> {
        match self.select_all_scope {
            SelectAllScope::AllRows => self.records.iter().map(TableRow::row_key).collect(),
            SelectAllScope::FilteredRows => self
                .filtered_rows()
                .into_iter()
                .map(TableRow::row_key)
                .collect(),
        }
    }

    /// Aggregate flags for the select-all header checkbox.
    pub fn select_all_state(&self) -> SelectAllState {
        let keys = self.select_all_keys();
        SelectAllState {
            all_selected: self.selection.all_selected(keys.iter().map(String::as_str)),
            some_selected: self.selection.count_in(keys.iter().map(String::as_str)) > 0,
        }
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Change the search text.
    ///
    /// Returns to the first page and notifies the search callback with the
    /// raw query. Selection is untouched.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.pager.reset();
        debug!("table query set to {:?}", self.query);
        if let Some(callback) = self.on_search.as_mut() {
            callback(&self.query);
        }
    }

    /// Flip selection of the row with `key`.
    ///
    /// Returns the new state, or `None` if no loaded record has that key.
    pub fn toggle_row(&mut self, key: &str) -> Option<bool> {
        if !self.records.iter().any(|r| r.row_key() == key) {
            warn!("toggle_row: no row with key {key:?}");
            return None;
        }
        Some(self.selection.toggle(key))
    }

    /// Select-all toggle over the configured scope.
    ///
    /// Returns `true` if the scope ended up selected.
    pub fn toggle_all(&mut self) -> bool {
        let keys = self.select_all_keys();
        self.selection.toggle_all(&keys)
    }

    /// Advance one page; no-op on the last page.
    pub fn next_page(&mut self) -> bool {
        let total = self.visible_indices().len();
        self.pager.next_page(total)
    }

    /// Go back one page; no-op on the first page.
    pub fn previous_page(&mut self) -> bool {
        self.pager.previous_page()
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), TableError> {
        self.pager.set_page_size(page_size)?;
        let total = self.visible_indices().len();
        self.pager.clamp(total);
        Ok(())
    }

    /// Sort by a sortable column.
    pub fn sort_by(&mut self, column_id: &str, direction: SortDirection) -> Result<(), TableError> {
        self.sort = Some(SortState::new(&self.columns, column_id, direction)?);
        debug!("table sorted by {column_id} {direction:?}");
        Ok(())
    }

    /// Header activation: none → ascending → descending → none.
    pub fn cycle_sort(&mut self, column_id: &str) -> Result<Option<SortDirection>, TableError> {
        let next = SortState::cycle(self.sort.as_ref(), column_id);
        match next {
            Some(direction) => self.sort_by(column_id, direction)?,
            None => self.sort = None,
        }
        Ok(next)
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Hide a hideable column. Hidden columns are still searched.
    pub fn hide_column(&mut self, column_id: &str) -> Result<(), TableError> {
        let column = self
            .columns
            .get(column_id)
            .ok_or_else(|| TableError::UnknownColumn(column_id.to_string()))?;
        if !column.hideable {
            return Err(TableError::NotHideable(column_id.to_string()));
        }
        self.hidden.insert(column_id.to_string());
        Ok(())
    }

    pub fn show_column(&mut self, column_id: &str) -> Result<(), TableError> {
        if self.columns.get(column_id).is_none() {
            return Err(TableError::UnknownColumn(column_id.to_string()));
        }
        self.hidden.remove(column_id);
        Ok(())
    }

    /// Replace the record snapshot wholesale.
    ///
    /// Selection keys without a matching record are dropped and the page
    /// index is pulled back inside the new page range.
    pub fn replace_records(&mut self, records: impl Into<Arc<[T]>>) {
        self.records = records.into();
        let live: HashSet<String> = self.records.iter().map(TableRow::row_key).collect();
        let dropped = self.selection.retain(&live);
        if !dropped.is_empty() {
            debug!("dropped {} stale selections", dropped.len());
        }
        let total = self.visible_indices().len();
        self.pager.clamp(total);
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Footer state for the current filter and page.
    pub fn footer(&self) -> Footer {
        let filtered = self.visible_indices().len();
        Footer {
            selected: self.selected_count(),
            filtered,
            page_index: self.pager.page_index(),
            page_count: self.pager.page_count(filtered),
            can_previous: self.pager.can_previous(),
            can_next: self.pager.can_next(filtered),
        }
    }

    /// Render the current page.
    pub fn render(&self) -> RenderedTable {
        render(
            &self.visible_columns(),
            &self.page_rows(),
            &self.selection,
            self.select_all_state(),
            self.sort.as_ref(),
            self.footer(),
        )
    }
}

impl<T> fmt::Debug for DataTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("columns", &self.columns)
            .field("records", &self.records.len())
            .field("search_keys", &self.search_keys)
            .field("query", &self.query)
            .field("selection", &self.selection)
            .field("pager", &self.pager)
            .field("sort", &self.sort)
            .field("hidden", &self.hidden)
            .finish()
    }
}
