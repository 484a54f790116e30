//! The record side of the row/column model.

/// Trait for records that can be displayed as rows in a [`DataTable`](crate::DataTable).
///
/// The key is used for stable selection across filtering, sorting and
/// wholesale record replacement; it must be unique within a record set.
///
/// # Example
///
/// ```
/// use gridkit::TableRow;
///
/// #[derive(Clone)]
/// struct Zone {
///     name: String,
/// }
///
/// impl TableRow for Zone {
///     fn row_key(&self) -> String {
///         self.name.clone()
///     }
/// }
/// ```
pub trait TableRow {
    /// Unique identifier for this row.
    fn row_key(&self) -> String;
}

/// Checkbox glyph shared by row and header renderers.
pub fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}
