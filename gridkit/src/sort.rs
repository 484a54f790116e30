//! Column sort state.

use crate::column::ColumnSet;
use crate::error::TableError;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Header indicator glyph.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// The active sort column and direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub column_id: String,
    pub direction: SortDirection,
}

impl SortState {
    /// Validate that `column_id` exists and is sortable.
    pub fn new<T>(
        columns: &ColumnSet<T>,
        column_id: &str,
        direction: SortDirection,
    ) -> Result<Self, TableError> {
        let column = columns
            .get(column_id)
            .ok_or_else(|| TableError::UnknownColumn(column_id.to_string()))?;
        if !column.sortable {
            return Err(TableError::NotSortable(column_id.to_string()));
        }
        Ok(Self {
            column_id: column_id.to_string(),
            direction,
        })
    }

    /// Next state when a header is activated: none → asc → desc → none.
    pub fn cycle(current: Option<&SortState>, column_id: &str) -> Option<SortDirection> {
        match current {
            Some(state) if state.column_id == column_id => match state.direction {
                SortDirection::Ascending => Some(SortDirection::Descending),
                SortDirection::Descending => None,
            },
            _ => Some(SortDirection::Ascending),
        }
    }

    /// Stable in-place sort of row indices into `records`.
    pub fn apply<T>(&self, columns: &ColumnSet<T>, records: &[T], indices: &mut [usize]) {
        let Some(column) = columns.get(&self.column_id) else {
            return;
        };
        indices.sort_by(|&a, &b| {
            let ord = column.value(&records[a]).sort_cmp(&column.value(&records[b]));
            match self.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }
}
