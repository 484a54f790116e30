//! Global free-text filter over designated search columns.

use crate::column::ColumnSet;

/// A named group of filter options shown in the table toolbar.
///
/// Groups are carried for display only; choosing a sub-option does not
/// change which rows are visible.
///
/// # Example
///
/// ```
/// use gridkit::FilterGroup;
///
/// let role = FilterGroup::new("Role", ["Manager", "Technician"]);
/// assert_eq!(role.sub_options.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterGroup {
    /// Group label, e.g. `Role`.
    pub label: String,
    /// Selectable options within the group.
    pub sub_options: Vec<String>,
}

impl FilterGroup {
    /// Creates a filter group.
    pub fn new<I, S>(label: impl Into<String>, sub_options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            sub_options: sub_options.into_iter().map(Into::into).collect(),
        }
    }
}

/// Placeholder text for the search box.
pub fn search_placeholder(search_keys: &[String]) -> String {
    if search_keys.is_empty() {
        "Search by defaultSearchKey".to_string()
    } else {
        format!("Search by {}", search_keys.join(", "))
    }
}

/// Returns `true` if `row` matches the already lower-cased `needle`.
///
/// A row matches when any search key's value, as text, contains the needle
/// case-insensitively. Keys that name no column never match.
fn row_matches<T>(row: &T, columns: &ColumnSet<T>, needle: &str, search_keys: &[String]) -> bool {
    search_keys.iter().any(|key| {
        columns
            .get(key)
            .is_some_and(|column| column.value(row).search_text().to_lowercase().contains(needle))
    })
}

/// Indices of records visible under `query`, in input order.
///
/// An empty query or an empty key list keeps every record.
pub fn filter_indices<T>(
    records: &[T],
    columns: &ColumnSet<T>,
    query: &str,
    search_keys: &[String],
) -> Vec<usize> {
    if search_keys.is_empty() || query.is_empty() {
        return (0..records.len()).collect();
    }
    let needle = query.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, row)| row_matches(*row, columns, &needle, search_keys))
        .map(|(i, _)| i)
        .collect()
}

/// Records visible under `query`, in input order.
///
/// # Example
///
/// ```
/// use gridkit::{filter_rows, Column, ColumnSet};
///
/// struct Person { name: &'static str }
///
/// let columns = ColumnSet::new(vec![
///     Column::new("name", "Name", |p: &Person| p.name.into()),
/// ]).unwrap();
/// let people = [Person { name: "Alice" }, Person { name: "Bob" }];
///
/// let visible = filter_rows(&people, &columns, "b", &["name".to_string()]);
/// assert_eq!(visible.len(), 1);
/// assert_eq!(visible[0].name, "Bob");
/// ```
pub fn filter_rows<'a, T>(
    records: &'a [T],
    columns: &ColumnSet<T>,
    query: &str,
    search_keys: &[String],
) -> Vec<&'a T> {
    filter_indices(records, columns, query, search_keys)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Column;

    struct Zone {
        name: &'static str,
        city: Option<&'static str>,
        cost: i64,
    }

    fn columns() -> ColumnSet<Zone> {
        ColumnSet::new(vec![
            Column::new("zoneName", "Zone", |z: &Zone| z.name.into()),
            Column::new("city", "City", |z: &Zone| z.city.into()),
            Column::new("deliveryCost", "Cost", |z: &Zone| z.cost.into()),
        ])
        .unwrap()
    }

    fn zones() -> Vec<Zone> {
        vec![
            Zone { name: "North", city: Some("Pune"), cost: 40 },
            Zone { name: "South", city: None, cost: 250 },
            Zone { name: "East", city: Some("Mumbai"), cost: 25 },
        ]
    }

    fn keys(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_any_key_matches() {
        let zones = zones();
        let hits = filter_indices(&zones, &columns(), "mum", &keys(&["zoneName", "city"]));
        assert_eq!(hits, vec![2]);
    }

    #[test]
    fn test_numeric_values_are_searched_as_text() {
        let zones = zones();
        let hits = filter_indices(&zones, &columns(), "25", &keys(&["deliveryCost"]));
        assert_eq!(hits, vec![1, 2]);
    }

    #[test]
    fn test_missing_value_never_matches_and_never_panics() {
        let zones = zones();
        let hits = filter_indices(&zones, &columns(), "south", &keys(&["city"]));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let zones = zones();
        let hits = filter_indices(&zones, &columns(), "north", &keys(&["nope", "zoneName"]));
        assert_eq!(hits, vec![0]);
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(search_placeholder(&[]), "Search by defaultSearchKey");
        assert_eq!(
            search_placeholder(&keys(&["firstName", "phone"])),
            "Search by firstName, phone"
        );
    }
}
