//! Text and JSON rendering of tables and forms.

use std::io::IsTerminal;

use gridkit::{DataTable, TableRow, text};
use serde::Serialize;

use crate::error::CliError;

/// Width of the attached terminal, if stdout is one.
pub fn terminal_width() -> Option<usize> {
    if !std::io::stdout().is_terminal() {
        return None;
    }
    crossterm::terminal::size().ok().map(|(cols, _)| usize::from(cols))
}

/// Truncate every line of `text` to `width` columns.
pub fn clip(output: &str, width: usize) -> String {
    output
        .lines()
        .map(|line| text::truncate(line, width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Heading, description, search hint, filters and the rendered page.
pub fn table_text<T: TableRow>(heading: &str, description: &str, table: &DataTable<T>) -> String {
    let mut lines = vec![heading.to_string()];
    if !description.is_empty() {
        lines.push(description.to_string());
    }
    let query = table.query();
    if query.is_empty() {
        lines.push(format!("[{}]", table.search_placeholder()));
    } else {
        lines.push(format!("[{query}]"));
    }
    for group in table.filter_groups() {
        lines.push(format!("{}: {}", group.label, group.sub_options.join(", ")));
    }
    lines.push(String::new());
    lines.push(text::layout(&table.render()));
    lines.join("\n")
}

#[derive(Serialize)]
struct TablePayload<'a, T> {
    heading: &'a str,
    query: &'a str,
    page: usize,
    page_count: usize,
    page_size: usize,
    filtered: usize,
    selected: Vec<String>,
    summary: String,
    rows: Vec<&'a T>,
}

/// The current page and selection as pretty JSON.
pub fn table_json<T: TableRow + Serialize>(heading: &str, table: &DataTable<T>) -> Result<String, CliError> {
    let footer = table.footer();
    let payload = TablePayload {
        heading,
        query: table.query(),
        page: footer.page_index + 1,
        page_count: footer.page_count,
        page_size: table.pager().page_size(),
        filtered: footer.filtered,
        selected: table.selection().selected(),
        summary: footer.summary(),
        rows: table.page_rows(),
    };
    Ok(serde_json::to_string_pretty(&payload)?)
}

pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_truncates_each_line() {
        let clipped = clip("abcdefgh\nxy", 5);
        let lines: Vec<_> = clipped.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "xy");
        assert!(lines[0].chars().count() <= 5);
    }

    #[test]
    fn test_zone_page_text() {
        let page = veggie_lib::tables::zones().unwrap();
        let heading = page.heading(5);
        let description = page.description;
        let table = page.into_table(veggie_lib::fixtures::zones());
        let out = table_text(&heading, description, &table);
        assert!(out.starts_with("Zones (5)"));
        assert!(out.contains("North Zone"));
        assert!(out.contains("0 of 5 row(s) selected."));
    }
}
