//! Monospace text layout for rendered tables.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::column::Alignment;
use crate::render::{Body, RenderedTable};

/// Cells wider than this are truncated with an ellipsis.
pub const MAX_CELL_WIDTH: usize = 40;

const GAP: &str = "  ";

/// Truncate `text` to at most `width` display columns.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Pad `text` to `width` display columns.
pub fn pad(text: &str, width: usize, align: Alignment) -> String {
    let fill = width.saturating_sub(text.width());
    match align {
        Alignment::Left => format!("{text}{}", " ".repeat(fill)),
        Alignment::Right => format!("{}{text}", " ".repeat(fill)),
        Alignment::Center => {
            let left = fill / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(fill - left))
        }
    }
}

/// Display width of each column: the widest of header, cells and minimum.
pub fn column_widths(table: &RenderedTable) -> Vec<usize> {
    table
        .header
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let body = table
                .rows()
                .iter()
                .filter_map(|row| row.cells.get(i))
                .map(|c| c.width())
                .max()
                .unwrap_or(0);
            cell.text
                .width()
                .max(body)
                .max(cell.min_width as usize)
                .min(MAX_CELL_WIDTH)
        })
        .collect()
}

fn join_line(cells: impl Iterator<Item = String>) -> String {
    cells.collect::<Vec<_>>().join(GAP).trim_end().to_string()
}

fn control(label: &str, enabled: bool) -> String {
    if enabled {
        format!("[{label}]")
    } else {
        format!("({label})")
    }
}

/// Lay out header, body and footer as lines of text.
///
/// Disabled pager controls are shown in parentheses, enabled ones in brackets.
pub fn layout(table: &RenderedTable) -> String {
    let widths = column_widths(table);
    let total = widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1);
    let mut lines = Vec::new();

    lines.push(join_line(
        table
            .header
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| pad(&truncate(&cell.text, w), w, cell.align)),
    ));
    lines.push("-".repeat(total));

    match &table.body {
        Body::Rows(rows) => {
            for row in rows {
                lines.push(join_line(
                    row.cells
                        .iter()
                        .zip(&widths)
                        .zip(&table.header)
                        .map(|((text, &w), head)| pad(&truncate(text, w), w, head.align)),
                ));
            }
        }
        Body::Placeholder { text, .. } => {
            lines.push(pad(text, total.max(text.width()), Alignment::Center).trim_end().to_string());
        }
    }

    lines.push("-".repeat(total));
    let footer = &table.footer;
    let page = if footer.page_count == 0 {
        "Page 0 of 0".to_string()
    } else {
        format!("Page {} of {}", footer.page_index + 1, footer.page_count)
    };
    lines.push(format!(
        "{}  {}  {} {}",
        footer.summary(),
        page,
        control("Previous", footer.can_previous),
        control("Next", footer.can_next)
    ));

    lines.join("\n")
}
