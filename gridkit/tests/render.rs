use gridkit::text::layout;
use gridkit::{Alignment, Body, Column, ColumnSet, DataTable, Money, NO_RESULTS, TableRow};

#[derive(Debug, Clone)]
struct Bag {
    name: &'static str,
    price: i64,
}

impl TableRow for Bag {
    fn row_key(&self) -> String {
        self.name.to_string()
    }
}

fn bag_table(bags: Vec<Bag>) -> DataTable<Bag> {
    let columns = ColumnSet::new(vec![
        Column::selection(),
        Column::new("bagName", "Bag", |b: &Bag| b.name.into()),
        Column::new("totalPrice", "Price", |b: &Bag| Money::from_int(b.price).into())
            .align(Alignment::Right),
        Column::display("actions", |_: &Bag, cx| {
            if cx.selected { "selected".into() } else { String::new() }
        }),
    ])
    .unwrap();
    DataTable::new(columns, bags).with_search_keys(["bagName", "totalPrice"])
}

fn bags() -> Vec<Bag> {
    vec![
        Bag { name: "Regular Veggie Bag", price: 500 },
        Bag { name: "Mini Veggie Bag", price: 300 },
        Bag { name: "Veggie Bag", price: 300 },
    ]
}

// ============================================================================
// Grid structure
// ============================================================================

#[test]
fn test_one_header_cell_per_column() {
    let rendered = bag_table(bags()).render();
    let ids: Vec<_> = rendered.header.iter().map(|h| h.column_id.as_str()).collect();
    assert_eq!(ids, vec!["select", "bagName", "totalPrice", "actions"]);
    assert_eq!(rendered.header[0].text, "[ ]");
    assert_eq!(rendered.header[3].text, "");
}

#[test]
fn test_cells_use_column_renderers() {
    let mut table = bag_table(bags());
    table.toggle_row("Mini Veggie Bag");
    let rendered = table.render();
    let rows = rendered.rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1].cells, vec!["[x]", "Mini Veggie Bag", "₹300", "selected"]);
    assert!(rows[1].selected);
    assert_eq!(rows[0].cells[0], "[ ]");
}

#[test]
fn test_select_all_header_checked_when_all_selected() {
    let mut table = bag_table(bags());
    table.toggle_all();
    assert_eq!(table.render().header[0].text, "[x]");
}

#[test]
fn test_sort_indicator_in_header() {
    let mut table = bag_table(bags());
    table.cycle_sort("totalPrice").unwrap();
    let rendered = table.render();
    assert_eq!(rendered.header[2].text, "Price ▲");
    assert_eq!(rendered.rows()[0].cells[2], "₹300");
}

#[test]
fn test_money_is_searched_by_amount() {
    let mut table = bag_table(bags());
    table.set_query("300");
    assert_eq!(table.render().rows().len(), 2);
}

// ============================================================================
// Empty states
// ============================================================================

#[test]
fn test_empty_record_set_renders_placeholder() {
    let table = bag_table(Vec::new());
    let rendered = table.render();
    assert_eq!(
        rendered.body,
        Body::Placeholder {
            text: NO_RESULTS.to_string(),
            colspan: 4
        }
    );
    assert_eq!(rendered.footer.summary(), "0 of 0 row(s) selected.");
    assert!(!rendered.footer.can_next);
    assert!(!rendered.footer.can_previous);
}

#[test]
fn test_filter_excluding_everything_renders_placeholder() {
    let mut table = bag_table(bags());
    table.set_query("broccoli");
    assert!(table.render().is_placeholder());
}

#[test]
fn test_placeholder_spans_visible_columns() {
    let mut table = bag_table(Vec::new());
    table.hide_column("totalPrice").unwrap();
    match table.render().body {
        Body::Placeholder { colspan, .. } => assert_eq!(colspan, 3),
        Body::Rows(_) => panic!("expected placeholder"),
    }
}

// ============================================================================
// Text layout
// ============================================================================

#[test]
fn test_layout_aligns_columns() {
    let text = layout(&bag_table(bags()).render());
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].starts_with("[ ]  Bag"));
    assert!(lines[2].contains("Regular Veggie Bag   ₹500"));
    assert!(lines[4].contains("Veggie Bag           ₹300"));
    assert_eq!(
        lines.last().copied(),
        Some("0 of 3 row(s) selected.  Page 1 of 1  (Previous) (Next)")
    );
}

#[test]
fn test_layout_shows_no_results() {
    let text = layout(&bag_table(Vec::new()).render());
    assert!(text.contains(NO_RESULTS));
    assert!(text.ends_with("0 of 0 row(s) selected.  Page 0 of 0  (Previous) (Next)"));
}
