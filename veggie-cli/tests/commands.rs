use clap::Parser;
use serde_json::Value;
use veggie_cli::cli::{Cli, Command, OutputFormat};
use veggie_cli::commands::{self, Context};
use veggie_cli::settings::{MemoryBackend, Preferences, SettingsProvider};
use veggie_cli::CliError;
use veggie_lib::{FormError, MemoryStore, StoreError};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("veggie").chain(args.iter().copied())).unwrap()
}

async fn run_with(settings: &SettingsProvider, args: &[&str]) -> Result<String, CliError> {
    let cli = parse(args);
    let store = MemoryStore::seeded();
    let prefs = Preferences::load(settings).await.unwrap();
    let cx = Context {
        store: &store,
        settings,
        prefs,
    };
    commands::run(&cx, &cli.command).await
}

async fn run(args: &[&str]) -> Result<String, CliError> {
    run_with(&SettingsProvider::new(MemoryBackend::new()), args).await
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_list_flags() {
    let cli = parse(&[
        "list", "zones", "--search", "city a", "--sort", "deliveryCost:desc", "--hide", "city",
        "--select", "1", "--select", "2", "--format", "json",
    ]);
    let Command::List(args) = cli.command else {
        panic!("expected list");
    };
    assert_eq!(args.page, veggie_lib::PageKind::Zones);
    assert_eq!(args.search.as_deref(), Some("city a"));
    assert_eq!(
        args.sort,
        Some(("deliveryCost".to_string(), gridkit::SortDirection::Descending))
    );
    assert_eq!(args.select, vec!["1", "2"]);
    assert_eq!(args.format, OutputFormat::Json);
}

#[test]
fn test_parse_rejects_unknown_page_and_bad_sort() {
    assert!(Cli::try_parse_from(["veggie", "list", "trucks"]).is_err());
    assert!(Cli::try_parse_from(["veggie", "list", "zones", "--sort", "city:sideways"]).is_err());
}

#[test]
fn test_parse_order_requires_edit_for_move() {
    assert!(Cli::try_parse_from(["veggie", "order", "101", "--to", "2023-07-19"]).is_err());
    assert!(Cli::try_parse_from(["veggie", "order", "101", "--pause", "--play"]).is_err());
    let cli = parse(&["order", "101", "--edit", "2023-07-18", "--to", "2023-07-19"]);
    let Command::Order(args) = cli.command else {
        panic!("expected order");
    };
    assert_eq!(args.allowed_days, vec!["MONDAY", "WEDNESDAY"]);
}

#[test]
fn test_global_log_level() {
    let cli = parse(&["settings", "get", "--log-level", "debug"]);
    assert_eq!(cli.log_level, Some(log::LevelFilter::Debug));
}

// ============================================================================
// List
// ============================================================================

#[tokio::test]
async fn test_list_zones_search_refetches() {
    let out = run(&["list", "zones", "--search", "city b"]).await.unwrap();
    assert!(out.starts_with("Zones (2)"));
    assert!(out.contains("East Zone"));
    assert!(out.contains("West Zone"));
    assert!(!out.contains("North Zone"));
    assert!(out.contains("0 of 2 row(s) selected."));
}

#[tokio::test]
async fn test_list_pages_and_json() {
    let out = run(&[
        "list", "zones", "--page-size", "2", "--page-number", "2", "--format", "json",
    ])
    .await
    .unwrap();
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["page"], 2);
    assert_eq!(json["page_count"], 3);
    assert_eq!(json["rows"][0]["zoneName"], "East Zone");
    assert_eq!(json["rows"][1]["zoneName"], "West Zone");
}

#[tokio::test]
async fn test_list_sort_and_select() {
    let out = run(&[
        "list", "zones", "--sort", "zoneName:desc", "--select", "4", "--format", "json",
    ])
    .await
    .unwrap();
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["rows"][0]["zoneName"], "West Zone");
    assert_eq!(json["selected"], serde_json::json!(["4"]));
    assert_eq!(json["summary"], "1 of 5 row(s) selected.");
}

#[tokio::test]
async fn test_list_select_all_and_unknown_row() {
    let out = run(&["list", "employees", "--select-all"]).await.unwrap();
    assert!(out.contains("6 of 6 row(s) selected."));

    let err = run(&["list", "employees", "--select", "9999"]).await.unwrap_err();
    assert!(matches!(err, CliError::UnknownRow(key) if key == "9999"));
}

#[tokio::test]
async fn test_list_unknown_sort_column() {
    let err = run(&["list", "zones", "--sort", "colour"]).await.unwrap_err();
    assert!(matches!(err, CliError::Table(_)));
}

// ============================================================================
// Orders and deliveries
// ============================================================================

#[tokio::test]
async fn test_order_move_to_delivery_day() {
    let out = run(&[
        "order", "101", "--edit", "2023-07-18", "--to", "2023-07-19", "--today", "2023-07-01",
    ])
    .await
    .unwrap();
    assert!(out.contains("Saved delivery 2023-07-18 -> 2023-07-19"));
    assert!(out.contains("charges ₹0"));
}

#[tokio::test]
async fn test_order_move_off_day_carries_extra_charge() {
    let out = run(&[
        "order", "101", "--edit", "2023-07-18", "--to", "2023-07-20", "--today", "2023-07-01",
    ])
    .await
    .unwrap();
    assert!(out.contains("charges ₹200"));
}

#[tokio::test]
async fn test_order_rejects_past_date() {
    let err = run(&[
        "order", "101", "--edit", "2023-07-18", "--to", "2023-07-05", "--today", "2023-07-10",
    ])
    .await
    .unwrap_err();
    assert!(matches!(err, CliError::Form(FormError::PastDate(_))));
}

#[tokio::test]
async fn test_order_move_onto_taken_date_is_refused() {
    let err = run(&[
        "order", "101", "--edit", "2023-07-18", "--to", "2023-07-23", "--today", "2023-07-01",
    ])
    .await
    .unwrap_err();
    assert!(matches!(err, CliError::Form(FormError::DateTaken(_))));
}

#[tokio::test]
async fn test_edit_delivery_rejects_oversized_item() {
    let err = run(&[
        "edit-delivery", "101", "--add-item", "Pumpkin=1=4294967295", "--city", "City A",
        "--route", "Route 1", "--slot", "9:00 AM - 11:00 AM",
    ])
    .await
    .unwrap_err();
    assert!(matches!(err, CliError::Form(FormError::OutOfRange { .. })));
}

#[tokio::test]
async fn test_order_play_and_select_all() {
    let out = run(&["order", "101", "--play", "--select-all", "--format", "json"])
        .await
        .unwrap();
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["all_selected"], true);
    assert_eq!(json["selected"].as_array().unwrap().len(), 4);
    assert_eq!(json["order"]["subscription"], "Playing");
}

#[tokio::test]
async fn test_unknown_order() {
    let err = run(&["order", "999"]).await.unwrap_err();
    assert!(matches!(err, CliError::Store(StoreError::NotFound { .. })));
}

#[tokio::test]
async fn test_edit_delivery_saves_destination() {
    let out = run(&[
        "edit-delivery", "101", "--city", "City A", "--route", "Route 1", "--slot",
        "9:00 AM - 11:00 AM",
    ])
    .await
    .unwrap();
    assert!(out.contains("Destination: City A, Route 1 at 9:00 AM - 11:00 AM"));
    assert!(out.contains("Total: ₹2265"));
    assert!(out.contains("Weight: 8300 / 10000 g"));
}

#[tokio::test]
async fn test_edit_delivery_requires_destination() {
    let err = run(&["edit-delivery", "101"]).await.unwrap_err();
    let CliError::Form(err) = err else {
        panic!("expected form error");
    };
    let fields: Vec<_> = err.field_errors().iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["city", "route", "deliveryTimeSlot"]);
}

#[tokio::test]
async fn test_edit_delivery_route_needs_city_option() {
    let err = run(&["edit-delivery", "101", "--city", "City A", "--route", "Route 9"])
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::Form(FormError::UnknownOption { .. })));
}

// ============================================================================
// Complaints
// ============================================================================

#[tokio::test]
async fn test_complaint_find_customers() {
    let out = run(&["complaint", "--find", "singh"]).await.unwrap();
    assert!(out.contains("Deepak Singh"));
    assert!(!out.contains("Alice"));
}

#[tokio::test]
async fn test_complaint_filed_with_next_id() {
    let out = run(&[
        "complaint", "--customer", "1", "--date", "11/JUN/2024", "--type", "delay",
        "--description", "Arrived late",
    ])
    .await
    .unwrap();
    assert!(out.contains("Complaint #3 filed"));
    assert!(out.contains("Customer: Alice Johnson (1)"));
    assert!(out.contains("Type: Delay"));
}

#[tokio::test]
async fn test_complaint_requires_description() {
    let err = run(&["complaint", "--customer", "2", "--type", "Delay"])
        .await
        .unwrap_err();
    let CliError::Form(err) = err else {
        panic!("expected form error");
    };
    assert_eq!(err.field_errors()[0].field, "description");
}

// ============================================================================
// Settings
// ============================================================================

#[tokio::test]
async fn test_settings_set_changes_list_page_size() {
    let settings = SettingsProvider::new(MemoryBackend::new());
    let out = run_with(&settings, &["settings", "set", "table.page_size", "2"])
        .await
        .unwrap();
    assert_eq!(out, "table.page_size = 2");

    let out = run_with(&settings, &["list", "zones"]).await.unwrap();
    assert!(out.contains("Page 1 of 3"));

    let out = run_with(&settings, &["settings", "reset", "table.page_size"])
        .await
        .unwrap();
    assert_eq!(out, "table.page_size = 10");
}

#[tokio::test]
async fn test_settings_unknown_key() {
    let err = run(&["settings", "get", "table.colour"]).await.unwrap_err();
    assert!(matches!(err, CliError::Settings(_)));
}
