//! `veggie list <page>`.

use gridkit::TableRow;
use log::{debug, info};
use serde::Serialize;
use veggie_lib::tables::{self, TablePage};
use veggie_lib::PageKind;

use super::Context;
use crate::cli::{ListArgs, OutputFormat};
use crate::error::CliError;
use crate::output;

pub async fn run(cx: &Context<'_>, args: &ListArgs) -> Result<String, CliError> {
    let store = cx.store;
    let query = args.search.as_deref().unwrap_or("").trim();
    info!("list {} query={query:?}", args.page);

    match args.page {
        PageKind::Orders => show(tables::orders()?, store.orders().await, cx, args),
        PageKind::Notifications => show(tables::notifications()?, store.notifications().await, cx, args),
        PageKind::Complaints => show(tables::complaints()?, store.complaints().await, cx, args),
        PageKind::Bags => show(tables::bags()?, store.bags().await, cx, args),
        // Zones, employees and vehicles re-fetch from the store on search.
        PageKind::Zones => {
            let records = if query.is_empty() {
                store.zones().await
            } else {
                store.search_zones(query).await
            };
            show(tables::zones()?, records, cx, args)
        }
        PageKind::Employees => {
            let records = if query.is_empty() {
                store.employees().await
            } else {
                store.search_employees(query).await
            };
            show(tables::employees()?, records, cx, args)
        }
        PageKind::Vehicles => {
            let records = if query.is_empty() {
                store.vehicles().await
            } else {
                store.search_vehicles(query).await
            };
            show(tables::vehicles()?, records, cx, args)
        }
    }
}

fn show<T>(page: TablePage<T>, records: Vec<T>, cx: &Context<'_>, args: &ListArgs) -> Result<String, CliError>
where
    T: TableRow + Serialize + 'static,
{
    let heading = page.heading(records.len());
    let description = page.description;

    let mut table = page
        .into_table(records)
        .with_page_size(args.page_size.unwrap_or(cx.prefs.page_size))?
        .with_select_all_scope(args.scope.unwrap_or(cx.prefs.select_all_scope))
        .on_search(|q| debug!("search changed to {q:?}"));

    if let Some(query) = &args.search {
        table.set_query(query.as_str());
    }

    if let Some((column, direction)) = &args.sort {
        table.sort_by(column, *direction)?;
    }
    for column in &args.hide {
        table.hide_column(column)?;
    }
    for key in &args.select {
        if table.toggle_row(key).is_none() {
            return Err(CliError::UnknownRow(key.clone()));
        }
    }
    if args.select_all {
        table.toggle_all();
    }
    for _ in 1..args.page_number {
        if !table.next_page() {
            break;
        }
    }

    match args.format {
        OutputFormat::Text => Ok(output::table_text(&heading, description, &table)),
        OutputFormat::Json => output::table_json(&heading, &table),
    }
}
