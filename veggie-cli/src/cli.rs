//! Command-line surface.

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use gridkit::{SelectAllScope, SortDirection};
use log::LevelFilter;
use veggie_lib::PageKind;
use veggie_lib::model::{DeliveryStatus, Status};

use crate::error::CliError;

#[derive(Debug, Parser)]
#[command(name = "veggie", version, about = "Back-office tables and forms for the vegetable subscription service")]
pub struct Cli {
    /// Log level for this run (off, error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<LevelFilter>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List a page of records
    List(ListArgs),
    /// Show an order's delivery checklist and edit one delivery
    Order(OrderArgs),
    /// Change the bag, add-ons and destination of an order
    EditDelivery(EditDeliveryArgs),
    /// File a received complaint
    Complaint(ComplaintArgs),
    /// Read or change persistent settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, clap::Args)]
pub struct ListArgs {
    /// Which page: orders, employees, zones, vehicles, notifications, complaints, bags
    pub page: PageKind,

    /// Search text
    #[arg(long, short)]
    pub search: Option<String>,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page_number: usize,

    /// Rows per page (defaults to the `table.page_size` setting)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Tick the row with this key (repeatable)
    #[arg(long = "select", value_name = "KEY")]
    pub select: Vec<String>,

    /// Press the select-all checkbox
    #[arg(long)]
    pub select_all: bool,

    /// What select-all covers (defaults to the `table.select_all_scope` setting)
    #[arg(long, value_parser = parse_scope)]
    pub scope: Option<SelectAllScope>,

    /// Sort by a column, e.g. `zoneName` or `deliveryCost:desc`
    #[arg(long, value_parser = parse_sort, value_name = "COLUMN[:asc|desc]")]
    pub sort: Option<(String, SortDirection)>,

    /// Hide a column (repeatable)
    #[arg(long = "hide", value_name = "COLUMN")]
    pub hide: Vec<String>,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Debug, clap::Args)]
pub struct OrderArgs {
    pub order_id: u32,

    /// Tick the delivery on this date (repeatable)
    #[arg(long = "select", value_name = "DATE")]
    pub select: Vec<NaiveDate>,

    /// Tick every delivery
    #[arg(long)]
    pub select_all: bool,

    /// Pause the subscription
    #[arg(long, conflicts_with = "play")]
    pub pause: bool,

    /// Resume the subscription
    #[arg(long)]
    pub play: bool,

    /// Edit the delivery scheduled on this date
    #[arg(long, value_name = "DATE")]
    pub edit: Option<NaiveDate>,

    /// Move the edited delivery to this date
    #[arg(long, requires = "edit", value_name = "DATE")]
    pub to: Option<NaiveDate>,

    /// Override the extra charges for an off-day move
    #[arg(long, requires = "to")]
    pub extra_charges: Option<String>,

    #[arg(long, requires = "edit")]
    pub slot: Option<String>,

    #[arg(long, requires = "edit", value_parser = parse_delivery_status)]
    pub status: Option<DeliveryStatus>,

    /// Assign an employee by full name
    #[arg(long, requires = "edit")]
    pub employee: Option<String>,

    #[arg(long, requires = "edit")]
    pub route: Option<String>,

    /// Delivery weekdays for this order
    #[arg(long, value_delimiter = ',', default_value = "MONDAY,WEDNESDAY")]
    pub allowed_days: Vec<String>,

    /// Reference date for past-date checks (defaults to the local date)
    #[arg(long)]
    pub today: Option<NaiveDate>,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Debug, clap::Args)]
pub struct EditDeliveryArgs {
    pub order_id: u32,

    /// Set required units of a bag line, e.g. `0=3` (repeatable)
    #[arg(long = "units", value_parser = parse_assignment, value_name = "INDEX=UNITS")]
    pub units: Vec<(usize, String)>,

    /// Append a blank bag line described as NAME=PRICE=GRAMS (repeatable)
    #[arg(long = "add-item", value_name = "NAME=PRICE=GRAMS")]
    pub add_item: Vec<String>,

    /// Remove a bag line by index (repeatable)
    #[arg(long = "remove-item", value_name = "INDEX")]
    pub remove_item: Vec<usize>,

    /// Add a catalog item as an add-on, optionally with units: `Carrot` or `Carrot=2`
    #[arg(long = "addon", value_name = "NAME[=UNITS]")]
    pub addon: Vec<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long, requires = "city")]
    pub route: Option<String>,

    /// Add a custom time slot (repeatable)
    #[arg(long = "add-slot", value_name = "SLOT")]
    pub add_slot: Vec<String>,

    #[arg(long)]
    pub slot: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Override the net price
    #[arg(long)]
    pub net_price: Option<String>,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Debug, clap::Args)]
pub struct ComplaintArgs {
    /// List customers matching this text and stop
    #[arg(long, conflicts_with = "customer")]
    pub find: Option<String>,

    /// Complaint id (defaults to the next free id)
    #[arg(long)]
    pub id: Option<String>,

    /// Customer id
    #[arg(long)]
    pub customer: Option<u32>,

    /// One of the customer's delivery dates, e.g. `11/JUN/2024`
    #[arg(long)]
    pub date: Option<String>,

    /// Complaint type, e.g. `Quality`
    #[arg(long = "type")]
    pub complaint_type: Option<String>,

    #[arg(long, default_value = "")]
    pub description: String,

    #[arg(long, value_parser = parse_status)]
    pub status: Option<Status>,

    #[arg(long)]
    pub resolution: Option<String>,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Debug, Subcommand)]
pub enum SettingsAction {
    /// Show one setting, or all when no key is given
    Get { key: Option<String> },
    /// Change a setting
    Set { key: String, value: String },
    /// Restore a setting's default
    Reset { key: String },
}

fn parse_scope(s: &str) -> Result<SelectAllScope, String> {
    s.parse()
}

fn parse_status(s: &str) -> Result<Status, String> {
    s.parse()
}

fn parse_delivery_status(s: &str) -> Result<DeliveryStatus, String> {
    s.parse()
}

/// `column` or `column:asc|desc`.
pub fn parse_sort(s: &str) -> Result<(String, SortDirection), String> {
    let (column, direction) = match s.split_once(':') {
        Some((column, dir)) => match dir.to_ascii_lowercase().as_str() {
            "asc" => (column, SortDirection::Ascending),
            "desc" => (column, SortDirection::Descending),
            other => return Err(format!("unknown sort direction {other:?}")),
        },
        None => (s, SortDirection::Ascending),
    };
    if column.is_empty() {
        return Err("missing column".to_string());
    }
    Ok((column.to_string(), direction))
}

/// `index=value`.
pub fn parse_assignment(s: &str) -> Result<(usize, String), String> {
    let (index, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected INDEX=VALUE, got {s:?}"))?;
    let index = index
        .trim()
        .parse()
        .map_err(|_| format!("bad index {index:?}"))?;
    Ok((index, value.trim().to_string()))
}

/// `name` or `name=units`.
pub fn parse_addon(s: &str) -> (String, Option<String>) {
    match s.split_once('=') {
        Some((name, units)) => (name.trim().to_string(), Some(units.trim().to_string())),
        None => (s.trim().to_string(), None),
    }
}

/// Resolve `--log-level` against the stored preference.
pub fn effective_log_level(flag: Option<LevelFilter>, stored: LevelFilter) -> LevelFilter {
    flag.unwrap_or(stored)
}

impl Command {
    /// How the command prints its result.
    pub fn format(&self) -> OutputFormat {
        match self {
            Command::List(args) => args.format,
            Command::Order(args) => args.format,
            Command::EditDelivery(args) => args.format,
            Command::Complaint(args) => args.format,
            Command::Settings { .. } => OutputFormat::Text,
        }
    }
}

impl ComplaintArgs {
    pub fn customer_id(&self) -> Result<u32, CliError> {
        self.customer
            .ok_or_else(|| CliError::invalid("--customer", "a customer is required"))
    }
}
