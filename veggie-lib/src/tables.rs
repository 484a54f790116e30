//! Table definitions for each back-office page.
//!
//! A [`TablePage`] bundles what a list page shows around its data table: the
//! heading, the columns (with the leading checkbox and trailing actions
//! column), the columns the search box looks in, and the toolbar filter
//! groups.

use std::fmt;
use std::sync::Arc;

use gridkit::{
    filter_rows, Alignment, CellValue, Column, ColumnSet, DataTable, FilterGroup, TableError,
    TableRow,
};

use crate::model::*;

/// The list pages of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Orders,
    Employees,
    Zones,
    Vehicles,
    Notifications,
    Complaints,
    Bags,
}

impl PageKind {
    pub const ALL: [PageKind; 7] = [
        PageKind::Orders,
        PageKind::Employees,
        PageKind::Zones,
        PageKind::Vehicles,
        PageKind::Notifications,
        PageKind::Complaints,
        PageKind::Bags,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PageKind::Orders => "orders",
            PageKind::Employees => "employees",
            PageKind::Zones => "zones",
            PageKind::Vehicles => "vehicles",
            PageKind::Notifications => "notifications",
            PageKind::Complaints => "complaints",
            PageKind::Bags => "bags",
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown page: {s}"))
    }
}

/// Everything a list page shows around its records.
pub struct TablePage<T> {
    /// Heading without the row count, e.g. `Zones`.
    pub title: &'static str,
    pub description: &'static str,
    pub columns: ColumnSet<T>,
    pub search_keys: Vec<String>,
    pub filter_groups: Vec<FilterGroup>,
}

impl<T: TableRow> TablePage<T> {
    fn new(
        title: &'static str,
        description: &'static str,
        columns: Vec<Column<T>>,
        search_keys: &[&str],
        filter_groups: Vec<FilterGroup>,
    ) -> Result<Self, TableError> {
        Ok(Self {
            title,
            description,
            columns: ColumnSet::new(columns)?,
            search_keys: search_keys.iter().map(|k| k.to_string()).collect(),
            filter_groups,
        })
    }

    /// Heading with the number of records shown, e.g. `Zones (5)`.
    pub fn heading(&self, count: usize) -> String {
        format!("{} ({count})", self.title)
    }

    /// Records whose search columns contain `query`, case-insensitively.
    pub fn search(&self, records: &[T], query: &str) -> Vec<T>
    where
        T: Clone,
    {
        filter_rows(records, &self.columns, query, &self.search_keys)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Build the page's data table over `records`.
    pub fn into_table(self, records: impl Into<Arc<[T]>>) -> DataTable<T> {
        DataTable::new(self.columns, records)
            .with_search_keys(self.search_keys)
            .with_filter_groups(self.filter_groups)
    }
}

impl<T> fmt::Debug for TablePage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TablePage")
            .field("title", &self.title)
            .field("columns", &self.columns)
            .field("search_keys", &self.search_keys)
            .field("filter_groups", &self.filter_groups)
            .finish()
    }
}

fn actions<T: 'static>() -> Column<T> {
    Column::display("actions", |_: &T, _| "Edit | Delete".to_string())
}

fn status_filter() -> FilterGroup {
    FilterGroup::new("Status", Status::ALL.map(Status::as_str))
}

pub fn orders() -> Result<TablePage<Order>, TableError> {
    TablePage::new(
        "Orders",
        "Manage subscription orders",
        vec![
            Column::selection(),
            Column::new("orderId", "Order ID", |o: &Order| o.order_id.into()),
            Column::new("customerName", "Customer", |o: &Order| (&o.customer_name).into()),
            Column::new("employeeName", "Employee", |o: &Order| (&o.employee_name).into()),
            Column::new("paymentType", "Payment Type", |o: &Order| (&o.payment_type).into()),
            Column::new("paymentStatus", "Payment", |o: &Order| {
                o.payment_status.to_string().into()
            }),
            Column::new("subscription", "Subscription", |o: &Order| {
                o.subscription.to_string().into()
            }),
            Column::new("totalPrice", "Total", |o: &Order| o.total_price.into())
                .align(Alignment::Right),
            actions(),
        ],
        &["orderId", "customerName", "employeeName"],
        vec![FilterGroup::new("Payment", ["Paid", "Unpaid", "Refunded"])],
    )
}

pub fn employees() -> Result<TablePage<Employee>, TableError> {
    TablePage::new(
        "Employee",
        "Manage Employee (Client side table functionalities.)",
        vec![
            Column::selection(),
            Column::new("id", "ID", |e: &Employee| e.id.into()),
            Column::new("firstName", "First Name", |e: &Employee| (&e.first_name).into()),
            Column::new("lastName", "Last Name", |e: &Employee| (&e.last_name).into()),
            Column::new("role", "Role", |e: &Employee| e.role.as_str().into()),
            Column::new("phone", "Phone", |e: &Employee| {
                (&e.contact_information.phone).into()
            }),
            Column::new("email", "Email", |e: &Employee| {
                (&e.contact_information.email).into()
            }),
            Column::new("assignedZone", "Zone", |e: &Employee| e.assigned_zone.clone().into()),
            actions(),
        ],
        &["firstName", "lastName", "phone"],
        vec![FilterGroup::new("Role", Role::ALL.map(Role::as_str))],
    )
}

pub fn zones() -> Result<TablePage<Zone>, TableError> {
    TablePage::new(
        "Zones",
        "Manage Zones (Client-side table functionalities.)",
        vec![
            Column::selection(),
            Column::new("zoneName", "Zone Name", |z: &Zone| (&z.zone_name).into()),
            Column::new("city", "City", |z: &Zone| (&z.city).into()),
            Column::new("serviced", "Serviced", |z: &Zone| z.serviced.into()),
            Column::new("deliverySequence", "Delivery Sequence", |z: &Zone| {
                z.delivery_sequence.into()
            })
            .align(Alignment::Right),
            Column::new("deliveryCost", "Delivery Cost", |z: &Zone| z.delivery_cost.into())
                .align(Alignment::Right),
            actions(),
        ],
        &["zoneName", "city", "serviced", "deliverySequence", "deliveryCost"],
        vec![FilterGroup::new(
            "Sort By",
            ["Ascending order", "Descending order"],
        )],
    )
}

pub fn vehicles() -> Result<TablePage<Vehicle>, TableError> {
    TablePage::new(
        "Vehicles",
        "Manage Vehicles (Client-side table functionalities.)",
        vec![
            Column::selection(),
            Column::new("registrationNumber", "Registration", |v: &Vehicle| {
                (&v.registration_number).into()
            }),
            Column::new("vehicleType", "Type", |v: &Vehicle| (&v.vehicle_type).into()),
            Column::new("driverName", "Driver", |v: &Vehicle| (&v.driver_name).into()),
            Column::new("capacity", "Capacity (kg)", |v: &Vehicle| v.capacity_kg.into())
                .align(Alignment::Right),
            Column::new("zone", "Zone", |v: &Vehicle| (&v.zone).into()),
            Column::new("status", "Status", |v: &Vehicle| v.status.as_str().into()),
            actions(),
        ],
        &["registrationNumber", "driverName", "zone"],
        vec![status_filter()],
    )
}

pub fn notifications() -> Result<TablePage<Notification>, TableError> {
    TablePage::new(
        "Notifications",
        "Manage customer notifications",
        vec![
            Column::selection(),
            Column::new("id", "ID", |n: &Notification| n.id.into()),
            Column::new("image", "Image", |n: &Notification| (&n.image).into()).sortable(false),
            Column::new("heading", "Heading", |n: &Notification| (&n.heading).into()),
            Column::new("type", "Category", |n: &Notification| (&n.category).into()),
            Column::new("notificationType", "Notification Type", |n: &Notification| {
                (&n.notification_type).into()
            }),
            Column::new("scheduleType", "Schedule Type", |n: &Notification| {
                (&n.schedule_type).into()
            }),
            Column::new("scheduleTime", "Scheduled Time", |n: &Notification| {
                (&n.schedule_time).into()
            }),
            Column::new("description", "Description", |n: &Notification| {
                (&n.description).into()
            }),
            actions(),
        ],
        &["heading", "type", "description"],
        vec![FilterGroup::new("Notification Type", ["Push", "SMS"])],
    )
}

pub fn complaints() -> Result<TablePage<Complaint>, TableError> {
    TablePage::new(
        "Complaints",
        "Manage customer complaints",
        vec![
            Column::selection(),
            Column::new("complaintId", "Complaint ID", |c: &Complaint| c.complaint_id.into()),
            Column::new("customerName", "Customer", |c: &Complaint| (&c.customer_name).into()),
            Column::new("deliveryDateSlot", "Delivery Date", |c: &Complaint| {
                (&c.delivery_date_slot).into()
            }),
            Column::new("complaintType", "Type", |c: &Complaint| {
                c.complaint_type.as_str().into()
            }),
            Column::new("description", "Description", |c: &Complaint| (&c.description).into()),
            Column::new("status", "Status", |c: &Complaint| c.status.as_str().into()),
            Column::new("resolution", "Resolution", |c: &Complaint| c.resolution.clone().into()),
            actions(),
        ],
        &["customerName", "complaintType", "description"],
        vec![
            FilterGroup::new("Type", ComplaintType::ALL.map(ComplaintType::as_str)),
            status_filter(),
        ],
    )
}

pub fn bags() -> Result<TablePage<Bag>, TableError> {
    TablePage::new(
        "Bags",
        "Manage subscription bags",
        vec![
            Column::selection(),
            Column::new("bagName", "Bag Name", |b: &Bag| (&b.bag_name).into()),
            Column::new("items", "Items", |b: &Bag| {
                CellValue::List(b.bag_items.iter().map(|i| (&i.item_name).into()).collect())
            })
            .sortable(false),
            Column::new("totalPrice", "Price", |b: &Bag| b.total_price.into())
                .align(Alignment::Right),
            Column::new("totalWeight", "Weight (kg)", |b: &Bag| b.total_weight.into())
                .align(Alignment::Right),
            Column::new("totalPieces", "Pieces", |b: &Bag| b.total_pieces.into())
                .align(Alignment::Right),
            Column::new("createdDate", "Created", |b: &Bag| b.created_date.into()),
            Column::new("status", "Status", |b: &Bag| b.status.as_str().into()),
            Column::new("createdBy", "Created By", |b: &Bag| (&b.created_by.name).into()),
            Column::new("visibility", "Visibility", |b: &Bag| b.visibility.clone().into()),
            actions(),
        ],
        &["bagName", "status", "createdBy"],
        vec![
            status_filter(),
            FilterGroup::new("Visibility", ["Admin", "Customer"]),
        ],
    )
}

/// Scheduled deliveries of one order, listed as a checklist.
pub fn deliveries() -> Result<TablePage<Delivery>, TableError> {
    TablePage::new(
        "Deliveries",
        "Scheduled deliveries of this order",
        vec![
            Column::selection(),
            Column::new("date", "Date", |d: &Delivery| d.date.into()),
            Column::new("timeSlot", "Time Slot", |d: &Delivery| (&d.time_slot).into()),
            Column::new("status", "Status", |d: &Delivery| d.status.as_str().into()),
            Column::new("assignedEmployee", "Employee", |d: &Delivery| {
                (&d.assigned_employee).into()
            }),
            Column::new("assignedRoute", "Route", |d: &Delivery| (&d.assigned_route).into()),
            Column::new("deliveryCharges", "Charges", |d: &Delivery| d.delivery_charges.into())
                .align(Alignment::Right),
        ],
        &["date", "status", "assignedEmployee"],
        vec![FilterGroup::new(
            "Status",
            DeliveryStatus::ALL.map(DeliveryStatus::as_str),
        )],
    )
}
