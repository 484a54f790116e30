//! Data access for the back-office pages.
//!
//! Pages never hold records of their own; they ask an [`AdminStore`] for a
//! fresh snapshot and hand it to a [`gridkit::DataTable`]. The `search_*`
//! methods are the server-side re-fetch a page performs from its table's
//! search callback.

mod memory;

pub use memory::*;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::StoreError;
use crate::model::{
    Bag, CatalogItem, City, Complaint, Customer, Delivery, Employee, Notification, Order,
    OrderedItem, SubscriptionState, Vehicle, Zone,
};

/// Source of back-office records.
///
/// List methods return records ordered by their row key.
#[async_trait]
pub trait AdminStore: Send + Sync {
    async fn orders(&self) -> Vec<Order>;

    async fn order(&self, order_id: u32) -> Result<Order, StoreError>;

    async fn employees(&self) -> Vec<Employee>;

    async fn zones(&self) -> Vec<Zone>;

    async fn vehicles(&self) -> Vec<Vehicle>;

    async fn cities(&self) -> Vec<City>;

    async fn notifications(&self) -> Vec<Notification>;

    async fn complaints(&self) -> Vec<Complaint>;

    async fn customers(&self) -> Vec<Customer>;

    async fn bags(&self) -> Vec<Bag>;

    /// Items that can be added to a delivery as add-ons.
    async fn catalog(&self) -> Vec<CatalogItem>;

    /// Zones whose searchable columns contain `query`.
    async fn search_zones(&self, query: &str) -> Vec<Zone>;

    /// Employees whose searchable columns contain `query`.
    async fn search_employees(&self, query: &str) -> Vec<Employee>;

    /// Vehicles whose searchable columns contain `query`.
    async fn search_vehicles(&self, query: &str) -> Vec<Vehicle>;

    /// Store a new complaint. Fails if the id is taken.
    async fn save_complaint(&self, complaint: Complaint) -> Result<(), StoreError>;

    /// Replace the delivery scheduled on `scheduled` with `delivery`.
    async fn update_delivery(
        &self,
        order_id: u32,
        scheduled: NaiveDate,
        delivery: Delivery,
    ) -> Result<Order, StoreError>;

    /// Replace an order's bag items and add-ons.
    async fn save_order_items(
        &self,
        order_id: u32,
        items: Vec<OrderedItem>,
        addons: Vec<String>,
    ) -> Result<Order, StoreError>;

    async fn set_subscription(
        &self,
        order_id: u32,
        state: SubscriptionState,
    ) -> Result<Order, StoreError>;
}
