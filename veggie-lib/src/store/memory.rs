//! In-memory store backed by DashMap

use std::hash::Hash;

use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use log::{debug, warn};

use super::AdminStore;
use crate::error::StoreError;
use crate::fixtures::{self, Seed};
use crate::model::*;
use crate::tables;

/// An [`AdminStore`] holding every record in concurrent hash maps.
///
/// Data is lost when the process exits.
///
/// # Example
///
/// ```
/// use veggie_lib::store::MemoryStore;
///
/// let store = MemoryStore::seeded();
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    orders: DashMap<u32, Order>,
    employees: DashMap<u32, Employee>,
    zones: DashMap<u32, Zone>,
    vehicles: DashMap<u32, Vehicle>,
    cities: DashMap<String, City>,
    notifications: DashMap<u32, Notification>,
    complaints: DashMap<u32, Complaint>,
    customers: DashMap<u32, Customer>,
    bags: DashMap<String, Bag>,
    catalog: DashMap<String, CatalogItem>,
}

fn load<K, V>(records: Vec<V>, key: impl Fn(&V) -> K) -> DashMap<K, V>
where
    K: Eq + Hash,
{
    records.into_iter().map(|r| (key(&r), r)).collect()
}

fn snapshot<K, V>(map: &DashMap<K, V>) -> Vec<V>
where
    K: Eq + Hash + Ord + Clone,
    V: Clone,
{
    let mut entries: Vec<(K, V)> = map
        .iter()
        .map(|e| (e.key().clone(), e.value().clone()))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries.into_iter().map(|(_, v)| v).collect()
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the bundled demo records.
    pub fn seeded() -> Self {
        Self::from_seed(fixtures::seed())
    }

    pub fn from_seed(seed: Seed) -> Self {
        Self {
            orders: load(seed.orders, |o| o.order_id),
            employees: load(seed.employees, |e| e.id),
            zones: load(seed.zones, |z| z.id),
            vehicles: load(seed.vehicles, |v| v.id),
            cities: load(seed.cities, |c| c.name.clone()),
            notifications: load(seed.notifications, |n| n.id),
            complaints: load(seed.complaints, |c| c.complaint_id),
            customers: load(seed.customers, |c| c.id),
            bags: load(seed.bags, |b| b.bag_name.clone()),
            catalog: load(seed.catalog, |c| c.name.clone()),
        }
    }

    /// Apply `change` to an order and return the updated copy.
    fn modify_order(
        &self,
        order_id: u32,
        change: impl FnOnce(&mut Order) -> Result<(), StoreError>,
    ) -> Result<Order, StoreError> {
        let mut entry = self
            .orders
            .get_mut(&order_id)
            .ok_or_else(|| StoreError::not_found("order", order_id))?;
        change(entry.value_mut())?;
        Ok(entry.value().clone())
    }
}

#[async_trait]
impl AdminStore for MemoryStore {
    async fn orders(&self) -> Vec<Order> {
        snapshot(&self.orders)
    }

    async fn order(&self, order_id: u32) -> Result<Order, StoreError> {
        self.orders
            .get(&order_id)
            .map(|o| o.value().clone())
            .ok_or_else(|| StoreError::not_found("order", order_id))
    }

    async fn employees(&self) -> Vec<Employee> {
        snapshot(&self.employees)
    }

    async fn zones(&self) -> Vec<Zone> {
        snapshot(&self.zones)
    }

    async fn vehicles(&self) -> Vec<Vehicle> {
        snapshot(&self.vehicles)
    }

    async fn cities(&self) -> Vec<City> {
        snapshot(&self.cities)
    }

    async fn notifications(&self) -> Vec<Notification> {
        snapshot(&self.notifications)
    }

    async fn complaints(&self) -> Vec<Complaint> {
        snapshot(&self.complaints)
    }

    async fn customers(&self) -> Vec<Customer> {
        snapshot(&self.customers)
    }

    async fn bags(&self) -> Vec<Bag> {
        snapshot(&self.bags)
    }

    async fn catalog(&self) -> Vec<CatalogItem> {
        snapshot(&self.catalog)
    }

    async fn search_zones(&self, query: &str) -> Vec<Zone> {
        match tables::zones() {
            Ok(page) => page.search(&snapshot(&self.zones), query),
            Err(e) => {
                warn!("zones table unavailable: {e}");
                Vec::new()
            }
        }
    }

    async fn search_employees(&self, query: &str) -> Vec<Employee> {
        match tables::employees() {
            Ok(page) => page.search(&snapshot(&self.employees), query),
            Err(e) => {
                warn!("employees table unavailable: {e}");
                Vec::new()
            }
        }
    }

    async fn search_vehicles(&self, query: &str) -> Vec<Vehicle> {
        match tables::vehicles() {
            Ok(page) => page.search(&snapshot(&self.vehicles), query),
            Err(e) => {
                warn!("vehicles table unavailable: {e}");
                Vec::new()
            }
        }
    }

    async fn save_complaint(&self, complaint: Complaint) -> Result<(), StoreError> {
        let id = complaint.complaint_id;
        match self.complaints.entry(id) {
            Entry::Occupied(_) => Err(StoreError::duplicate("complaint", id)),
            Entry::Vacant(slot) => {
                slot.insert(complaint);
                debug!("saved complaint {id}");
                Ok(())
            }
        }
    }

    async fn update_delivery(
        &self,
        order_id: u32,
        scheduled: NaiveDate,
        delivery: Delivery,
    ) -> Result<Order, StoreError> {
        self.modify_order(order_id, |order| {
            if delivery.date != scheduled && order.deliveries.iter().any(|d| d.date == delivery.date) {
                warn!("order {order_id}: delivery date {} already taken", delivery.date);
                return Err(StoreError::duplicate("delivery", delivery.date));
            }
            let slot = order
                .deliveries
                .iter_mut()
                .find(|d| d.date == scheduled)
                .ok_or_else(|| StoreError::not_found("delivery", scheduled))?;
            *slot = delivery;
            order.deliveries.sort_by_key(|d| d.date);
            debug!("order {order_id}: delivery {scheduled} updated");
            Ok(())
        })
    }

    async fn save_order_items(
        &self,
        order_id: u32,
        items: Vec<OrderedItem>,
        addons: Vec<String>,
    ) -> Result<Order, StoreError> {
        self.modify_order(order_id, |order| {
            order.bag_items = items;
            order.addons = addons;
            debug!("order {order_id}: {} bag items saved", order.bag_items.len());
            Ok(())
        })
    }

    async fn set_subscription(
        &self,
        order_id: u32,
        state: SubscriptionState,
    ) -> Result<Order, StoreError> {
        self.modify_order(order_id, |order| {
            order.subscription = state;
            debug!("order {order_id}: subscription {state}");
            Ok(())
        })
    }
}
