//! Delivery geography: cities, zones and vehicles.

use gridkit::{Money, TableRow};
use serde::{Deserialize, Serialize};

use super::Status;

/// A city and the delivery routes running in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub state: String,
    pub routes: Vec<String>,
}

impl TableRow for City {
    fn row_key(&self) -> String {
        self.name.clone()
    }
}

/// A delivery zone within a city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: u32,
    pub zone_name: String,
    pub city: String,
    pub serviced: bool,
    pub delivery_sequence: u32,
    pub delivery_cost: Money,
}

impl TableRow for Zone {
    fn row_key(&self) -> String {
        self.id.to_string()
    }
}

/// A delivery vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: u32,
    pub registration_number: String,
    pub vehicle_type: String,
    pub driver_name: String,
    pub capacity_kg: u32,
    pub zone: String,
    pub status: Status,
}

impl TableRow for Vehicle {
    fn row_key(&self) -> String {
        self.id.to_string()
    }
}
