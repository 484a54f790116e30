//! Subscription bags and the add-on catalog.

use chrono::NaiveDate;
use gridkit::{Money, TableRow};
use serde::{Deserialize, Serialize};

use super::Status;

/// One item of a bag, priced and measured either by weight or by pieces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BagItem {
    pub item_name: String,
    pub item_price: Money,
    pub item_pieces: Option<u32>,
    /// Kilograms.
    pub item_weight: Option<u32>,
}

/// Who created a bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    pub role: String,
    pub name: String,
}

/// A subscription bag template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bag {
    pub bag_name: String,
    pub bag_items: Vec<BagItem>,
    pub total_price: Money,
    pub total_weight: Option<u32>,
    pub total_pieces: Option<u32>,
    pub created_date: NaiveDate,
    pub updated_date: Option<NaiveDate>,
    pub status: Status,
    pub created_by: Creator,
    pub visibility: Option<String>,
}

impl Bag {
    /// Sum of item prices.
    pub fn items_price(&self) -> Money {
        self.bag_items.iter().map(|i| i.item_price).sum()
    }
}

impl TableRow for Bag {
    fn row_key(&self) -> String {
        self.bag_name.clone()
    }
}

/// An item that can be added to a delivery as an add-on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub name: String,
    pub price: Money,
    /// Grams per unit.
    pub unit_quantity_g: u32,
    pub min_units: u32,
    pub max_units: u32,
}

impl TableRow for CatalogItem {
    fn row_key(&self) -> String {
        self.name.clone()
    }
}
