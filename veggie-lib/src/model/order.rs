//! Subscription orders and their scheduled deliveries.

use chrono::NaiveDate;
use gridkit::{Money, TableRow};
use serde::{Deserialize, Serialize};

/// State of one scheduled delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DeliveryStatus {
    #[default]
    Pending,
    Delivered,
    Cancelled,
}

impl DeliveryStatus {
    pub const ALL: [DeliveryStatus; 3] = [
        DeliveryStatus::Pending,
        DeliveryStatus::Delivered,
        DeliveryStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "Pending",
            DeliveryStatus::Delivered => "Delivered",
            DeliveryStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DeliveryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeliveryStatus::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown delivery status: {s}"))
    }
}

/// Payment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    #[default]
    Unpaid,
    Refunded,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Unpaid => "Unpaid",
            PaymentStatus::Refunded => "Refunded",
        })
    }
}

/// Whether deliveries of a subscription are running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SubscriptionState {
    #[default]
    Playing,
    Paused,
}

impl std::fmt::Display for SubscriptionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SubscriptionState::Playing => "Playing",
            SubscriptionState::Paused => "Paused",
        })
    }
}

/// One scheduled delivery of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    pub date: NaiveDate,
    pub time_slot: String,
    pub status: DeliveryStatus,
    pub assigned_employee: String,
    pub assigned_route: String,
    pub delivery_charges: Money,
}

impl TableRow for Delivery {
    fn row_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// An item in the customer's bag with the units they may order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderedItem {
    pub name: String,
    pub price: Money,
    /// Grams per unit.
    pub unit_quantity_g: u32,
    pub min_units: u32,
    pub max_units: u32,
    pub required_units: u32,
}

/// A vegetable subscription order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: u32,
    pub emp_id: u32,
    pub employee_name: String,
    pub customer_name: String,
    pub payment_type: String,
    pub deliveries: Vec<Delivery>,
    pub bags_ordered: Vec<String>,
    pub bag_items: Vec<OrderedItem>,
    /// Maximum bag weight in grams.
    pub max_weight_g: u32,
    pub total_price: Money,
    pub addons: Vec<String>,
    pub payment_status: PaymentStatus,
    pub subscription: SubscriptionState,
    pub special_instructions: String,
}

impl Order {
    /// Delivery scheduled on `date`, if any.
    pub fn delivery(&self, date: NaiveDate) -> Option<&Delivery> {
        self.deliveries.iter().find(|d| d.date == date)
    }

    /// Next pending delivery on or after `today`.
    pub fn next_delivery(&self, today: NaiveDate) -> Option<&Delivery> {
        self.deliveries
            .iter()
            .filter(|d| d.status == DeliveryStatus::Pending && d.date >= today)
            .min_by_key(|d| d.date)
    }
}

impl TableRow for Order {
    fn row_key(&self) -> String {
        self.order_id.to_string()
    }
}
