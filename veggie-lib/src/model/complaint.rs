//! Customer complaints and the customers they are filed against.

use gridkit::{Money, TableRow};
use serde::{Deserialize, Serialize};

use super::Status;

/// Kind of complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplaintType {
    Delay,
    BadQuality,
    WrongItem,
    NotReached,
}

impl ComplaintType {
    pub const ALL: [ComplaintType; 4] = [
        ComplaintType::Delay,
        ComplaintType::BadQuality,
        ComplaintType::WrongItem,
        ComplaintType::NotReached,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComplaintType::Delay => "Delay",
            ComplaintType::BadQuality => "Bad quality",
            ComplaintType::WrongItem => "Wrong item",
            ComplaintType::NotReached => "Not reached",
        }
    }
}

impl std::fmt::Display for ComplaintType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ComplaintType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComplaintType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown complaint type: {s}"))
    }
}

/// A received complaint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub complaint_id: u32,
    pub user_id: u32,
    pub customer_name: String,
    pub delivery_date_slot: String,
    pub complaint_type: ComplaintType,
    pub description: String,
    pub status: Status,
    pub resolution: Option<String>,
}

impl TableRow for Complaint {
    fn row_key(&self) -> String {
        self.complaint_id.to_string()
    }
}

/// A subscriber as offered by the complaint form's customer picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: u32,
    pub order_id: u32,
    pub emp_id: u32,
    pub name: String,
    pub phone_number: String,
    pub assigned_employee: String,
    pub assigned_route: String,
    pub subscription_type: String,
    pub total_weight_g: u32,
    pub total_price: Money,
    pub add_ons: String,
    pub special_instructions: String,
    /// Delivery date slots as shown to the operator, e.g. `11/JUN/2024`.
    pub delivery_dates: Vec<String>,
}

impl TableRow for Customer {
    fn row_key(&self) -> String {
        self.id.to_string()
    }
}
