//! Customer notifications.

use gridkit::TableRow;
use serde::{Deserialize, Serialize};

/// A push/SMS notification scheduled for customers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: u32,
    pub image: String,
    pub heading: String,
    /// Shown under the "Category" column.
    pub category: String,
    pub notification_type: String,
    pub schedule_type: String,
    pub schedule_time: String,
    pub description: String,
}

impl TableRow for Notification {
    fn row_key(&self) -> String {
        self.id.to_string()
    }
}
