//! Employees.

use gridkit::TableRow;
use serde::{Deserialize, Serialize};

/// Employee role, also the options of the employee table's role filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Manager,
    SupportStaff,
    Technician,
    CustomerService,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Manager,
        Role::SupportStaff,
        Role::Technician,
        Role::CustomerService,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Manager => "Manager",
            Role::SupportStaff => "Support Staff",
            Role::Technician => "Technician",
            Role::CustomerService => "Customer Service",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown role: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInformation {
    pub phone: String,
    pub email: String,
}

/// A delivery or office employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub contact_information: ContactInformation,
    pub assigned_zone: Option<String>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl TableRow for Employee {
    fn row_key(&self) -> String {
        self.id.to_string()
    }
}
