//! Back-office records.
//!
//! Every record type implements [`gridkit::TableRow`] so it can be listed in
//! a [`gridkit::DataTable`]; the row key is the record's business id.

mod bag;
mod complaint;
mod notification;
mod order;
mod route;
mod staff;

pub use bag::*;
pub use complaint::*;
pub use notification::*;
pub use order::*;
pub use route::*;
pub use staff::*;

pub use gridkit::Money;

/// Active/inactive flag shared by bags, complaints and vehicles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

impl Status {
    pub const ALL: [Status; 2] = [Status::Active, Status::Inactive];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown status: {s}"))
    }
}
