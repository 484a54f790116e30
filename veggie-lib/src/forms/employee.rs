//! Employee create/edit validation.

use super::Validator;
use crate::error::FormError;
use crate::model::{ContactInformation, Employee, Role};

/// Phone numbers are stored as `NNN-NNN-NNNN`.
pub const PHONE_PATTERN: &str = r"^\d{3}-\d{3}-\d{4}$";

/// Raw employee form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// One of the role filter options, e.g. `Support Staff`.
    pub role: String,
    pub assigned_zone: Option<String>,
}

impl EmployeeDraft {
    /// Validate the draft into an employee with `id`.
    pub fn validate(&self, id: u32) -> Result<Employee, FormError> {
        let role = self.role.parse::<Role>().ok();
        Validator::new()
            .field("firstName", self.first_name.as_str())
            .required("First name is required")
            .field("lastName", self.last_name.as_str())
            .required("Last name is required")
            .field("email", self.email.as_str())
            .required("Email is required")
            .email("Invalid email address")
            .field("phone", self.phone.as_str())
            .required("Phone is required")
            .pattern(PHONE_PATTERN, "Phone must look like 123-456-7890")
            .field("role", &role)
            .selected("Choose a role")
            .validate()?;

        Ok(Employee {
            id,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            role: role.unwrap_or(Role::SupportStaff),
            contact_information: ContactInformation {
                phone: self.phone.clone(),
                email: self.email.clone(),
            },
            assigned_zone: self.assigned_zone.clone(),
        })
    }
}

impl From<&Employee> for EmployeeDraft {
    fn from(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.contact_information.email.clone(),
            phone: employee.contact_information.phone.clone(),
            role: employee.role.to_string(),
            assigned_zone: employee.assigned_zone.clone(),
        }
    }
}
