//! Received-complaint intake form.

use log::debug;

use super::Validator;
use crate::error::FormError;
use crate::model::{Complaint, ComplaintType, Customer, Status};

/// Customers whose name contains `query` case-insensitively or whose phone
/// number contains it.
pub fn search_customers<'a>(customers: &'a [Customer], query: &str) -> Vec<&'a Customer> {
    let needle = query.to_lowercase();
    customers
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle) || c.phone_number.contains(query))
        .collect()
}

fn parse_id(field: &str, input: &str) -> Result<i64, FormError> {
    input.trim().parse().map_err(|_| FormError::NotANumber {
        field: field.to_string(),
        input: input.to_string(),
    })
}

/// State of the complaint form.
#[derive(Debug, Clone)]
pub struct ComplaintForm {
    customers: Vec<Customer>,
    complaint_id: i64,
    user_id: i64,
    customer_name: String,
    delivery_dates: Vec<String>,
    delivery_date_slot: Option<String>,
    complaint_type: Option<ComplaintType>,
    description: String,
    status: Status,
    resolution: Option<String>,
}

impl ComplaintForm {
    /// Blank form offering `customers`, with `complaint_id` prefilled.
    pub fn new(customers: Vec<Customer>, complaint_id: u32) -> Self {
        Self {
            customers,
            complaint_id: i64::from(complaint_id),
            user_id: 0,
            customer_name: String::new(),
            delivery_dates: Vec::new(),
            delivery_date_slot: None,
            complaint_type: None,
            description: String::new(),
            status: Status::Active,
            resolution: None,
        }
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn customer_options(&self, query: &str) -> Vec<&Customer> {
        search_customers(&self.customers, query)
    }

    /// Delivery dates of the chosen customer.
    pub fn delivery_dates(&self) -> &[String] {
        &self.delivery_dates
    }

    pub fn delivery_date_slot(&self) -> Option<&str> {
        self.delivery_date_slot.as_deref()
    }

    pub fn set_complaint_id(&mut self, input: &str) -> Result<(), FormError> {
        self.complaint_id = parse_id("complaintId", input)?;
        Ok(())
    }

    pub fn set_user_id(&mut self, input: &str) -> Result<(), FormError> {
        self.user_id = parse_id("userId", input)?;
        Ok(())
    }

    /// Choose the customer with `id`.
    ///
    /// Loads their delivery dates and clears the chosen date.
    pub fn choose_customer(&mut self, id: u32) -> Result<(), FormError> {
        let customer = self
            .customers
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| FormError::UnknownOption {
                field: "customerName".to_string(),
                value: id.to_string(),
            })?;
        self.user_id = i64::from(customer.id);
        self.customer_name = customer.name.clone();
        self.delivery_dates = customer.delivery_dates.clone();
        self.delivery_date_slot = None;
        debug!("complaint form: customer {} chosen", customer.name);
        Ok(())
    }

    pub fn choose_delivery_date(&mut self, slot: &str) -> Result<(), FormError> {
        if !self.delivery_dates.iter().any(|d| d == slot) {
            return Err(FormError::UnknownOption {
                field: "deliveryDateSlot".to_string(),
                value: slot.to_string(),
            });
        }
        self.delivery_date_slot = Some(slot.to_string());
        Ok(())
    }

    pub fn set_complaint_type(&mut self, value: &str) -> Result<(), FormError> {
        let kind = value
            .parse::<ComplaintType>()
            .map_err(|_| FormError::UnknownOption {
                field: "complaintType".to_string(),
                value: value.to_string(),
            })?;
        self.complaint_type = Some(kind);
        Ok(())
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Set or clear the resolution. Blank text clears it.
    pub fn set_resolution(&mut self, resolution: &str) {
        let resolution = resolution.trim();
        self.resolution = (!resolution.is_empty()).then(|| resolution.to_string());
    }

    /// Validate and build the complaint.
    pub fn validate(&self) -> Result<Complaint, FormError> {
        let max_id = i64::from(u32::MAX);
        Validator::new()
            .field("complaintId", &self.complaint_id)
            .nonnegative("Complaint ID must not be negative")
            .rule(|&v| v <= max_id, "Complaint ID is too large")
            .field("userId", &self.user_id)
            .nonnegative("User ID must not be negative")
            .rule(|&v| v <= max_id, "User ID is too large")
            .field("customerName", self.customer_name.as_str())
            .required("Customer is required")
            .field("complaintType", &self.complaint_type)
            .selected("Complaint type is required")
            .field("description", self.description.as_str())
            .required("Description is required")
            .validate()?;

        Ok(Complaint {
            complaint_id: u32::try_from(self.complaint_id).unwrap_or_default(),
            user_id: u32::try_from(self.user_id).unwrap_or_default(),
            customer_name: self.customer_name.clone(),
            delivery_date_slot: self.delivery_date_slot.clone().unwrap_or_default(),
            complaint_type: self.complaint_type.unwrap_or(ComplaintType::Delay),
            description: self.description.clone(),
            status: self.status,
            resolution: self.resolution.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn form() -> ComplaintForm {
        ComplaintForm::new(fixtures::customers(), 3)
    }

    #[test]
    fn test_customer_search_by_name_or_phone() {
        let customers = fixtures::customers();
        let names = |q| -> Vec<String> {
            search_customers(&customers, q).iter().map(|c| c.name.clone()).collect()
        };
        assert_eq!(names("alice"), vec!["Alice Johnson"]);
        assert_eq!(names("123-"), vec!["Alice Johnson", "Deepak Singh"]);
        assert_eq!(names("765"), vec!["Bob Brown"]);
        assert!(names("zed").is_empty());
    }

    #[test]
    fn test_choosing_customer_resets_date() {
        let mut form = form();
        form.choose_customer(1).unwrap();
        form.choose_delivery_date("17/MAR/2024").unwrap();
        assert_eq!(form.delivery_date_slot(), Some("17/MAR/2024"));

        form.choose_customer(2).unwrap();
        assert_eq!(form.delivery_date_slot(), None);
        assert_eq!(form.delivery_dates()[0], "10/JUN/2024");
        assert!(form.choose_delivery_date("17/MAR/2024").is_err());
    }

    #[test]
    fn test_description_is_required() {
        let mut form = form();
        form.choose_customer(3).unwrap();
        form.set_complaint_type("wrong item").unwrap();
        let err = form.validate().unwrap_err();
        assert_eq!(err.field_errors().len(), 1);
        assert_eq!(err.field_errors()[0].field, "description");
        assert_eq!(err.field_errors()[0].message, "Description is required");
    }

    #[test]
    fn test_negative_ids_are_rejected() {
        let mut form = form();
        form.set_complaint_id("-4").unwrap();
        assert!(form.set_user_id("abc").is_err());
        let err = form.validate().unwrap_err();
        assert!(err.field_errors().iter().any(|e| e.field == "complaintId"));
    }

    #[test]
    fn test_valid_form_builds_complaint() {
        let mut form = form();
        form.choose_customer(1).unwrap();
        form.choose_delivery_date("21/JUL/2024").unwrap();
        form.set_complaint_type("Not reached").unwrap();
        form.set_description("Bag never arrived");
        form.set_resolution("  ");
        let complaint = form.validate().unwrap();
        assert_eq!(complaint.complaint_id, 3);
        assert_eq!(complaint.user_id, 1);
        assert_eq!(complaint.complaint_type, ComplaintType::NotReached);
        assert_eq!(complaint.status, Status::Active);
        assert_eq!(complaint.resolution, None);
    }
}
