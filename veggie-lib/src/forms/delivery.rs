//! Delivery modification form.
//!
//! Edits the bag items, add-ons, destination and time slot of an order's
//! upcoming delivery. Totals are derived from the lines on every read, so
//! they cannot drift from the line state. Every rejected transition leaves
//! the form unchanged.

use log::{debug, warn};
use rust_decimal::Decimal;
use serde::Serialize;

use super::Validator;
use crate::error::FormError;
use crate::fixtures::DELIVERY_TIME_SLOTS;
use crate::model::{CatalogItem, City, Money, Order, OrderedItem};

/// One bag item with the units the customer wants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BagLine {
    pub name: String,
    pub price: Money,
    pub unit_quantity_g: u32,
    pub min_units: u32,
    pub max_units: u32,
    pub required_units: u32,
}

impl BagLine {
    /// Blank line appended by "add item".
    fn blank() -> Self {
        Self {
            name: String::new(),
            price: Money::default(),
            unit_quantity_g: 0,
            min_units: 1,
            max_units: 5,
            required_units: 1,
        }
    }

    pub fn amount(&self) -> Money {
        line_amount(self.price, self.required_units)
    }

    pub fn weight_g(&self) -> u32 {
        self.unit_quantity_g.saturating_mul(self.required_units)
    }
}

impl From<&OrderedItem> for BagLine {
    fn from(item: &OrderedItem) -> Self {
        Self {
            name: item.name.clone(),
            price: item.price,
            unit_quantity_g: item.unit_quantity_g,
            min_units: item.min_units,
            max_units: item.max_units,
            required_units: item.required_units,
        }
    }
}

impl From<&BagLine> for OrderedItem {
    fn from(line: &BagLine) -> Self {
        Self {
            name: line.name.clone(),
            price: line.price,
            unit_quantity_g: line.unit_quantity_g,
            min_units: line.min_units,
            max_units: line.max_units,
            required_units: line.required_units,
        }
    }
}

/// One add-on picked from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOnLine {
    /// Empty until an item is chosen.
    pub name: String,
    pub price: Money,
    pub unit_quantity_g: u32,
    pub min_units: u32,
    pub max_units: u32,
    pub required_units: u32,
}

impl AddOnLine {
    fn blank() -> Self {
        Self {
            name: String::new(),
            price: Money::default(),
            unit_quantity_g: 0,
            min_units: 1,
            max_units: 1,
            required_units: 1,
        }
    }

    pub fn amount(&self) -> Money {
        line_amount(self.price, self.required_units)
    }

    pub fn weight_g(&self) -> u32 {
        self.unit_quantity_g.saturating_mul(self.required_units)
    }
}

fn line_amount(price: Money, units: u32) -> Money {
    Money::new(price.value() * Decimal::from(units))
}

/// Parse a units input. Empty or non-numeric input is rejected.
pub fn parse_units(field: &str, input: &str) -> Result<u32, FormError> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| FormError::NotANumber {
            field: field.to_string(),
            input: input.to_string(),
        })
}

fn check_range(field: &str, min: u32, max: u32, value: u32) -> Result<(), FormError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(FormError::OutOfRange {
            field: field.to_string(),
            min,
            max,
            value,
        })
    }
}

/// The validated result of [`DeliveryForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryChange {
    pub order_id: u32,
    pub items: Vec<OrderedItem>,
    pub addons: Vec<AddOnLine>,
    pub city: String,
    pub route: String,
    pub time_slot: String,
    pub description: String,
    pub total_amount: Money,
    pub total_weight_g: u32,
    pub net_price: Money,
}

/// State of the delivery modification form.
#[derive(Debug, Clone)]
pub struct DeliveryForm {
    order_id: u32,
    max_weight_g: u32,
    items: Vec<BagLine>,
    addons: Vec<AddOnLine>,
    catalog: Vec<CatalogItem>,
    cities: Vec<City>,
    city: Option<String>,
    route: Option<String>,
    time_slots: Vec<String>,
    time_slot: Option<String>,
    description: String,
    net_price: Option<Money>,
}

impl DeliveryForm {
    /// Open the form for `order`, offering `catalog` as add-ons and `cities`
    /// as destinations.
    pub fn new(order: &Order, catalog: Vec<CatalogItem>, cities: Vec<City>) -> Self {
        Self {
            order_id: order.order_id,
            max_weight_g: order.max_weight_g,
            items: order.bag_items.iter().map(BagLine::from).collect(),
            addons: Vec::new(),
            catalog,
            cities,
            city: None,
            route: None,
            time_slots: DELIVERY_TIME_SLOTS.iter().map(|s| s.to_string()).collect(),
            time_slot: None,
            description: String::new(),
            net_price: None,
        }
    }

    pub fn order_id(&self) -> u32 {
        self.order_id
    }

    pub fn items(&self) -> &[BagLine] {
        &self.items
    }

    pub fn addons(&self) -> &[AddOnLine] {
        &self.addons
    }

    pub fn catalog(&self) -> &[CatalogItem] {
        &self.catalog
    }

    pub fn max_weight_g(&self) -> u32 {
        self.max_weight_g
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn route(&self) -> Option<&str> {
        self.route.as_deref()
    }

    pub fn time_slots(&self) -> &[String] {
        &self.time_slots
    }

    pub fn time_slot(&self) -> Option<&str> {
        self.time_slot.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    // -------------------------------------------------------------------------
    // Derived totals
    // -------------------------------------------------------------------------

    /// Σ price × units over bag items.
    pub fn total_amount(&self) -> Money {
        self.items.iter().map(BagLine::amount).sum()
    }

    /// Σ unit quantity × units over bag items, in grams.
    pub fn total_weight_g(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |total: u32, line| total.saturating_add(line.weight_g()))
    }

    pub fn addon_amount(&self) -> Money {
        self.addons.iter().map(AddOnLine::amount).sum()
    }

    pub fn addon_weight_g(&self) -> u32 {
        self.addons
            .iter()
            .fold(0, |total: u32, line| total.saturating_add(line.weight_g()))
    }

    /// The add-on amount unless overridden with [`set_net_price`](Self::set_net_price).
    pub fn net_price(&self) -> Money {
        self.net_price.unwrap_or_else(|| self.addon_amount())
    }

    pub fn is_overweight(&self) -> bool {
        self.total_weight_g() > self.max_weight_g
    }

    /// Saving is disabled while the bag is over its weight limit.
    pub fn can_save(&self) -> bool {
        !self.is_overweight()
    }

    // -------------------------------------------------------------------------
    // Bag items
    // -------------------------------------------------------------------------

    /// Set the units of bag item `index`, within its `[min, max]`.
    pub fn set_required_units(&mut self, index: usize, units: u32) -> Result<(), FormError> {
        let line = self.items.get_mut(index).ok_or(FormError::NoSuchLine(index))?;
        check_range("requiredUnits", line.min_units, line.max_units, units).inspect_err(|e| {
            warn!("bag item {index}: {e}");
        })?;
        line.required_units = units;
        debug!("bag item {index} ({}) set to {units} units", line.name);
        Ok(())
    }

    /// Parse and set the units of bag item `index`.
    pub fn input_required_units(&mut self, index: usize, input: &str) -> Result<(), FormError> {
        let units = parse_units("requiredUnits", input)?;
        self.set_required_units(index, units)
    }

    /// Fill in a bag item's name, price and unit quantity.
    ///
    /// A single unit may weigh at most the bag's weight limit.
    pub fn describe_item(
        &mut self,
        index: usize,
        name: impl Into<String>,
        price: Money,
        unit_quantity_g: u32,
    ) -> Result<(), FormError> {
        check_range("unitQuantity", 0, self.max_weight_g, unit_quantity_g)?;
        let line = self.items.get_mut(index).ok_or(FormError::NoSuchLine(index))?;
        line.name = name.into();
        line.price = price;
        line.unit_quantity_g = unit_quantity_g;
        Ok(())
    }

    /// Append a blank bag item while the bag is under its weight limit.
    ///
    /// Returns the new line's index.
    pub fn add_item(&mut self) -> Result<usize, FormError> {
        let total_g = self.total_weight_g();
        if total_g >= self.max_weight_g {
            warn!("order {}: add item refused at {total_g} g", self.order_id);
            return Err(FormError::WeightLimit {
                total_g,
                max_g: self.max_weight_g,
            });
        }
        self.items.push(BagLine::blank());
        Ok(self.items.len() - 1)
    }

    pub fn remove_item(&mut self, index: usize) -> Result<BagLine, FormError> {
        if index >= self.items.len() {
            return Err(FormError::NoSuchLine(index));
        }
        Ok(self.items.remove(index))
    }

    // -------------------------------------------------------------------------
    // Add-ons
    // -------------------------------------------------------------------------

    /// Append a blank add-on line and return its index.
    pub fn add_addon(&mut self) -> usize {
        self.addons.push(AddOnLine::blank());
        self.addons.len() - 1
    }

    /// Pick catalog item `name` for add-on `index`.
    ///
    /// Copies the catalog price and unit quantity and resets units to the
    /// catalog minimum.
    pub fn choose_addon(&mut self, index: usize, name: &str) -> Result<(), FormError> {
        let item = self
            .catalog
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| FormError::UnknownOption {
                field: "addOn".to_string(),
                value: name.to_string(),
            })?;
        let line = self.addons.get_mut(index).ok_or(FormError::NoSuchLine(index))?;
        *line = AddOnLine {
            name: item.name.clone(),
            price: item.price,
            unit_quantity_g: item.unit_quantity_g,
            min_units: item.min_units,
            max_units: item.max_units,
            required_units: item.min_units,
        };
        debug!("add-on {index} set to {name}");
        Ok(())
    }

    pub fn set_addon_units(&mut self, index: usize, units: u32) -> Result<(), FormError> {
        let line = self.addons.get_mut(index).ok_or(FormError::NoSuchLine(index))?;
        check_range("requiredUnits", line.min_units, line.max_units, units)?;
        line.required_units = units;
        Ok(())
    }

    pub fn remove_addon(&mut self, index: usize) -> Result<AddOnLine, FormError> {
        if index >= self.addons.len() {
            return Err(FormError::NoSuchLine(index));
        }
        Ok(self.addons.remove(index))
    }

    /// Override the net price. It no longer follows the add-on amount.
    pub fn set_net_price(&mut self, input: &str) -> Result<(), FormError> {
        let value = input
            .trim()
            .parse::<Decimal>()
            .map_err(|_| FormError::NotANumber {
                field: "netPrice".to_string(),
                input: input.to_string(),
            })?;
        self.net_price = Some(Money::new(value));
        Ok(())
    }

    /// Let the net price follow the add-on amount again.
    pub fn reset_net_price(&mut self) {
        self.net_price = None;
    }

    // -------------------------------------------------------------------------
    // Destination and schedule
    // -------------------------------------------------------------------------

    pub fn city_options(&self) -> Vec<&str> {
        self.cities.iter().map(|c| c.name.as_str()).collect()
    }

    /// Choose a city. The route is cleared.
    pub fn set_city(&mut self, city: &str) -> Result<(), FormError> {
        if !self.cities.iter().any(|c| c.name == city) {
            return Err(FormError::UnknownOption {
                field: "city".to_string(),
                value: city.to_string(),
            });
        }
        self.city = Some(city.to_string());
        self.route = None;
        Ok(())
    }

    /// Routes of the chosen city; empty until a city is chosen.
    pub fn route_options(&self) -> &[String] {
        self.city
            .as_deref()
            .and_then(|name| self.cities.iter().find(|c| c.name == name))
            .map(|c| c.routes.as_slice())
            .unwrap_or_default()
    }

    pub fn set_route(&mut self, route: &str) -> Result<(), FormError> {
        if self.city.is_none() {
            return Err(FormError::MissingDependency {
                field: "route".to_string(),
                depends_on: "city".to_string(),
            });
        }
        if !self.route_options().iter().any(|r| r == route) {
            return Err(FormError::UnknownOption {
                field: "route".to_string(),
                value: route.to_string(),
            });
        }
        self.route = Some(route.to_string());
        Ok(())
    }

    /// Offer another time slot. Empty or already offered slots are ignored.
    ///
    /// Returns `true` if the slot was added.
    pub fn add_time_slot(&mut self, slot: &str) -> bool {
        let slot = slot.trim();
        if slot.is_empty() || self.time_slots.iter().any(|s| s == slot) {
            return false;
        }
        self.time_slots.push(slot.to_string());
        true
    }

    /// Stop offering time slot `index`. A chosen slot that is removed is unset.
    pub fn delete_time_slot(&mut self, index: usize) -> Result<String, FormError> {
        if index >= self.time_slots.len() {
            return Err(FormError::NoSuchLine(index));
        }
        let removed = self.time_slots.remove(index);
        if self.time_slot.as_deref() == Some(removed.as_str()) {
            self.time_slot = None;
        }
        Ok(removed)
    }

    pub fn set_time_slot(&mut self, slot: &str) -> Result<(), FormError> {
        if !self.time_slots.iter().any(|s| s == slot) {
            return Err(FormError::UnknownOption {
                field: "deliveryTimeSlot".to_string(),
                value: slot.to_string(),
            });
        }
        self.time_slot = Some(slot.to_string());
        Ok(())
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    // -------------------------------------------------------------------------
    // Submit
    // -------------------------------------------------------------------------

    /// Validate the form and produce the change to apply.
    pub fn submit(&self) -> Result<DeliveryChange, FormError> {
        if self.is_overweight() {
            return Err(FormError::WeightLimit {
                total_g: self.total_weight_g(),
                max_g: self.max_weight_g,
            });
        }

        let unnamed_item = self.items.iter().any(|i| i.name.trim().is_empty());
        let unnamed_addon = self.addons.iter().any(|a| a.name.is_empty());
        Validator::new()
            .field("city", &self.city)
            .selected("City is required")
            .field("route", &self.route)
            .selected("Route is required")
            .field("deliveryTimeSlot", &self.time_slot)
            .selected("Delivery time slot is required")
            .field("bagItems", &unnamed_item)
            .rule(|&v| !v, "Every item needs a name")
            .field("addOns", &unnamed_addon)
            .rule(|&v| !v, "Choose an item for every add-on")
            .validate()?;

        Ok(DeliveryChange {
            order_id: self.order_id,
            items: self.items.iter().map(OrderedItem::from).collect(),
            addons: self.addons.clone(),
            city: self.city.clone().unwrap_or_default(),
            route: self.route.clone().unwrap_or_default(),
            time_slot: self.time_slot.clone().unwrap_or_default(),
            description: self.description.clone(),
            total_amount: self.total_amount(),
            total_weight_g: self.total_weight_g(),
            net_price: self.net_price(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn form() -> DeliveryForm {
        let order = fixtures::orders().remove(0);
        DeliveryForm::new(&order, fixtures::catalog(), fixtures::cities())
    }

    #[test]
    fn test_totals_follow_lines() {
        let mut form = form();
        assert_eq!(form.total_weight_g(), 8300);
        assert_eq!(form.total_amount(), Money::from_int(2_265));
        form.set_required_units(0, 3).unwrap();
        assert_eq!(form.total_weight_g(), 10_300);
        assert_eq!(form.total_amount(), Money::from_int(2_325));
    }

    #[test]
    fn test_units_outside_range_are_rejected() {
        let mut form = form();
        let before = form.items().to_vec();
        assert_eq!(
            form.set_required_units(2, 2),
            Err(FormError::OutOfRange {
                field: "requiredUnits".into(),
                min: 3,
                max: 10,
                value: 2
            })
        );
        assert_eq!(form.items(), before.as_slice());
        assert!(matches!(
            form.input_required_units(2, "four"),
            Err(FormError::NotANumber { .. })
        ));
        assert_eq!(form.set_required_units(99, 1), Err(FormError::NoSuchLine(99)));
    }

    #[test]
    fn test_add_item_stops_at_weight_limit() {
        let mut form = form();
        assert_eq!(form.add_item(), Ok(10));
        form.set_required_units(0, 2).unwrap();
        form.set_required_units(1, 4).unwrap();
        assert!(form.total_weight_g() >= form.max_weight_g());
        assert!(matches!(form.add_item(), Err(FormError::WeightLimit { .. })));
        assert_eq!(form.items().len(), 11);
    }

    #[test]
    fn test_overweight_form_cannot_save() {
        let mut form = form();
        form.set_required_units(8, 5).unwrap();
        assert!(form.total_weight_g() > form.max_weight_g());
        assert!(!form.can_save());
        assert!(matches!(form.submit(), Err(FormError::WeightLimit { .. })));
    }

    #[test]
    fn test_unit_heavier_than_bag_is_rejected() {
        let mut form = form();
        let i = form.add_item().unwrap();
        assert_eq!(
            form.describe_item(i, "Pumpkin", Money::from_int(1), u32::MAX),
            Err(FormError::OutOfRange {
                field: "unitQuantity".into(),
                min: 0,
                max: 10_000,
                value: u32::MAX
            })
        );
        assert_eq!(form.items()[i].unit_quantity_g, 0);
        assert_eq!(form.total_weight_g(), 8300);
    }

    #[test]
    fn test_huge_line_weight_saturates() {
        let mut order = fixtures::orders().remove(0);
        let mut pumpkin = order.bag_items[0].clone();
        pumpkin.name = "Pumpkin".into();
        pumpkin.unit_quantity_g = u32::MAX;
        pumpkin.required_units = 1;
        order.bag_items.push(pumpkin);

        let form = DeliveryForm::new(&order, fixtures::catalog(), fixtures::cities());
        assert_eq!(form.total_weight_g(), u32::MAX);
        assert!(form.is_overweight());
        assert!(!form.can_save());
        assert!(matches!(form.submit(), Err(FormError::WeightLimit { .. })));
    }

    #[test]
    fn test_choosing_addon_copies_catalog_entry() {
        let mut form = form();
        let i = form.add_addon();
        form.choose_addon(i, "Cucumber").unwrap();
        let line = &form.addons()[i];
        assert_eq!(line.price, Money::from_int(100));
        assert_eq!(line.unit_quantity_g, 300);
        assert_eq!(line.required_units, 2);
        assert_eq!(form.addon_amount(), Money::from_int(200));
        assert_eq!(form.addon_weight_g(), 600);
        assert_eq!(form.net_price(), Money::from_int(200));
        assert!(form.choose_addon(i, "Durian").is_err());
    }

    #[test]
    fn test_net_price_override() {
        let mut form = form();
        let i = form.add_addon();
        form.choose_addon(i, "Carrot").unwrap();
        form.set_net_price("150.50").unwrap();
        assert_eq!(form.net_price().to_string(), "₹150.5");
        form.reset_net_price();
        assert_eq!(form.net_price(), Money::from_int(200));
    }

    #[test]
    fn test_changing_city_resets_route() {
        let mut form = form();
        assert!(form.route_options().is_empty());
        assert!(matches!(
            form.set_route("Route 1"),
            Err(FormError::MissingDependency { .. })
        ));
        form.set_city("City A").unwrap();
        assert_eq!(form.route_options(), ["Route 1", "Route 2", "Route 3"]);
        form.set_route("Route 2").unwrap();
        form.set_city("City B").unwrap();
        assert_eq!(form.route(), None);
        assert!(form.set_route("Route 2").is_err());
    }

    #[test]
    fn test_time_slots_ignore_blank_and_duplicates() {
        let mut form = form();
        assert!(!form.add_time_slot(""));
        assert!(!form.add_time_slot("9:00 AM - 11:00 AM"));
        assert!(form.add_time_slot("6:00 PM - 8:00 PM"));
        assert_eq!(form.time_slots().len(), 4);
        form.set_time_slot("6:00 PM - 8:00 PM").unwrap();
        assert_eq!(form.delete_time_slot(3).unwrap(), "6:00 PM - 8:00 PM");
        assert_eq!(form.time_slot(), None);
    }

    #[test]
    fn test_submit_requires_destination_and_slot() {
        let mut form = form();
        let err = form.submit().unwrap_err();
        let fields: Vec<_> = err.field_errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["city", "route", "deliveryTimeSlot"]);

        form.set_city("City C").unwrap();
        form.set_route("Route 8").unwrap();
        form.set_time_slot("12:00 PM - 2:00 PM").unwrap();
        form.set_description("Gate code 4512");
        let change = form.submit().unwrap();
        assert_eq!(change.order_id, 101);
        assert_eq!(change.route, "Route 8");
        assert_eq!(change.items.len(), 10);
        assert_eq!(change.total_weight_g, 8300);
    }

    #[test]
    fn test_blank_item_blocks_submit() {
        let mut form = form();
        form.set_city("City A").unwrap();
        form.set_route("Route 1").unwrap();
        form.set_time_slot("9:00 AM - 11:00 AM").unwrap();
        let i = form.add_item().unwrap();
        assert!(form.submit().is_err());
        form.describe_item(i, "Beans", Money::from_int(40), 250).unwrap();
        assert!(form.submit().is_ok());
    }
}
