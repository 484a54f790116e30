//! Order view: delivery checklist, subscription pause/play and the
//! single-delivery edit dialog.

use chrono::{Datelike, NaiveDate, Weekday};
use gridkit::{DataTable, TableError, TableRow};
use log::{debug, warn};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::FormError;
use crate::fixtures::ORDER_TIME_SLOTS;
use crate::model::{Delivery, DeliveryStatus, Employee, Money, Order, SubscriptionState};
use crate::tables;

/// Charge applied when a delivery is moved off the order's delivery days.
pub const DEFAULT_EXTRA_CHARGE: i64 = 200;

/// Parse a weekday name such as `MONDAY` or `wed`.
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    name.trim().parse::<Weekday>().ok()
}

/// Parse weekday names, skipping unknown ones.
pub fn parse_weekdays<S: AsRef<str>>(names: &[S]) -> Vec<Weekday> {
    names
        .iter()
        .filter_map(|n| {
            let day = parse_weekday(n.as_ref());
            if day.is_none() {
                warn!("ignoring unknown weekday {:?}", n.as_ref());
            }
            day
        })
        .collect()
}

/// Whether `date` falls on one of the allowed delivery days.
pub fn is_highlighted(date: NaiveDate, allowed_days: &[Weekday]) -> bool {
    allowed_days.contains(&date.weekday())
}

/// An employee as offered by the assignee picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeOption {
    pub name: String,
    pub phone: String,
}

impl EmployeeOption {
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.phone)
    }
}

impl From<&Employee> for EmployeeOption {
    fn from(employee: &Employee) -> Self {
        Self {
            name: employee.full_name(),
            phone: employee.contact_information.phone.clone(),
        }
    }
}

/// Options whose name contains `query` case-insensitively or whose phone contains it.
pub fn search_employee_options<'a>(
    options: &'a [EmployeeOption],
    query: &str,
) -> Vec<&'a EmployeeOption> {
    let needle = query.to_lowercase();
    options
        .iter()
        .filter(|o| o.name.to_lowercase().contains(&needle) || o.phone.contains(query))
        .collect()
}

/// A saved delivery edit, ready to hand to the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryUpdate {
    pub order_id: u32,
    /// Date the delivery was scheduled on before the edit.
    pub scheduled: NaiveDate,
    pub delivery: Delivery,
}

/// Edit dialog for one scheduled delivery.
#[derive(Debug, Clone)]
pub struct DeliveryEdit {
    order_id: u32,
    scheduled: NaiveDate,
    delivery: Delivery,
    allowed_days: Vec<Weekday>,
    /// Dates of the order's other deliveries.
    taken: Vec<NaiveDate>,
    extra_charges: Option<Money>,
    employees: Vec<EmployeeOption>,
    routes: Vec<String>,
}

impl DeliveryEdit {
    pub fn new(
        order_id: u32,
        delivery: Delivery,
        allowed_days: Vec<Weekday>,
        employees: Vec<EmployeeOption>,
        routes: Vec<String>,
    ) -> Self {
        Self {
            order_id,
            scheduled: delivery.date,
            delivery,
            allowed_days,
            taken: Vec::new(),
            extra_charges: None,
            employees,
            routes,
        }
    }

    /// Dates that `pick_date` refuses because another delivery occupies them.
    pub fn with_taken_dates(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        let scheduled = self.scheduled;
        self.taken = dates.into_iter().filter(|d| *d != scheduled).collect();
        self
    }

    pub fn delivery(&self) -> &Delivery {
        &self.delivery
    }

    /// Extra charges for a date off the delivery days, if any.
    pub fn extra_charges(&self) -> Option<Money> {
        self.extra_charges
    }

    pub fn employees(&self) -> &[EmployeeOption] {
        &self.employees
    }

    pub fn is_highlighted(&self, date: NaiveDate) -> bool {
        is_highlighted(date, &self.allowed_days)
    }

    /// Move the delivery to `date`.
    ///
    /// Dates before `today` are rejected. A date off the delivery days
    /// carries [`DEFAULT_EXTRA_CHARGE`]; a delivery day clears extra charges.
    pub fn pick_date(&mut self, date: NaiveDate, today: NaiveDate) -> Result<(), FormError> {
        if date < today {
            warn!("delivery date {date} rejected, today is {today}");
            return Err(FormError::PastDate(date));
        }
        if self.taken.contains(&date) {
            warn!("delivery date {date} already taken");
            return Err(FormError::DateTaken(date));
        }
        self.delivery.date = date;
        self.extra_charges = if self.is_highlighted(date) {
            None
        } else {
            Some(Money::from_int(DEFAULT_EXTRA_CHARGE))
        };
        debug!("delivery moved to {date}, extra charges {:?}", self.extra_charges);
        Ok(())
    }

    /// Change the extra charges. Only allowed while some are in effect.
    pub fn set_extra_charges(&mut self, input: &str) -> Result<(), FormError> {
        if self.extra_charges.is_none() {
            return Err(FormError::NoExtraCharges);
        }
        let amount = input
            .trim()
            .parse::<Decimal>()
            .map_err(|_| FormError::NotANumber {
                field: "extraCharges".to_string(),
                input: input.to_string(),
            })?;
        self.extra_charges = Some(Money::new(amount));
        Ok(())
    }

    pub fn set_time_slot(&mut self, slot: &str) -> Result<(), FormError> {
        if !ORDER_TIME_SLOTS.contains(&slot) {
            return Err(FormError::UnknownOption {
                field: "deliveryTimeSlot".to_string(),
                value: slot.to_string(),
            });
        }
        self.delivery.time_slot = slot.to_string();
        Ok(())
    }

    pub fn set_status(&mut self, status: DeliveryStatus) {
        self.delivery.status = status;
    }

    pub fn set_employee(&mut self, name: &str) -> Result<(), FormError> {
        if !self.employees.iter().any(|e| e.name == name) {
            return Err(FormError::UnknownOption {
                field: "assignedEmployee".to_string(),
                value: name.to_string(),
            });
        }
        self.delivery.assigned_employee = name.to_string();
        Ok(())
    }

    pub fn set_route(&mut self, route: &str) -> Result<(), FormError> {
        if !self.routes.iter().any(|r| r == route) {
            return Err(FormError::UnknownOption {
                field: "assignedRoute".to_string(),
                value: route.to_string(),
            });
        }
        self.delivery.assigned_route = route.to_string();
        Ok(())
    }

    /// Finish editing. Extra charges in effect become the delivery charges.
    pub fn save(self) -> DeliveryUpdate {
        let mut delivery = self.delivery;
        if let Some(extra) = self.extra_charges {
            delivery.delivery_charges = extra;
        } else if delivery.date != self.scheduled {
            delivery.delivery_charges = Money::default();
        }
        DeliveryUpdate {
            order_id: self.order_id,
            scheduled: self.scheduled,
            delivery,
        }
    }
}

/// An order with its delivery checklist.
pub struct OrderView {
    order: Order,
    checklist: DataTable<Delivery>,
}

impl OrderView {
    pub fn new(order: Order) -> Result<Self, TableError> {
        let checklist = tables::deliveries()?.into_table(order.deliveries.clone());
        Ok(Self { order, checklist })
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn checklist(&self) -> &DataTable<Delivery> {
        &self.checklist
    }

    /// Tick or untick the delivery on `date`. `None` if there is none.
    pub fn toggle_delivery(&mut self, date: NaiveDate) -> Option<bool> {
        self.checklist.toggle_row(&date.format("%Y-%m-%d").to_string())
    }

    /// Tick every delivery, or untick all if all are ticked.
    pub fn toggle_all_deliveries(&mut self) -> bool {
        self.checklist.toggle_all()
    }

    pub fn selected_deliveries(&self) -> Vec<&Delivery> {
        self.checklist.selected_rows()
    }

    pub fn all_selected(&self) -> bool {
        self.checklist.select_all_state().all_selected
    }

    pub fn subscription(&self) -> SubscriptionState {
        self.order.subscription
    }

    pub fn is_paused(&self) -> bool {
        self.order.subscription == SubscriptionState::Paused
    }

    pub fn pause(&mut self) {
        self.order.subscription = SubscriptionState::Paused;
    }

    pub fn play(&mut self) {
        self.order.subscription = SubscriptionState::Playing;
    }

    /// Flip between paused and playing and return the new state.
    pub fn toggle_subscription(&mut self) -> SubscriptionState {
        if self.is_paused() {
            self.play();
        } else {
            self.pause();
        }
        debug!("order {}: subscription {}", self.order.order_id, self.order.subscription);
        self.order.subscription
    }

    /// Open the edit dialog for the delivery with `key`.
    pub fn edit(
        &self,
        key: &str,
        allowed_days: Vec<Weekday>,
        employees: Vec<EmployeeOption>,
        routes: Vec<String>,
    ) -> Option<DeliveryEdit> {
        let delivery = self
            .order
            .deliveries
            .iter()
            .find(|d| d.row_key() == key)?
            .clone();
        let taken = self.order.deliveries.iter().map(|d| d.date);
        Some(
            DeliveryEdit::new(self.order.order_id, delivery, allowed_days, employees, routes)
                .with_taken_dates(taken),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn allowed() -> Vec<Weekday> {
        parse_weekdays(&["MONDAY", "WEDNESDAY"])
    }

    fn edit() -> DeliveryEdit {
        let order = fixtures::orders().remove(0);
        let employees = fixtures::employees().iter().map(EmployeeOption::from).collect();
        let routes = vec!["Route 1".to_string(), "Route 2".to_string(), "Route 3".to_string()];
        OrderView::new(order)
            .unwrap()
            .edit("2023-07-18", allowed(), employees, routes)
            .unwrap()
    }

    #[test]
    fn test_weekday_names_parse() {
        assert_eq!(parse_weekday("MONDAY"), Some(Weekday::Mon));
        assert_eq!(parse_weekday("wednesday"), Some(Weekday::Wed));
        assert_eq!(parse_weekday("someday"), None);
        assert_eq!(parse_weekdays(&["FRIDAY", "nope"]), vec![Weekday::Fri]);
    }

    #[test]
    fn test_delivery_days_are_highlighted() {
        // 2023-07-17 was a Monday.
        assert!(is_highlighted(date(2023, 7, 17), &allowed()));
        assert!(!is_highlighted(date(2023, 7, 18), &allowed()));
        assert!(is_highlighted(date(2023, 7, 19), &allowed()));
        assert!(!is_highlighted(date(2023, 7, 19), &[]));
    }

    #[test]
    fn test_past_dates_are_rejected() {
        let mut edit = edit();
        let today = date(2023, 7, 20);
        assert_eq!(
            edit.pick_date(date(2023, 7, 19), today),
            Err(FormError::PastDate(date(2023, 7, 19)))
        );
        assert_eq!(edit.delivery().date, date(2023, 7, 18));
        assert!(edit.pick_date(today, today).is_ok());
    }

    #[test]
    fn test_occupied_date_is_rejected() {
        let mut edit = edit();
        let today = date(2023, 7, 1);
        assert_eq!(
            edit.pick_date(date(2023, 7, 23), today),
            Err(FormError::DateTaken(date(2023, 7, 23)))
        );
        assert_eq!(edit.delivery().date, date(2023, 7, 18));
        // Its own date is still free.
        assert!(edit.pick_date(date(2023, 7, 18), today).is_ok());
    }

    #[test]
    fn test_off_day_adds_extra_charge() {
        let mut edit = edit();
        let today = date(2023, 7, 1);
        edit.pick_date(date(2023, 7, 21), today).unwrap();
        assert_eq!(edit.extra_charges(), Some(Money::from_int(200)));
        edit.set_extra_charges("250").unwrap();
        edit.pick_date(date(2023, 7, 24), today).unwrap();
        assert_eq!(edit.extra_charges(), None);
        assert_eq!(edit.set_extra_charges("10"), Err(FormError::NoExtraCharges));
    }

    #[test]
    fn test_save_carries_extra_charges() {
        let mut edit = edit();
        edit.pick_date(date(2023, 7, 22), date(2023, 7, 1)).unwrap();
        edit.set_time_slot("12pm - 2pm").unwrap();
        edit.set_employee("Jane Doe").unwrap();
        edit.set_route("Route 3").unwrap();
        assert!(edit.set_time_slot("midnight").is_err());
        let update = edit.save();
        assert_eq!(update.scheduled, date(2023, 7, 18));
        assert_eq!(update.delivery.date, date(2023, 7, 22));
        assert_eq!(update.delivery.delivery_charges, Money::from_int(200));
        assert_eq!(update.delivery.assigned_employee, "Jane Doe");
    }

    #[test]
    fn test_employee_options_search_name_or_phone() {
        let options: Vec<EmployeeOption> =
            fixtures::employees().iter().map(EmployeeOption::from).collect();
        let by_name = search_employee_options(&options, "SINGH");
        assert_eq!(by_name.len(), 2);
        let by_phone = search_employee_options(&options, "345-678");
        assert_eq!(by_phone[0].label(), "John Smith (345-678-9012)");
    }

    #[test]
    fn test_checklist_select_all_round_trips() {
        let mut view = OrderView::new(fixtures::orders().remove(0)).unwrap();
        assert_eq!(view.toggle_delivery(date(2023, 7, 23)), Some(true));
        assert_eq!(view.toggle_delivery(date(2023, 7, 24)), None);
        assert!(view.toggle_all_deliveries());
        assert_eq!(view.selected_deliveries().len(), 4);
        assert!(view.all_selected());
        assert!(!view.toggle_all_deliveries());
        assert!(view.selected_deliveries().is_empty());
    }

    #[test]
    fn test_pause_and_play() {
        let mut view = OrderView::new(fixtures::orders().remove(0)).unwrap();
        assert!(view.is_paused());
        assert_eq!(view.toggle_subscription(), SubscriptionState::Playing);
        view.pause();
        assert_eq!(view.subscription(), SubscriptionState::Paused);
        view.play();
        assert!(!view.is_paused());
    }
}
