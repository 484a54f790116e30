use chrono::NaiveDate;
use veggie_lib::forms::order::EmployeeOption;
use veggie_lib::forms::{ComplaintForm, DeliveryForm, OrderView};
use veggie_lib::model::{DeliveryStatus, Order, SubscriptionState};
use veggie_lib::{tables, AdminStore, MemoryStore, StoreError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ============================================================================
// Listing and search
// ============================================================================

#[tokio::test]
async fn test_zone_page_lists_store_records() {
    let store = MemoryStore::seeded();
    let zones = store.zones().await;
    let page = tables::zones().unwrap();
    assert_eq!(page.heading(zones.len()), "Zones (5)");

    let mut table = page.into_table(zones);
    table.set_query("city b");
    assert_eq!(table.filtered_rows().len(), 2);
}

#[tokio::test]
async fn test_search_refetch_replaces_table_records() {
    let store = MemoryStore::seeded();
    let mut table = tables::employees().unwrap().into_table(store.employees().await);
    table.toggle_row("1022");
    table.toggle_row("1023");

    let found = store.search_employees("singh").await;
    assert_eq!(found.len(), 2);
    table.replace_records(found);
    assert_eq!(table.selection().selected(), vec!["1022".to_string()]);
    assert_eq!(table.selection_summary(), "1 of 2 row(s) selected.");
}

#[tokio::test]
async fn test_vehicle_search_by_zone() {
    let store = MemoryStore::seeded();
    let found = store.search_vehicles("east").await;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].registration_number, "MH14EF9012");
    assert_eq!(store.search_zones("").await.len(), 5);
}

// ============================================================================
// Writes
// ============================================================================

#[tokio::test]
async fn test_complaint_form_saves_once() {
    let store = MemoryStore::seeded();
    let next_id = store.complaints().await.len() as u32 + 1;
    let mut form = ComplaintForm::new(store.customers().await, next_id);
    form.choose_customer(2).unwrap();
    form.choose_delivery_date("20/JUL/2024").unwrap();
    form.set_complaint_type("Delay").unwrap();
    form.set_description("Late again");
    let complaint = form.validate().unwrap();

    store.save_complaint(complaint.clone()).await.unwrap();
    assert_eq!(store.complaints().await.len(), 3);
    assert_eq!(
        store.save_complaint(complaint).await,
        Err(StoreError::duplicate("complaint", 3))
    );
}

#[tokio::test]
async fn test_delivery_edit_is_stored() {
    let store = MemoryStore::seeded();
    let view = OrderView::new(store.order(101).await.unwrap()).unwrap();
    let employees = store.employees().await.iter().map(EmployeeOption::from).collect();
    let routes = store.cities().await.remove(0).routes;
    let allowed = veggie_lib::forms::order::parse_weekdays(&["MONDAY", "WEDNESDAY"]);

    let mut edit = view.edit("2023-07-27", allowed, employees, routes).unwrap();
    edit.pick_date(date(2023, 7, 29), date(2023, 7, 20)).unwrap();
    edit.set_status(DeliveryStatus::Cancelled);
    let update = edit.save();

    let order = store
        .update_delivery(update.order_id, update.scheduled, update.delivery)
        .await
        .unwrap();
    let moved = order.delivery(date(2023, 7, 29)).unwrap();
    assert_eq!(moved.status, DeliveryStatus::Cancelled);
    assert_eq!(moved.delivery_charges.to_string(), "₹200");
    assert!(order.delivery(date(2023, 7, 27)).is_none());
}

#[tokio::test]
async fn test_delivery_cannot_land_on_another_delivery() {
    let store = MemoryStore::seeded();
    let mut order = store.order(101).await.unwrap();
    let mut delivery = order.delivery(date(2023, 7, 18)).unwrap().clone();
    delivery.date = date(2023, 7, 23);

    assert_eq!(
        store.update_delivery(101, date(2023, 7, 18), delivery).await,
        Err(StoreError::duplicate("delivery", date(2023, 7, 23)))
    );
    assert_eq!(store.order(101).await.unwrap(), order);

    // Keeping the date while changing other fields is fine.
    let mut same_day = order.deliveries.remove(1);
    same_day.status = DeliveryStatus::Cancelled;
    let saved = store
        .update_delivery(101, date(2023, 7, 18), same_day)
        .await
        .unwrap();
    let mut table = tables::deliveries().unwrap().into_table(saved.deliveries);
    table.toggle_row("2023-07-23");
    assert_eq!(table.selection_summary(), "1 of 4 row(s) selected.");
}

#[tokio::test]
async fn test_delivery_form_change_is_stored() {
    let store = MemoryStore::seeded();
    let order = store.order(101).await.unwrap();
    let mut form = DeliveryForm::new(&order, store.catalog().await, store.cities().await);
    form.remove_item(9).unwrap();
    form.set_city("City A").unwrap();
    form.set_route("Route 3").unwrap();
    form.set_time_slot("3:00 PM - 5:00 PM").unwrap();
    let change = form.submit().unwrap();

    let addons = change.addons.iter().map(|a| a.name.clone()).collect();
    let saved = store
        .save_order_items(change.order_id, change.items, addons)
        .await
        .unwrap();
    assert_eq!(saved.bag_items.len(), 9);
    assert!(saved.addons.is_empty());
}

#[tokio::test]
async fn test_unknown_order_is_not_found() {
    let store = MemoryStore::seeded();
    assert_eq!(
        store.set_subscription(999, SubscriptionState::Paused).await,
        Err(StoreError::not_found("order", 999))
    );
    let order = store.set_subscription(101, SubscriptionState::Playing).await.unwrap();
    assert_eq!(order.subscription, SubscriptionState::Playing);
}

// ============================================================================
// Serialization
// ============================================================================

#[tokio::test]
async fn test_order_json_uses_camel_case_and_round_trips() {
    let store = MemoryStore::seeded();
    let order = store.order(101).await.unwrap();

    let json = serde_json::to_value(&order).unwrap();
    assert_eq!(json["orderId"], 101);
    assert_eq!(json["maxWeightG"], order.max_weight_g);
    assert_eq!(json["subscription"], "Paused");
    assert_eq!(json["deliveries"][1]["date"], "2023-07-18");
    assert!(json["bagItems"][0]["unitQuantityG"].is_u64());

    let back: Order = serde_json::from_value(json).unwrap();
    assert_eq!(back, order);
}
