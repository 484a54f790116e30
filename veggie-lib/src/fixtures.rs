//! Seed data for the in-memory store and the demo CLI.

use chrono::NaiveDate;
use gridkit::Money;

use crate::model::*;

/// Time slots offered by the delivery modification form.
pub const DELIVERY_TIME_SLOTS: [&str; 3] = [
    "9:00 AM - 11:00 AM",
    "12:00 PM - 2:00 PM",
    "3:00 PM - 5:00 PM",
];

/// Time slots offered when editing a single scheduled delivery.
pub const ORDER_TIME_SLOTS: [&str; 3] = ["8am - 10am", "10am - 12pm", "12pm - 2pm"];

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn rs(amount: i64) -> Money {
    Money::from_int(amount)
}

fn s(text: &str) -> String {
    text.to_string()
}

/// Everything the store starts with.
#[derive(Debug, Clone, Default)]
pub struct Seed {
    pub orders: Vec<Order>,
    pub employees: Vec<Employee>,
    pub zones: Vec<Zone>,
    pub vehicles: Vec<Vehicle>,
    pub cities: Vec<City>,
    pub notifications: Vec<Notification>,
    pub complaints: Vec<Complaint>,
    pub customers: Vec<Customer>,
    pub bags: Vec<Bag>,
    pub catalog: Vec<CatalogItem>,
}

pub fn seed() -> Seed {
    Seed {
        orders: orders(),
        employees: employees(),
        zones: zones(),
        vehicles: vehicles(),
        cities: cities(),
        notifications: notifications(),
        complaints: complaints(),
        customers: customers(),
        bags: bags(),
        catalog: catalog(),
    }
}

fn item(name: &str, price: i64, unit_g: u32, min: u32, max: u32, units: u32) -> OrderedItem {
    OrderedItem {
        name: s(name),
        price: rs(price),
        unit_quantity_g: unit_g,
        min_units: min,
        max_units: max,
        required_units: units,
    }
}

fn delivery(d: NaiveDate, slot: &str, status: DeliveryStatus, charges: i64) -> Delivery {
    Delivery {
        date: d,
        time_slot: s(slot),
        status,
        assigned_employee: s("Shivam Singh"),
        assigned_route: s("Route 1"),
        delivery_charges: rs(charges),
    }
}

pub fn orders() -> Vec<Order> {
    vec![
        Order {
            order_id: 101,
            emp_id: 1022,
            employee_name: s("Shivam Singh"),
            customer_name: s("Deepak Singh"),
            payment_type: s("Credit Card"),
            deliveries: vec![
                delivery(date(2023, 7, 17), "10am - 12pm", DeliveryStatus::Delivered, 200),
                delivery(date(2023, 7, 18), "9am - 11am", DeliveryStatus::Pending, 0),
                delivery(date(2023, 7, 23), "9am - 11am", DeliveryStatus::Pending, 0),
                delivery(date(2023, 7, 27), "9am - 11am", DeliveryStatus::Pending, 0),
            ],
            bags_ordered: vec![s("Regular Veggie Bag")],
            bag_items: vec![
                item("Potato", 30, 1000, 1, 30, 1),
                item("Onions", 25, 500, 1, 50, 1),
                item("Tomatoes", 50, 1000, 3, 10, 3),
                item("Garlic", 300, 1000, 1, 4, 1),
                item("Ginger", 200, 200, 1, 3, 1),
                item("Coriander", 30, 100, 1, 3, 1),
                item("Mint", 300, 200, 1, 3, 1),
                item("Lemons", 30, 100, 1, 3, 1),
                item("Chillies", 300, 1000, 2, 30, 2),
                item("Amla", 300, 100, 2, 5, 2),
            ],
            max_weight_g: 10_000,
            total_price: rs(779),
            addons: vec![s("Lemons")],
            payment_status: PaymentStatus::Paid,
            subscription: SubscriptionState::Paused,
            special_instructions: s("Leave the package at the front door."),
        },
        Order {
            order_id: 102,
            emp_id: 1023,
            employee_name: s("Jane Doe"),
            customer_name: s("Bob Brown"),
            payment_type: s("UPI"),
            deliveries: vec![
                Delivery {
                    assigned_employee: s("Jane Doe"),
                    assigned_route: s("Route 2"),
                    ..delivery(date(2024, 6, 10), "8am - 10am", DeliveryStatus::Delivered, 0)
                },
                Delivery {
                    assigned_employee: s("Jane Doe"),
                    assigned_route: s("Route 2"),
                    ..delivery(date(2024, 7, 20), "8am - 10am", DeliveryStatus::Pending, 0)
                },
            ],
            bags_ordered: vec![s("Mini Veggie Bag")],
            bag_items: vec![
                item("Spinach", 100, 250, 1, 4, 1),
                item("Onions", 100, 500, 1, 6, 1),
                item("Garlic", 100, 100, 1, 3, 1),
            ],
            max_weight_g: 5_000,
            total_price: rs(459),
            addons: vec![s("Bananas")],
            payment_status: PaymentStatus::Unpaid,
            subscription: SubscriptionState::Playing,
            special_instructions: s("Ring the bell upon arrival."),
        },
        Order {
            order_id: 103,
            emp_id: 1024,
            employee_name: s("John Smith"),
            customer_name: s("Alice Johnson"),
            payment_type: s("Cash"),
            deliveries: vec![Delivery {
                assigned_employee: s("John Smith"),
                assigned_route: s("Route 3"),
                ..delivery(date(2024, 6, 12), "12pm - 2pm", DeliveryStatus::Cancelled, 0)
            }],
            bags_ordered: vec![s("Mixed Greens Bag")],
            bag_items: vec![
                item("Lettuce", 80, 250, 1, 4, 2),
                item("Cucumber", 100, 300, 2, 5, 2),
            ],
            max_weight_g: 7_000,
            total_price: rs(569),
            addons: vec![s("Cucumbers")],
            payment_status: PaymentStatus::Paid,
            subscription: SubscriptionState::Playing,
            special_instructions: s("Call before delivery."),
        },
    ]
}

fn employee(id: u32, first: &str, last: &str, role: Role, phone: &str, zone: Option<&str>) -> Employee {
    Employee {
        id,
        first_name: s(first),
        last_name: s(last),
        role,
        contact_information: ContactInformation {
            phone: s(phone),
            email: format!("{}.{}@veggie.example", first.to_lowercase(), last.to_lowercase()),
        },
        assigned_zone: zone.map(s),
    }
}

pub fn employees() -> Vec<Employee> {
    vec![
        employee(1022, "Shivam", "Singh", Role::Technician, "123-456-7890", Some("North Zone")),
        employee(1023, "Jane", "Doe", Role::CustomerService, "234-567-8901", Some("South Zone")),
        employee(1024, "John", "Smith", Role::SupportStaff, "345-678-9012", Some("East Zone")),
        employee(1025, "Aman", "Gupta", Role::Technician, "456-789-0123", None),
        employee(1026, "Deepak", "Singh", Role::Manager, "567-890-1234", None),
        employee(1027, "John", "Doe", Role::SupportStaff, "678-901-2345", Some("West Zone")),
    ]
}

fn zone(id: u32, name: &str, city: &str, serviced: bool, seq: u32, cost: i64) -> Zone {
    Zone {
        id,
        zone_name: s(name),
        city: s(city),
        serviced,
        delivery_sequence: seq,
        delivery_cost: rs(cost),
    }
}

pub fn zones() -> Vec<Zone> {
    vec![
        zone(1, "North Zone", "City A", true, 1, 40),
        zone(2, "South Zone", "City A", true, 2, 50),
        zone(3, "East Zone", "City B", true, 1, 30),
        zone(4, "West Zone", "City B", false, 2, 60),
        zone(5, "Central Zone", "City C", true, 1, 25),
    ]
}

pub fn vehicles() -> Vec<Vehicle> {
    let vehicle = |id: u32, reg: &str, kind: &str, driver: &str, cap: u32, zone: &str, status: Status| Vehicle {
        id,
        registration_number: s(reg),
        vehicle_type: s(kind),
        driver_name: s(driver),
        capacity_kg: cap,
        zone: s(zone),
        status,
    };
    vec![
        vehicle(1, "MH12AB1234", "Van", "Shivam Singh", 500, "North Zone", Status::Active),
        vehicle(2, "MH12CD5678", "Bike", "John Doe", 40, "West Zone", Status::Active),
        vehicle(3, "MH14EF9012", "Truck", "Aman Gupta", 1500, "East Zone", Status::Inactive),
    ]
}

pub fn cities() -> Vec<City> {
    let city = |name: &str, state: &str, routes: [&str; 3]| City {
        name: s(name),
        state: s(state),
        routes: routes.iter().map(|r| s(r)).collect(),
    };
    vec![
        city("City A", "Maharashtra", ["Route 1", "Route 2", "Route 3"]),
        city("City B", "Maharashtra", ["Route 4", "Route 5", "Route 6"]),
        city("City C", "Karnataka", ["Route 7", "Route 8", "Route 9"]),
    ]
}

pub fn notifications() -> Vec<Notification> {
    let notification = |id: u32, heading: &str, category: &str, kind: &str, schedule: &str, time: &str, description: &str| {
        Notification {
            id,
            image: format!("/images/notifications/{id}.png"),
            heading: s(heading),
            category: s(category),
            notification_type: s(kind),
            schedule_type: s(schedule),
            schedule_time: s(time),
            description: s(description),
        }
    };
    vec![
        notification(1, "Fresh mangoes are here", "Promotion", "Push", "One time", "2024-06-01 09:00", "Add mangoes to your next bag."),
        notification(2, "Delivery delayed", "Service", "SMS", "Immediate", "2024-06-03 12:30", "Heavy rain is delaying deliveries in City B."),
        notification(3, "Weekly reminder", "Reminder", "Push", "Recurring", "Every Monday 08:00", "Edit your bag before Tuesday noon."),
    ]
}

pub fn complaints() -> Vec<Complaint> {
    vec![
        Complaint {
            complaint_id: 1,
            user_id: 1,
            customer_name: s("Alice Johnson"),
            delivery_date_slot: s("11/JUN/2024"),
            complaint_type: ComplaintType::Delay,
            description: s("Delivery arrived two hours late."),
            status: Status::Active,
            resolution: None,
        },
        Complaint {
            complaint_id: 2,
            user_id: 2,
            customer_name: s("Bob Brown"),
            delivery_date_slot: s("10/JUN/2024"),
            complaint_type: ComplaintType::BadQuality,
            description: s("Tomatoes were overripe."),
            status: Status::Inactive,
            resolution: Some(s("Refunded tomatoes")),
        },
    ]
}

pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: 1,
            order_id: 101,
            emp_id: 1022,
            name: s("Alice Johnson"),
            phone_number: s("123-456-7890"),
            assigned_employee: s("Deepak Singh"),
            assigned_route: s("Route 1"),
            subscription_type: s("Biweekly Regular Veggie"),
            total_weight_g: 10_000,
            total_price: rs(779),
            add_ons: s("Lemons"),
            special_instructions: s("Leave the package at the front door."),
            delivery_dates: vec![s("11/JUN/2024"), s("17/MAR/2024"), s("21/JUL/2024")],
        },
        Customer {
            id: 2,
            order_id: 102,
            emp_id: 1023,
            name: s("Bob Brown"),
            phone_number: s("098-765-4321"),
            assigned_employee: s("Jane Doe"),
            assigned_route: s("Route 2"),
            subscription_type: s("Biweekly Mini Veggie"),
            total_weight_g: 5_000,
            total_price: rs(459),
            add_ons: s("Bananas"),
            special_instructions: s("Ring the bell upon arrival."),
            delivery_dates: vec![s("10/JUN/2024"), s("15/MAR/2024"), s("20/JUL/2024")],
        },
        Customer {
            id: 3,
            order_id: 103,
            emp_id: 1024,
            name: s("Deepak Singh"),
            phone_number: s("123-123-1234"),
            assigned_employee: s("John Smith"),
            assigned_route: s("Route 3"),
            subscription_type: s("Mixed Greens Bag"),
            total_weight_g: 7_000,
            total_price: rs(569),
            add_ons: s("Cucumbers"),
            special_instructions: s("Call before delivery."),
            delivery_dates: vec![s("12/JUN/2024"), s("18/MAR/2024"), s("22/JUL/2024")],
        },
    ]
}

fn by_weight(name: &str, price: i64, kg: u32) -> BagItem {
    BagItem {
        item_name: s(name),
        item_price: rs(price),
        item_pieces: None,
        item_weight: Some(kg),
    }
}

fn by_piece(name: &str, price: i64, pieces: u32) -> BagItem {
    BagItem {
        item_name: s(name),
        item_price: rs(price),
        item_pieces: Some(pieces),
        item_weight: None,
    }
}

pub fn bags() -> Vec<Bag> {
    let small_items = || {
        vec![
            by_piece("Spinach", 100, 1),
            by_piece("Onions", 100, 1),
            by_piece("Garlic", 100, 1),
        ]
    };
    vec![
        Bag {
            bag_name: s("Regular Veggie Bag"),
            bag_items: vec![
                by_weight("Carrots", 100, 1),
                by_weight("Potatoes", 200, 2),
                by_weight("Tomatoes", 200, 2),
            ],
            total_price: rs(500),
            total_weight: Some(5),
            total_pieces: None,
            created_date: date(2023, 1, 1),
            updated_date: None,
            status: Status::Active,
            created_by: Creator {
                role: s("Admin"),
                name: s("Deepak singh"),
            },
            visibility: Some(s("Admin")),
        },
        Bag {
            bag_name: s("Mini Veggie Bag"),
            bag_items: small_items(),
            total_price: rs(300),
            total_weight: None,
            total_pieces: Some(3),
            created_date: date(2023, 7, 1),
            updated_date: None,
            status: Status::Inactive,
            created_by: Creator {
                role: s("Customer"),
                name: s("John Doe"),
            },
            visibility: Some(s("Customer")),
        },
        Bag {
            bag_name: s("Veggie Bag"),
            bag_items: small_items(),
            total_price: rs(300),
            total_weight: None,
            total_pieces: Some(3),
            created_date: date(2023, 7, 1),
            updated_date: None,
            status: Status::Inactive,
            created_by: Creator {
                role: s("Employee"),
                name: s("John roy"),
            },
            visibility: Some(s("Admin")),
        },
    ]
}

pub fn catalog() -> Vec<CatalogItem> {
    let entry = |name: &str, price: i64, unit_g: u32, min: u32, max: u32| CatalogItem {
        name: s(name),
        price: rs(price),
        unit_quantity_g: unit_g,
        min_units: min,
        max_units: max,
    };
    vec![
        entry("Carrot", 200, 500, 1, 5),
        entry("Cucumber", 100, 300, 2, 5),
        entry("Ladyfinger", 300, 1000, 1, 3),
    ]
}
