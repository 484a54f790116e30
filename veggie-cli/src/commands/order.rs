//! `veggie order <id>`: delivery checklist, pause/play and delivery edits.

use chrono::{Local, Weekday};
use gridkit::text;
use log::info;
use serde::Serialize;
use veggie_lib::forms::order::{parse_weekdays, EmployeeOption};
use veggie_lib::forms::{DeliveryUpdate, OrderView};
use veggie_lib::model::{Order, SubscriptionState};

use super::Context;
use crate::cli::{OrderArgs, OutputFormat};
use crate::error::CliError;
use crate::output;

pub async fn run(cx: &Context<'_>, args: &OrderArgs) -> Result<String, CliError> {
    let store = cx.store;
    let mut order = store.order(args.order_id).await?;

    if args.pause || args.play {
        let state = if args.pause {
            SubscriptionState::Paused
        } else {
            SubscriptionState::Playing
        };
        order = store.set_subscription(order.order_id, state).await?;
        info!("order {}: subscription {state}", order.order_id);
    }

    let allowed_days = parse_weekdays(args.allowed_days.as_slice());
    let update = match args.edit {
        Some(_) => {
            let update = edit_delivery(cx, &order, &allowed_days, args).await?;
            order = store
                .update_delivery(update.order_id, update.scheduled, update.delivery.clone())
                .await?;
            Some(update)
        }
        None => None,
    };

    let mut view = OrderView::new(order)?;
    for date in &args.select {
        if view.toggle_delivery(*date).is_none() {
            return Err(CliError::UnknownRow(date.to_string()));
        }
    }
    if args.select_all && !view.all_selected() {
        view.toggle_all_deliveries();
    }

    match args.format {
        OutputFormat::Text => Ok(order_text(&view, &allowed_days, update.as_ref())),
        OutputFormat::Json => output::json(&OrderPayload {
            order: view.order(),
            selected: view.checklist().selection().selected(),
            all_selected: view.all_selected(),
            update: update.as_ref(),
        }),
    }
}

async fn edit_delivery(
    cx: &Context<'_>,
    order: &Order,
    allowed_days: &[Weekday],
    args: &OrderArgs,
) -> Result<DeliveryUpdate, CliError> {
    let Some(scheduled) = args.edit else {
        return Err(CliError::invalid("--edit", "no delivery chosen"));
    };
    let employees: Vec<EmployeeOption> = cx
        .store
        .employees()
        .await
        .iter()
        .map(EmployeeOption::from)
        .collect();
    let routes: Vec<String> = cx
        .store
        .cities()
        .await
        .into_iter()
        .flat_map(|c| c.routes)
        .collect();

    let key = scheduled.format("%Y-%m-%d").to_string();
    let view = OrderView::new(order.clone())?;
    let mut edit = view
        .edit(&key, allowed_days.to_vec(), employees, routes)
        .ok_or(CliError::UnknownRow(key))?;

    if let Some(to) = args.to {
        let today = args.today.unwrap_or_else(|| Local::now().date_naive());
        edit.pick_date(to, today)?;
        if let Some(extra) = &args.extra_charges {
            edit.set_extra_charges(extra)?;
        }
    }
    if let Some(slot) = &args.slot {
        edit.set_time_slot(slot)?;
    }
    if let Some(status) = args.status {
        edit.set_status(status);
    }
    if let Some(employee) = &args.employee {
        edit.set_employee(employee)?;
    }
    if let Some(route) = &args.route {
        edit.set_route(route)?;
    }
    Ok(edit.save())
}

#[derive(Serialize)]
struct OrderPayload<'a> {
    order: &'a Order,
    selected: Vec<String>,
    all_selected: bool,
    update: Option<&'a DeliveryUpdate>,
}

fn order_text(view: &OrderView, allowed_days: &[Weekday], update: Option<&DeliveryUpdate>) -> String {
    let order = view.order();
    let mut lines = vec![
        format!("Order #{}  {}", order.order_id, order.customer_name),
        format!("Employee: {} ({})", order.employee_name, order.emp_id),
        format!("Payment: {} ({})", order.payment_type, order.payment_status),
        format!("Subscription: {}", view.subscription()),
        format!("Bags: {}", order.bags_ordered.join(", ")),
        format!("Total: {}  Max weight: {} g", order.total_price, order.max_weight_g),
    ];
    if !allowed_days.is_empty() {
        let days: Vec<String> = allowed_days.iter().map(|d| d.to_string()).collect();
        lines.push(format!("Delivery days: {}", days.join(", ")));
    }
    if let Some(update) = update {
        lines.push(format!(
            "Saved delivery {} -> {} ({}, {}, charges {})",
            update.scheduled,
            update.delivery.date,
            update.delivery.time_slot,
            update.delivery.status,
            update.delivery.delivery_charges
        ));
    }
    lines.push(String::new());
    lines.push(text::layout(&view.checklist().render()));
    lines.join("\n")
}
