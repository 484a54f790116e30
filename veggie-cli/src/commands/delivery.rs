//! `veggie edit-delivery <order>`: bag lines, add-ons and destination.

use gridkit::Money;
use log::{info, warn};
use veggie_lib::forms::delivery::parse_units;
use veggie_lib::forms::{DeliveryChange, DeliveryForm};

use super::Context;
use crate::cli::{parse_addon, EditDeliveryArgs, OutputFormat};
use crate::error::CliError;
use crate::output;

pub async fn run(cx: &Context<'_>, args: &EditDeliveryArgs) -> Result<String, CliError> {
    let store = cx.store;
    let order = store.order(args.order_id).await?;
    let mut form = DeliveryForm::new(&order, store.catalog().await, store.cities().await);

    apply(&mut form, args)?;

    let change = form.submit()?;
    let addon_names = change.addons.iter().map(|a| a.name.clone()).collect();
    let saved = store
        .save_order_items(change.order_id, change.items.clone(), addon_names)
        .await?;
    info!(
        "order {}: saved {} items, {} add-ons",
        saved.order_id,
        saved.bag_items.len(),
        saved.addons.len()
    );

    match args.format {
        OutputFormat::Text => Ok(change_text(&change, form.max_weight_g())),
        OutputFormat::Json => output::json(&change),
    }
}

/// Apply the command-line edits to the form, in form order.
fn apply(form: &mut DeliveryForm, args: &EditDeliveryArgs) -> Result<(), CliError> {
    // Remove from the end so earlier indices stay valid.
    let mut removals = args.remove_item.clone();
    removals.sort_unstable_by(|a, b| b.cmp(a));
    removals.dedup();
    for index in removals {
        form.remove_item(index)?;
    }

    for (index, units) in &args.units {
        form.input_required_units(*index, units)?;
    }

    for item in &args.add_item {
        let (name, price, grams) = parse_item(item)?;
        let index = form.add_item()?;
        form.describe_item(index, name, price, grams)?;
    }

    for addon in &args.addon {
        let (name, units) = parse_addon(addon);
        let index = form.add_addon();
        form.choose_addon(index, &name)?;
        if let Some(units) = units {
            form.set_addon_units(index, parse_units("requiredUnits", &units)?)?;
        }
    }

    if let Some(price) = &args.net_price {
        form.set_net_price(price)?;
    }

    if let Some(city) = &args.city {
        form.set_city(city)?;
    }
    if let Some(route) = &args.route {
        form.set_route(route)?;
    }
    for slot in &args.add_slot {
        if !form.add_time_slot(slot) {
            warn!("time slot {slot:?} already offered");
        }
    }
    if let Some(slot) = &args.slot {
        form.set_time_slot(slot)?;
    }
    if let Some(description) = &args.description {
        form.set_description(description.as_str());
    }
    Ok(())
}

/// `NAME=PRICE=GRAMS`, price in whole rupees, never negative.
fn parse_item(input: &str) -> Result<(String, Money, u32), CliError> {
    let mut parts = input.splitn(3, '=').map(str::trim);
    let (Some(name), Some(price), Some(grams)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(CliError::invalid("--add-item", format!("expected NAME=PRICE=GRAMS, got {input:?}")));
    };
    let price: i64 = price
        .parse()
        .map_err(|_| CliError::invalid("--add-item", format!("bad price {price:?}")))?;
    if price < 0 {
        return Err(CliError::invalid("--add-item", format!("price must not be negative, got {price}")));
    }
    let grams: u32 = grams
        .parse()
        .map_err(|_| CliError::invalid("--add-item", format!("bad weight {grams:?}")))?;
    Ok((name.to_string(), Money::from_int(price), grams))
}

fn change_text(change: &DeliveryChange, max_weight_g: u32) -> String {
    let mut lines = vec![format!("Order #{} delivery updated", change.order_id)];
    lines.push(format!("Destination: {}, {} at {}", change.city, change.route, change.time_slot));
    lines.push("Items:".to_string());
    for (i, item) in change.items.iter().enumerate() {
        lines.push(format!(
            "  {i}. {} x{} ({} g each) {}",
            item.name, item.required_units, item.unit_quantity_g, item.price
        ));
    }
    if !change.addons.is_empty() {
        lines.push("Add-ons:".to_string());
        for addon in &change.addons {
            lines.push(format!("  {} x{} {}", addon.name, addon.required_units, addon.amount()));
        }
    }
    lines.push(format!(
        "Total: {}  Weight: {} / {} g  Net price: {}",
        change.total_amount, change.total_weight_g, max_weight_g, change.net_price
    ));
    if !change.description.is_empty() {
        lines.push(format!("Note: {}", change.description));
    }
    lines.join("\n")
}
