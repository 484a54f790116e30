//! `veggie complaint`: customer lookup and complaint intake.

use log::info;
use veggie_lib::forms::complaint::search_customers;
use veggie_lib::forms::ComplaintForm;
use veggie_lib::model::{Complaint, Customer};

use super::Context;
use crate::cli::{ComplaintArgs, OutputFormat};
use crate::error::CliError;
use crate::output;

pub async fn run(cx: &Context<'_>, args: &ComplaintArgs) -> Result<String, CliError> {
    let customers = cx.store.customers().await;

    if let Some(query) = &args.find {
        let matches = search_customers(&customers, query);
        return match args.format {
            OutputFormat::Text => Ok(customers_text(&matches)),
            OutputFormat::Json => output::json(&matches),
        };
    }

    let next_id = cx
        .store
        .complaints()
        .await
        .iter()
        .map(|c| c.complaint_id)
        .max()
        .map_or(1, |id| id + 1);

    let mut form = ComplaintForm::new(customers, next_id);
    if let Some(id) = &args.id {
        form.set_complaint_id(id)?;
    }
    form.choose_customer(args.customer_id()?)?;
    if let Some(date) = &args.date {
        form.choose_delivery_date(date)?;
    }
    if let Some(kind) = &args.complaint_type {
        form.set_complaint_type(kind)?;
    }
    form.set_description(args.description.as_str());
    if let Some(status) = args.status {
        form.set_status(status);
    }
    if let Some(resolution) = &args.resolution {
        form.set_resolution(resolution);
    }

    let complaint = form.validate()?;
    cx.store.save_complaint(complaint.clone()).await?;
    info!("complaint {} filed for {}", complaint.complaint_id, complaint.customer_name);

    match args.format {
        OutputFormat::Text => Ok(complaint_text(&complaint)),
        OutputFormat::Json => output::json(&complaint),
    }
}

fn customers_text(customers: &[&Customer]) -> String {
    if customers.is_empty() {
        return "No customers found.".to_string();
    }
    customers
        .iter()
        .map(|c| {
            format!(
                "{}  {} ({})  deliveries: {}",
                c.id,
                c.name,
                c.phone_number,
                c.delivery_dates.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn complaint_text(complaint: &Complaint) -> String {
    let mut lines = vec![
        format!("Complaint #{} filed", complaint.complaint_id),
        format!("Customer: {} ({})", complaint.customer_name, complaint.user_id),
        format!("Type: {}", complaint.complaint_type),
        format!("Delivery: {}", complaint.delivery_date_slot),
        format!("Status: {}", complaint.status),
        format!("Description: {}", complaint.description),
    ];
    if let Some(resolution) = &complaint.resolution {
        lines.push(format!("Resolution: {resolution}"));
    }
    lines.join("\n")
}
