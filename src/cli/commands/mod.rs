//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod add;
pub mod delete;
pub mod list;
pub mod payment;
pub mod remind;
pub mod search;
pub mod show;
pub mod status;
pub mod track;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json};
use crate::error::Result;
use crate::storage::OrderRecord;

pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Search(args) => search::run(ctx, args),
        Commands::Add(args) => add::run(ctx, args),
        Commands::Track(args) => track::run(ctx, args),
        Commands::Show(args) => show::run(ctx, args),
        Commands::List(args) => list::run(ctx, args),
        Commands::Status(args) => status::run(ctx, args),
        Commands::Payment(args) => payment::run(ctx, args),
        Commands::Delete(args) => delete::run(ctx, args),
        Commands::Remind(args) => remind::run(ctx, args),
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search orders by code, tray type, serial, maker, dimensions or size
    Search(search::SearchArgs),

    /// Create a new order
    Add(add::AddArgs),

    /// Look up an order by its public code
    Track(track::TrackArgs),

    /// Show an order by id, including deleted ones
    Show(show::ShowArgs),

    /// List pending, completed, deleted or unpaid orders
    List(list::ListArgs),

    /// Set the production status of an order
    Status(status::StatusArgs),

    /// Set the payment status of an order
    Payment(payment::PaymentArgs),

    /// Soft-delete an order
    Delete(delete::DeleteArgs),

    /// Check whether an unpaid order is due a reminder and render it
    Remind(remind::RemindArgs),
}

/// Print one order as `{ "order": ... }` or a key/value block.
pub(crate) fn emit_order(ctx: &AppContext, title: &str, order: &OrderRecord) -> Result<()> {
    match ctx.output_format {
        OutputFormat::Json => emit_json(&serde_json::json!({ "order": order })),
        OutputFormat::Human => {
            let mut layout = HumanLayout::new();
            layout.title(title);
            order_lines(&mut layout, order);
            emit_human(layout);
            Ok(())
        }
    }
}

pub(crate) fn order_lines(layout: &mut HumanLayout, order: &OrderRecord) {
    let nos = order.nos.map(|n| n.to_string());
    let credit = order.credit_days.map(|d| d.to_string());
    layout
        .kv("id", &order.id.to_string())
        .kv("code", &order.display_code())
        .kv_opt("tray type", order.tray_type.as_deref())
        .kv_opt("serial no", order.serial_no.as_deref())
        .kv_opt("make", order.make.as_deref())
        .kv_opt("dimensions", order.dimensions.as_deref())
        .kv_opt("nos", nos.as_deref())
        .kv_opt("size", order.size.as_deref())
        .kv("status", order.status.as_str())
        .kv("payment", order.payment_status.as_str())
        .kv_opt("credit days", credit.as_deref())
        .kv_opt("email", order.email.as_deref())
        .kv_opt("phone", order.phone.as_deref())
        .kv("created", &order.created_at)
        .kv("updated", &order.updated_at);
    if order.is_deleted {
        layout.kv("deleted", "yes");
    }
}
