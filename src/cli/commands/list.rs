//! tt list - List orders by lifecycle slice

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json};
use crate::error::Result;
use crate::storage::{OrderListing, OrderRecord};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Completed orders instead of pending ones
    #[arg(long, conflicts_with_all = ["deleted", "unpaid"])]
    pub completed: bool,

    /// Soft-deleted orders
    #[arg(long, conflicts_with = "unpaid")]
    pub deleted: bool,

    /// Orders awaiting payment
    #[arg(long)]
    pub unpaid: bool,

    /// Maximum number of orders to show
    #[arg(long, short = 'n', default_value = "50")]
    pub limit: usize,
}

impl ListArgs {
    const fn listing(&self) -> OrderListing {
        if self.completed {
            OrderListing::Completed
        } else if self.deleted {
            OrderListing::Deleted
        } else if self.unpaid {
            OrderListing::PendingPayment
        } else {
            OrderListing::Pending
        }
    }
}

#[derive(Serialize)]
struct ListResponse<'a> {
    orders: &'a [OrderRecord],
}

pub fn run(ctx: &AppContext, args: &ListArgs) -> Result<()> {
    let listing = args.listing();
    let mut orders = ctx.db.list_orders(listing)?;
    orders.truncate(args.limit);

    debug!(?listing, count = orders.len(), "listing orders");

    match ctx.output_format {
        OutputFormat::Json => emit_json(&ListResponse { orders: &orders }),
        OutputFormat::Human => {
            emit_human(list_layout(listing, &orders));
            Ok(())
        }
    }
}

fn list_layout(listing: OrderListing, orders: &[OrderRecord]) -> HumanLayout {
    let heading = match listing {
        OrderListing::Pending => "Pending orders",
        OrderListing::Completed => "Completed orders",
        OrderListing::Deleted => "Deleted orders",
        OrderListing::PendingPayment => "Orders awaiting payment",
    };

    let mut layout = HumanLayout::new();
    layout.section(heading);
    if orders.is_empty() {
        layout.push_line(style("(none)").dim().to_string());
        return layout;
    }

    for order in orders {
        let description = [
            order.tray_type.as_deref(),
            order.make.as_deref(),
            order.dimensions.as_deref(),
            order.size.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" / ");

        let mut line = format!(
            "{:<10} {:<11} {:<9} {}",
            order.display_code(),
            order.status.as_str(),
            order.payment_status.as_str(),
            description
        );
        if let Some(days) = order.credit_days {
            line.push_str(&format!(" ({days}d credit)"));
        }
        layout.bullet(&line);
    }
    layout
}
