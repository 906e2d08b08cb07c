//! tt status - Set production status
//!
//! The customer notice for the change is rendered alongside the order; it is
//! not sent.

use clap::Args;
use tracing::info;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json};
use crate::core::{OrderStatus, StatusNotice};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Order id
    pub id: i64,

    /// CUTTING, PERFORATED, BENDING or COMPLETED
    pub status: OrderStatus,
}

pub fn run(ctx: &AppContext, args: &StatusArgs) -> Result<()> {
    let order = ctx.db.update_status(args.id, args.status)?;
    let notice = StatusNotice::render(&order);
    if notice.is_some() {
        info!(id = order.id, status = %order.status, "status notice rendered");
    }

    match ctx.output_format {
        OutputFormat::Json => emit_json(&serde_json::json!({
            "order": order,
            "notification": notice,
        })),
        OutputFormat::Human => {
            let mut layout = HumanLayout::new();
            layout.title(&format!("{} is now {}", order.display_code(), order.status));
            super::order_lines(&mut layout, &order);
            layout.blank().section("Notification");
            match &notice {
                Some(notice) => {
                    layout
                        .kv("to", &notice.email)
                        .kv("subject", &notice.subject)
                        .blank()
                        .push_line(notice.body.clone());
                }
                None => {
                    layout.push_line("(no email on file)");
                }
            }
            emit_human(layout);
            Ok(())
        }
    }
}
