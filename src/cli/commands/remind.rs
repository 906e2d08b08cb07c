//! tt remind - Evaluate and render a payment reminder
//!
//! Nothing is sent; the rendered notice is printed for whoever delivers it.

use chrono::{DateTime, Utc};
use clap::Args;
use tracing::info;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json};
use crate::core::{ReminderCheck, ReminderNotice};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct RemindArgs {
    /// Order id
    pub id: i64,

    /// Evaluate as of this RFC 3339 time instead of now
    #[arg(long)]
    pub as_of: Option<DateTime<Utc>>,
}

pub fn run(ctx: &AppContext, args: &RemindArgs) -> Result<()> {
    let order = ctx.db.get_order(args.id)?;
    let now = args.as_of.unwrap_or_else(Utc::now);
    let check = ReminderCheck::evaluate(&order, now)?;
    let notice = ReminderNotice::render(&order, &check);

    info!(
        id = order.id,
        due = %notice.due_date,
        has_email = notice.email.is_some(),
        has_phone = notice.phone.is_some(),
        "reminder due"
    );

    match ctx.output_format {
        OutputFormat::Json => emit_json(&serde_json::json!({ "reminder": notice })),
        OutputFormat::Human => {
            let mut layout = HumanLayout::new();
            layout
                .title(&notice.subject)
                .kv("due date", &notice.due_date)
                .kv_opt("email", notice.email.as_deref())
                .kv_opt("phone", notice.phone.as_deref())
                .kv_opt("whatsapp", notice.whatsapp_to.as_deref())
                .blank()
                .push_line(notice.body.clone());
            emit_human(layout);
            Ok(())
        }
    }
}
