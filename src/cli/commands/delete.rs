//! tt delete - Soft-delete an order

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{OutputFormat, emit_json};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Order id
    pub id: i64,
}

pub fn run(ctx: &AppContext, args: &DeleteArgs) -> Result<()> {
    ctx.db.soft_delete(args.id)?;
    match ctx.output_format {
        OutputFormat::Json => emit_json(&serde_json::json!({ "success": true, "id": args.id })),
        OutputFormat::Human => {
            println!("Deleted order {}", args.id);
            Ok(())
        }
    }
}
