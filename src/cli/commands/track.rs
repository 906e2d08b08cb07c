//! tt track - Public lookup by order code

use clap::Args;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct TrackArgs {
    /// Order code, e.g. ORD-0042
    pub code: String,
}

pub fn run(ctx: &AppContext, args: &TrackArgs) -> Result<()> {
    let order = ctx.db.get_order_by_code(args.code.trim())?;
    super::emit_order(ctx, &order.display_code(), &order)
}
