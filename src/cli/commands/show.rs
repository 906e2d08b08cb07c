//! tt show - Show an order by id

use clap::Args;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Order id
    pub id: i64,
}

pub fn run(ctx: &AppContext, args: &ShowArgs) -> Result<()> {
    let order = ctx.db.get_order(args.id)?;
    super::emit_order(ctx, &order.display_code(), &order)
}
