//! tt payment - Set payment status

use clap::Args;

use crate::app::AppContext;
use crate::core::PaymentStatus;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct PaymentArgs {
    /// Order id
    pub id: i64,

    /// PAID or NOT_PAID (PAID clears credit days)
    pub payment: PaymentStatus,
}

pub fn run(ctx: &AppContext, args: &PaymentArgs) -> Result<()> {
    let order = ctx.db.update_payment(args.id, args.payment)?;
    super::emit_order(
        ctx,
        &format!("{} payment {}", order.display_code(), order.payment_status),
        &order,
    )
}
