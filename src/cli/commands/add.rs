//! tt add - Create an order

use clap::Args;
use tracing::warn;

use crate::app::AppContext;
use crate::core::{NewOrder, OrderStatus, PaymentStatus, validate};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Tray type, e.g. PERFORATED or CABLE LADDER
    #[arg(long)]
    pub tray_type: Option<String>,

    /// Serial number or name
    #[arg(long)]
    pub serial_no: Option<String>,

    /// Maker
    #[arg(long)]
    pub make: Option<String>,

    /// Dimensions, e.g. 600x50
    #[arg(long)]
    pub dimensions: Option<String>,

    /// Number of pieces
    #[arg(long)]
    pub nos: Option<i64>,

    /// Size label
    #[arg(long)]
    pub size: Option<String>,

    /// Initial production status
    #[arg(long, default_value = "CUTTING")]
    pub status: OrderStatus,

    /// PAID or NOT_PAID
    #[arg(long, default_value = "PAID")]
    pub payment: PaymentStatus,

    /// Credit period in days (required for NOT_PAID)
    #[arg(long)]
    pub credit_days: Option<i64>,

    /// Customer email for reminders
    #[arg(long)]
    pub email: Option<String>,

    /// Customer phone for reminders
    #[arg(long)]
    pub phone: Option<String>,
}

impl From<&AddArgs> for NewOrder {
    fn from(args: &AddArgs) -> Self {
        Self {
            tray_type: args.tray_type.clone(),
            serial_no: args.serial_no.clone(),
            make: args.make.clone(),
            dimensions: args.dimensions.clone(),
            nos: args.nos,
            size: args.size.clone(),
            status: args.status,
            payment_status: args.payment,
            credit_days: args.credit_days,
            email: args.email.clone(),
            phone: args.phone.clone(),
        }
    }
}

pub fn run(ctx: &AppContext, args: &AddArgs) -> Result<()> {
    let order = NewOrder::from(args);
    for warning in validate(&order)? {
        warn!(field = %warning.field, "{}", warning.message);
    }

    let created = ctx.db.create_order(&order)?;
    super::emit_order(ctx, &format!("Created {}", created.display_code()), &created)
}
