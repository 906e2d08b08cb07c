//! Payment reminder eligibility and message rendering.
//!
//! Reminders apply to unpaid orders whose credit period has run out. The due
//! date is the creation time plus `credit_days` whole days. This module only
//! decides and renders; delivering the message is somebody else's job.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::notify::whatsapp_recipient;
use super::order::PaymentStatus;
use crate::error::{Result, TrackError};
use crate::storage::OrderRecord;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Outcome of checking whether an order is due a reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderCheck {
    pub created_at: DateTime<Utc>,
    pub credit_days: i64,
    pub due_at: DateTime<Utc>,
}

impl ReminderCheck {
    /// Returns the check when `now` is strictly past the due date.
    pub fn evaluate(order: &OrderRecord, now: DateTime<Utc>) -> Result<Self> {
        let label = order.display_code();

        if order.payment_status != PaymentStatus::NotPaid {
            return Err(TrackError::ReminderNotDue(format!(
                "{label} is not NOT_PAID"
            )));
        }

        let credit_days = order.credit_days.unwrap_or(0);
        if credit_days <= 0 {
            return Err(TrackError::ReminderNotDue(format!(
                "{label} has no credit days set"
            )));
        }

        let created_at = order.created_at_utc()?;
        let due_at = Duration::try_days(credit_days)
            .and_then(|period| created_at.checked_add_signed(period))
            .ok_or_else(|| {
                TrackError::ValidationFailed(format!("{label} credit_days out of range"))
            })?;
        if now <= due_at {
            return Err(TrackError::ReminderNotDue(format!(
                "{label} credit period ends {}",
                due_at.format(DATE_FORMAT)
            )));
        }

        Ok(Self {
            created_at,
            credit_days,
            due_at,
        })
    }
}

/// A rendered payment reminder.
#[derive(Debug, Clone, Serialize)]
pub struct ReminderNotice {
    pub order_code: String,
    pub subject: String,
    pub body: String,
    pub short_body: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// `phone` as a `whatsapp:` recipient, when it normalizes.
    pub whatsapp_to: Option<String>,
    pub due_date: String,
}

impl ReminderNotice {
    pub fn render(order: &OrderRecord, check: &ReminderCheck) -> Self {
        let code = order.display_code();
        let placed = check.created_at.format(DATE_FORMAT).to_string();
        let due = check.due_at.format(DATE_FORMAT).to_string();
        let days = check.credit_days;

        let subject = format!("Payment reminder - Order {code}");
        let body = format!(
            "Hello,\n\n\
             This is a friendly payment reminder for Order {code} placed on {placed}. \
             The credit period of {days} day(s) ended on {due}.\n\n\
             Please make the payment at your earliest convenience. If you have already paid, \
             please ignore this message or reply with the payment details.\n\n\
             Thank you"
        );
        let short_body = format!(
            "Payment reminder for Order {code}.\n\
             Order date: {placed}\n\
             Credit days: {days}\n\
             Due date: {due}\n\n\
             Please make the payment or contact us to discuss."
        );

        Self {
            order_code: code,
            subject,
            body,
            short_body,
            email: order.email.clone(),
            phone: order.phone.clone(),
            whatsapp_to: order.phone.as_deref().and_then(whatsapp_recipient),
            due_date: due,
        }
    }
}
