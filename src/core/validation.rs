//! Order validation

use std::sync::LazyLock;

use regex::Regex;

use super::order::{NewOrder, PaymentStatus};
use crate::error::{Result, TrackError};

static EMAIL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 10..=15;

/// Validate a new order before it is written.
///
/// Hard failures are returned as `ValidationFailed`; softer problems come
/// back as warnings the caller may show.
pub fn validate(order: &NewOrder) -> Result<Vec<ValidationWarning>> {
    let mut warnings = vec![];

    let missing: Vec<&str> = order
        .required_fields()
        .iter()
        .filter(|(_, value)| !value.is_some_and(|v| !v.trim().is_empty()))
        .map(|(name, _)| *name)
        .collect();
    if !missing.is_empty() {
        return Err(TrackError::ValidationFailed(format!(
            "tray_type, serial_no and make are required (missing: {})",
            missing.join(", ")
        )));
    }

    if let Some(email) = order.email.as_deref().filter(|e| !e.is_empty()) {
        if !is_valid_email(email) {
            return Err(TrackError::ValidationFailed(format!(
                "invalid email address: {email}"
            )));
        }
    }

    if let Some(phone) = order.phone.as_deref().filter(|p| !p.is_empty()) {
        if !is_valid_phone(phone) {
            return Err(TrackError::ValidationFailed(format!(
                "phone number must have 10 to 15 digits: {phone}"
            )));
        }
    }

    if order.payment_status == PaymentStatus::NotPaid
        && !order.credit_days.is_some_and(|days| days >= 1)
    {
        return Err(TrackError::ValidationFailed(
            "credit_days must be at least 1 for NOT_PAID orders".into(),
        ));
    }

    if let Some(nos) = order.nos {
        if nos < 0 {
            return Err(TrackError::ValidationFailed(
                "nos cannot be negative".into(),
            ));
        }
    }

    if order.payment_status == PaymentStatus::NotPaid
        && order.email.is_none()
        && order.phone.is_none()
    {
        warnings.push(ValidationWarning {
            field: "email".to_string(),
            message: "unpaid order has no email or phone for reminders".to_string(),
        });
    }

    if order.payment_status == PaymentStatus::Paid && order.credit_days.is_some() {
        warnings.push(ValidationWarning {
            field: "credit_days".to_string(),
            message: "credit_days is ignored for PAID orders".to_string(),
        });
    }

    Ok(warnings)
}

fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}

/// Digits only are counted; spaces, dashes and a leading `+` are ignored.
fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    PHONE_DIGITS.contains(&digits)
}

/// A validation warning (not an error)
#[derive(Debug)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
}
