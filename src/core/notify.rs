//! Status-change notices and recipient normalization.
//!
//! Rendering only. Nothing here talks to a mail or messaging service.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::order::OrderStatus;
use crate::storage::OrderRecord;

static WHATSAPP_NUMBER_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\+?\d{6,15}$").ok());

/// Zero-width, bidi-control and BOM characters that sneak in from pasted numbers.
fn is_hidden(c: char) -> bool {
    matches!(c, '\u{200B}'..='\u{200F}' | '\u{202A}'..='\u{202E}' | '\u{FEFF}')
}

/// Normalize a phone number to a `whatsapp:<number>` recipient.
///
/// Hidden characters and any existing `whatsapp:` prefix are dropped, then
/// everything but digits and `+` is removed. Returns `None` unless what is
/// left is an optional `+` followed by 6 to 15 digits.
pub fn whatsapp_recipient(phone: &str) -> Option<String> {
    let visible: String = phone.chars().filter(|c| !is_hidden(*c)).collect();
    let mut number = visible.trim();
    if number
        .get(..9)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("whatsapp:"))
    {
        number = number[9..].trim();
    }

    let digits: String = number
        .chars()
        .filter(|c| *c == '+' || c.is_ascii_digit())
        .collect();

    let valid = WHATSAPP_NUMBER_RE
        .as_ref()
        .is_some_and(|re| re.is_match(&digits));
    valid.then(|| format!("whatsapp:{digits}"))
}

/// Notice sent to the customer when an order changes production status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusNotice {
    pub order_code: String,
    pub status: OrderStatus,
    pub email: String,
    pub subject: String,
    pub body: String,
}

impl StatusNotice {
    /// `None` when the order has no email to notify.
    pub fn render(order: &OrderRecord) -> Option<Self> {
        let email = order.email.as_deref().map(str::trim).filter(|e| !e.is_empty())?;
        let code = order.display_code();
        let status = order.status;

        Some(Self {
            subject: format!("Order {code} status updated"),
            body: format!(
                "Order Status Updated\n\n\
                 Order Code: {code}\n\
                 New Status: {status}\n\n\
                 Thank you."
            ),
            order_code: code,
            status,
            email: email.to_string(),
        })
    }
}
