//! Core order types and logic

pub mod notify;
pub mod order;
pub mod reminder;
pub mod validation;

pub use notify::{StatusNotice, whatsapp_recipient};
pub use order::{NewOrder, OrderStatus, PaymentStatus, order_code};
pub use reminder::{ReminderCheck, ReminderNotice};
pub use validation::{ValidationWarning, validate};
