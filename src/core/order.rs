//! Order lifecycle types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrackError;

/// Production stage of a tray order.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Cutting,
    Perforated,
    Bending,
    Completed,
}

impl OrderStatus {
    pub const ALL: [Self; 4] = [
        Self::Cutting,
        Self::Perforated,
        Self::Bending,
        Self::Completed,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cutting => "CUTTING",
            Self::Perforated => "PERFORATED",
            Self::Bending => "BENDING",
            Self::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = TrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CUTTING" => Ok(Self::Cutting),
            "PERFORATED" => Ok(Self::Perforated),
            "BENDING" => Ok(Self::Bending),
            "COMPLETED" => Ok(Self::Completed),
            _ => Err(TrackError::ValidationFailed(format!(
                "invalid status {s} (expected CUTTING|PERFORATED|BENDING|COMPLETED)"
            ))),
        }
    }
}

/// Whether an order has been paid for.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Paid,
    NotPaid,
}

impl PaymentStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "PAID",
            Self::NotPaid => "NOT_PAID",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = TrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_uppercase().replace('-', "_");
        match key.as_str() {
            "PAID" => Ok(Self::Paid),
            "NOT_PAID" | "NOTPAID" | "UNPAID" => Ok(Self::NotPaid),
            _ => Err(TrackError::ValidationFailed(format!(
                "invalid payment status {s} (expected PAID|NOT_PAID)"
            ))),
        }
    }
}

/// Public tracking code for an order id, e.g. `ORD-0042`.
pub fn order_code(id: i64) -> String {
    format!("ORD-{id:04}")
}

/// Input for creating an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewOrder {
    pub tray_type: Option<String>,
    pub serial_no: Option<String>,
    pub make: Option<String>,
    pub dimensions: Option<String>,
    pub nos: Option<i64>,
    pub size: Option<String>,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub credit_days: Option<i64>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl NewOrder {
    /// Credit days as they should be persisted: only NOT_PAID orders keep them.
    pub const fn effective_credit_days(&self) -> Option<i64> {
        match self.payment_status {
            PaymentStatus::NotPaid => self.credit_days,
            PaymentStatus::Paid => None,
        }
    }

    /// Fields every order must carry, in column order.
    pub fn required_fields(&self) -> [(&'static str, Option<&str>); 3] {
        [
            ("tray_type", self.tray_type.as_deref()),
            ("serial_no", self.serial_no.as_deref()),
            ("make", self.make.as_deref()),
        ]
    }
}
