//! Shared helpers for integration and property suites.

use traytrack::SearchRecord;
use traytrack::core::NewOrder;
use traytrack::test_utils::fixtures::record;

/// `count` records with ids `1..=count`, all sharing `tray_type`.
pub fn records_named(count: usize, tray_type: &str) -> Vec<SearchRecord> {
    (1..=count as i64).map(|id| record(id, tray_type)).collect()
}

/// A record with every descriptive field populated.
pub fn full_record(id: i64, tray_type: &str, make: &str, dimensions: &str, size: &str) -> SearchRecord {
    SearchRecord {
        id,
        order_code: Some(format!("ORD-{id:04}")),
        tray_type: Some(tray_type.to_string()),
        serial_no: Some(format!("SN-{id}")),
        make: Some(make.to_string()),
        dimensions: Some(dimensions.to_string()),
        size: Some(size.to_string()),
        status: "CUTTING".to_string(),
    }
}

pub fn unpaid_order(tray_type: &str, credit_days: i64) -> NewOrder {
    NewOrder {
        tray_type: Some(tray_type.to_string()),
        payment_status: traytrack::core::PaymentStatus::NotPaid,
        credit_days: Some(credit_days),
        email: Some("buyer@example.com".to_string()),
        ..NewOrder::default()
    }
}
