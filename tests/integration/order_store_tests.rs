use chrono::{Duration, Utc};
use rusqlite::Connection;

use traytrack::TrackError;
use traytrack::core::{OrderStatus, PaymentStatus, ReminderCheck, ReminderNotice};
use traytrack::storage::OrderListing;
use traytrack::test_utils::fixtures::DbFixture;

use super::common::unpaid_order;

#[test]
fn test_orders_persist_across_reopen() {
    let fixture = DbFixture::new().unwrap();
    fixture.add("CABLE", Some("ACME")).unwrap();
    fixture.add("LADDER", None).unwrap();

    let conn = Connection::open(&fixture.db_path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM orders", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 2);

    let codes: Vec<String> = conn
        .prepare("SELECT order_code FROM orders ORDER BY id")
        .unwrap()
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<rusqlite::Result<_>>()
        .unwrap();
    assert_eq!(codes, vec!["ORD-0001", "ORD-0002"]);
}

#[test]
fn test_listings_follow_lifecycle() {
    let fixture = DbFixture::new().unwrap();
    let db = &fixture.db;
    let pending = fixture.add("CABLE", None).unwrap();
    let done = fixture.add("LADDER", None).unwrap();
    let gone = fixture.add("PERFORATED", None).unwrap();
    let owed = db.create_order(&unpaid_order("WIRE MESH", 30)).unwrap().id;

    db.update_status(done, OrderStatus::Completed).unwrap();
    db.soft_delete(gone).unwrap();

    let ids = |listing| -> Vec<i64> {
        db.list_orders(listing)
            .unwrap()
            .into_iter()
            .map(|o| o.id)
            .collect()
    };

    let mut pending_ids = ids(OrderListing::Pending);
    pending_ids.sort_unstable();
    assert_eq!(pending_ids, vec![pending, owed]);
    assert_eq!(ids(OrderListing::Completed), vec![done]);
    assert_eq!(ids(OrderListing::Deleted), vec![gone]);
    assert_eq!(ids(OrderListing::PendingPayment), vec![owed]);
}

#[test]
fn test_marking_paid_clears_credit_days() {
    let fixture = DbFixture::new().unwrap();
    let order = fixture.db.create_order(&unpaid_order("CABLE", 15)).unwrap();
    assert_eq!(order.credit_days, Some(15));

    let paid = fixture.db.update_payment(order.id, PaymentStatus::Paid).unwrap();
    assert_eq!(paid.payment_status, PaymentStatus::Paid);
    assert_eq!(paid.credit_days, None);
    assert!(fixture.db.list_pending_payment().unwrap().is_empty());
}

#[test]
fn test_tracking_hides_deleted_orders() {
    let fixture = DbFixture::new().unwrap();
    let id = fixture.add("CABLE", None).unwrap();
    assert_eq!(fixture.db.get_order_by_code("ORD-0001").unwrap().id, id);

    fixture.db.soft_delete(id).unwrap();
    let err = fixture.db.get_order_by_code("ORD-0001").unwrap_err();
    assert!(matches!(err, TrackError::OrderNotFound(_)));
    assert!(fixture.db.get_order(id).unwrap().is_deleted);
}

#[test]
fn test_reminder_due_after_credit_period() {
    let fixture = DbFixture::new().unwrap();
    let order = fixture.db.create_order(&unpaid_order("CABLE", 10)).unwrap();
    let created = order.created_at_utc().unwrap();

    let early = ReminderCheck::evaluate(&order, created + Duration::days(9));
    assert!(matches!(early, Err(TrackError::ReminderNotDue(_))));

    let check = ReminderCheck::evaluate(&order, created + Duration::days(11)).unwrap();
    let notice = ReminderNotice::render(&order, &check);
    assert_eq!(notice.order_code, "ORD-0001");
    assert_eq!(notice.email.as_deref(), Some("buyer@example.com"));
    assert!(notice.subject.contains("ORD-0001"));
}

#[test]
fn test_paid_order_never_due() {
    let fixture = DbFixture::new().unwrap();
    let id = fixture.add("CABLE", None).unwrap();
    let order = fixture.db.get_order(id).unwrap();

    let result = ReminderCheck::evaluate(&order, Utc::now() + Duration::days(365));
    assert!(result.is_err());
}
