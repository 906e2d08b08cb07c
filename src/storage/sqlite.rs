//! SQLite database layer

use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, params};
use serde::Serialize;
use tracing::{debug, info};

use crate::core::order::{NewOrder, OrderStatus, PaymentStatus, order_code};
use crate::error::{Result, TrackError};
use crate::search::{RecordStore, SearchField, SearchRecord};
use crate::storage::migrations;

const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

const ORDER_COLUMNS: &str = "id, order_code, tray_type, serial_no, make, dimensions, nos, size, \
     status, payment_status, credit_days, email, phone, is_deleted, created_at, updated_at";

const SEARCH_COLUMNS: &str = "id, order_code, tray_type, serial_no, make, dimensions, size, status";

/// A full row from the `orders` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRecord {
    pub id: i64,
    pub order_code: Option<String>,
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
    pub is_deleted: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl OrderRecord {
    /// Order code, or `#id` for rows that never got one.
    pub fn display_code(&self) -> String {
        self.order_code
            .clone()
            .unwrap_or_else(|| format!("#{}", self.id))
    }

    pub fn created_at_utc(&self) -> Result<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(|err| {
                TrackError::ValidationFailed(format!(
                    "order {} has bad created_at {}: {err}",
                    self.id, self.created_at
                ))
            })
    }
}

impl From<&OrderRecord> for SearchRecord {
    fn from(order: &OrderRecord) -> Self {
        Self {
            id: order.id,
            order_code: order.order_code.clone(),
            tray_type: order.tray_type.clone(),
            serial_no: order.serial_no.clone(),
            make: order.make.clone(),
            dimensions: order.dimensions.clone(),
            size: order.size.clone(),
            status: order.status.to_string(),
        }
    }
}

/// Which slice of orders a listing returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderListing {
    /// Not deleted and not completed.
    Pending,
    /// Not deleted and completed.
    Completed,
    /// Soft-deleted.
    Deleted,
    /// Not deleted and NOT_PAID.
    PendingPayment,
}

impl OrderListing {
    const fn filter(self) -> &'static str {
        match self {
            Self::Pending => "is_deleted = 0 AND status != 'COMPLETED'",
            Self::Completed => "is_deleted = 0 AND status = 'COMPLETED'",
            Self::Deleted => "is_deleted = 1",
            Self::PendingPayment => "is_deleted = 0 AND payment_status = 'NOT_PAID'",
        }
    }
}

/// SQLite database wrapper for the order table
pub struct Database {
    conn: Connection,
    schema_version: u32,
}

impl Database {
    /// Open database at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_timeout(path, DEFAULT_BUSY_TIMEOUT)
    }

    pub fn open_with_timeout(path: impl AsRef<Path>, busy_timeout: Duration) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        conn.busy_timeout(busy_timeout)?;
        Self::configure_pragmas(&conn)?;
        let schema_version = migrations::run_migrations(&conn)?;

        debug!(path = %path.display(), schema_version, "database opened");
        Ok(Self {
            conn,
            schema_version,
        })
    }

    /// Fresh in-memory database, mainly for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        let schema_version = migrations::run_migrations(&conn)?;
        Ok(Self {
            conn,
            schema_version,
        })
    }

    /// Get a reference to the connection
    pub const fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Current schema version after migrations.
    pub const fn schema_version(&self) -> u32 {
        self.schema_version
    }

    fn configure_pragmas(conn: &Connection) -> Result<()> {
        let _mode: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.pragma_update(None, "temp_store", "MEMORY")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(())
    }

    /// Insert an order and assign its `ORD-xxxx` code from the new id.
    ///
    /// Callers are expected to have run `core::validate` first.
    pub fn create_order(&self, order: &NewOrder) -> Result<OrderRecord> {
        let now = timestamp();
        self.conn.execute(
            "INSERT INTO orders (
                tray_type, serial_no, make, dimensions, nos, size,
                status, payment_status, credit_days, email, phone,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?12)",
            params![
                order.tray_type,
                order.serial_no,
                order.make,
                order.dimensions,
                order.nos,
                order.size,
                order.status.as_str(),
                order.payment_status.as_str(),
                order.effective_credit_days(),
                order.email,
                order.phone,
                now,
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        let code = order_code(id);
        self.conn.execute(
            "UPDATE orders SET order_code = ?1 WHERE id = ?2",
            params![code, id],
        )?;

        info!(id, order_code = %code, "order created");
        self.get_order(id)
    }

    /// Lookup by id, deleted or not.
    pub fn get_order(&self, id: i64) -> Result<OrderRecord> {
        self.conn
            .query_row(
                &format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = ?1"),
                [id],
                order_from_row,
            )
            .optional()?
            .ok_or_else(|| TrackError::OrderNotFound(id.to_string()))
    }

    /// Public tracking lookup; deleted orders are hidden.
    pub fn get_order_by_code(&self, code: &str) -> Result<OrderRecord> {
        self.conn
            .query_row(
                &format!(
                    "SELECT {ORDER_COLUMNS} FROM orders WHERE order_code = ?1 AND is_deleted = 0"
                ),
                [code],
                order_from_row,
            )
            .optional()?
            .ok_or_else(|| TrackError::OrderNotFound(code.to_string()))
    }

    /// Orders in one listing, most recently updated first.
    pub fn list_orders(&self, listing: OrderListing) -> Result<Vec<OrderRecord>> {
        let sql = format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE {} ORDER BY updated_at DESC, id DESC",
            listing.filter()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], order_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn list_pending(&self) -> Result<Vec<OrderRecord>> {
        self.list_orders(OrderListing::Pending)
    }

    pub fn list_completed(&self) -> Result<Vec<OrderRecord>> {
        self.list_orders(OrderListing::Completed)
    }

    pub fn list_deleted(&self) -> Result<Vec<OrderRecord>> {
        self.list_orders(OrderListing::Deleted)
    }

    pub fn list_pending_payment(&self) -> Result<Vec<OrderRecord>> {
        self.list_orders(OrderListing::PendingPayment)
    }

    pub fn update_status(&self, id: i64, status: OrderStatus) -> Result<OrderRecord> {
        let changed = self.conn.execute(
            "UPDATE orders SET status = ?1, updated_at = ?2 WHERE id = ?3",
            params![status.as_str(), timestamp(), id],
        )?;
        ensure_changed(changed, id)?;
        info!(id, status = %status, "order status updated");
        self.get_order(id)
    }

    /// Set payment status; marking PAID clears any credit days.
    pub fn update_payment(&self, id: i64, payment: PaymentStatus) -> Result<OrderRecord> {
        let changed = self.conn.execute(
            "UPDATE orders
             SET payment_status = ?1,
                 credit_days = CASE WHEN ?1 = 'PAID' THEN NULL ELSE credit_days END,
                 updated_at = ?2
             WHERE id = ?3",
            params![payment.as_str(), timestamp(), id],
        )?;
        ensure_changed(changed, id)?;
        info!(id, payment = %payment, "order payment updated");
        self.get_order(id)
    }

    pub fn soft_delete(&self, id: i64) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE orders SET is_deleted = 1, updated_at = ?1 WHERE id = ?2",
            params![timestamp(), id],
        )?;
        ensure_changed(changed, id)?;
        info!(id, "order soft-deleted");
        Ok(())
    }
}

impl RecordStore for Database {
    fn find_by_substring(
        &self,
        pattern: &str,
        fields: &[SearchField],
        limit: usize,
    ) -> Result<Vec<SearchRecord>> {
        if fields.is_empty() || limit == 0 {
            return Ok(vec![]);
        }

        let clause = fields
            .iter()
            .map(|field| format!("{} LIKE ?1", field.column()))
            .collect::<Vec<_>>()
            .join(" OR ");
        let sql = format!("SELECT {SEARCH_COLUMNS} FROM orders WHERE {clause} LIMIT ?2");

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![pattern, sql_limit(limit)], search_record_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    fn fetch_candidate_pool(&self, limit: usize) -> Result<Vec<SearchRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {SEARCH_COLUMNS} FROM orders LIMIT ?1"))?;
        let rows = stmt.query_map([sql_limit(limit)], search_record_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn sql_limit(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

fn ensure_changed(changed: usize, id: i64) -> Result<()> {
    if changed == 0 {
        return Err(TrackError::OrderNotFound(id.to_string()));
    }
    Ok(())
}

fn parse_column<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T: std::str::FromStr<Err = TrackError>,
{
    let raw: String = row.get(idx)?;
    raw.parse()
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err)))
}

fn order_from_row(row: &Row<'_>) -> rusqlite::Result<OrderRecord> {
    Ok(OrderRecord {
        id: row.get(0)?,
        order_code: row.get(1)?,
        tray_type: row.get(2)?,
        serial_no: row.get(3)?,
        make: row.get(4)?,
        dimensions: row.get(5)?,
        nos: row.get(6)?,
        size: row.get(7)?,
        status: parse_column(row, 8)?,
        payment_status: parse_column(row, 9)?,
        credit_days: row.get(10)?,
        email: row.get(11)?,
        phone: row.get(12)?,
        is_deleted: row.get(13)?,
        created_at: row.get(14)?,
        updated_at: row.get(15)?,
    })
}

fn search_record_from_row(row: &Row<'_>) -> rusqlite::Result<SearchRecord> {
    Ok(SearchRecord {
        id: row.get(0)?,
        order_code: row.get(1)?,
        tray_type: row.get(2)?,
        serial_no: row.get(3)?,
        make: row.get(4)?,
        dimensions: row.get(5)?,
        size: row.get(6)?,
        status: row.get(7)?,
    })
}
