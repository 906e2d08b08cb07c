//! Schema migrations tracked through `PRAGMA user_version`.

use rusqlite::Connection;
use tracing::info;

use crate::error::Result;

pub const SCHEMA_VERSION: u32 = 1;

const MIGRATIONS: [&str; 1] = [
    "CREATE TABLE IF NOT EXISTS orders (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        order_code TEXT UNIQUE,
        tray_type TEXT,
        serial_no TEXT,
        make TEXT,
        dimensions TEXT,
        nos INTEGER,
        size TEXT,
        status TEXT NOT NULL DEFAULT 'CUTTING',
        payment_status TEXT NOT NULL DEFAULT 'PAID',
        credit_days INTEGER,
        email TEXT,
        phone TEXT,
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_orders_listing ON orders(is_deleted, status, updated_at);
    CREATE INDEX IF NOT EXISTS idx_orders_payment ON orders(is_deleted, payment_status);",
];

/// Apply pending migrations and return the resulting schema version.
pub fn run_migrations(conn: &Connection) -> Result<u32> {
    let current: u32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    for (idx, sql) in MIGRATIONS.iter().enumerate().skip(current as usize) {
        let version = idx as u32 + 1;
        conn.execute_batch(sql)?;
        conn.pragma_update(None, "user_version", version)?;
        info!(version, "applied migration");
    }

    Ok(current.max(SCHEMA_VERSION))
}
