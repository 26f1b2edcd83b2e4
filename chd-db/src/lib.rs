//! In-memory SQLite store for county health statistics.
//!
//! Mirrors the way the dashboard consumes data: the CSV is parsed once,
//! loaded into an in-memory database, and the charts and the CLI query it
//! through typed methods.
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - NaN attribute values are stored as NULL
//!
//! # Usage
//!
//! ```rust
//! use chd_core::Attribute;
//! use chd_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_counties("cnty_fips,display_name,poverty_perc\n1001,Autauga County,15.2\n").unwrap();
//!
//! let counties = db.query_counties().unwrap();
//! assert_eq!(counties.len(), 1);
//! assert_eq!(db.query_extent(Attribute::PovertyPerc).unwrap(), Some((15.2, 15.2)));
//! ```

pub mod models;
pub mod schema;
mod loader;
mod queries;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database of county records.
///
/// Cheaply cloneable (via `Rc`) so it can be shared across Dioxus components.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create an empty in-memory database with the schema applied.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

impl PartialEq for Database {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.conn, &other.conn)
    }
}
