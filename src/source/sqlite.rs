use std::path::Path;

use rusqlite::types::ValueRef;
use rusqlite::{params, params_from_iter, Connection};

use super::{EntityKind, RecordQuery, RecordSource, Row, RowIter, Value};
use crate::error::{ContactResult, DataAccessError};
use crate::model::ContactId;

/// A local contact store backed by SQLite, shaped like the five record
/// entities. Doubles as the [`RecordSource`] used in production and as the
/// fixture store for integration tests.
pub struct SqliteSource {
    conn: Connection,
}

impl SqliteSource {
    pub fn open(path: impl AsRef<Path>) -> ContactResult<Self> {
        let conn = Connection::open(path)?;
        initialize(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> ContactResult<Self> {
        let conn = Connection::open_in_memory()?;
        initialize(&conn)?;
        Ok(Self { conn })
    }

    /// Insert a contact master row and return its assigned id.
    pub fn add_contact(&self, name: &str, photo_uri: Option<&str>) -> ContactResult<ContactId> {
        self.conn.execute(
            "INSERT INTO contacts (display_name, photo_uri) VALUES (?1, ?2)",
            params![name, photo_uri],
        )?;
        Ok(ContactId::new(self.conn.last_insert_rowid().to_string()))
    }

    /// Insert a phone row. The display name is denormalized from the contact
    /// master row, the way the platform's phone view carries it.
    pub fn add_phone(
        &self,
        contact_id: &ContactId,
        number: &str,
        phone_type: i64,
    ) -> ContactResult<()> {
        self.ensure_contact(contact_id)?;
        self.conn.execute(
            "INSERT INTO phones (contact_id, display_name, number, type)
             SELECT ?1, display_name, ?2, ?3 FROM contacts WHERE _id = ?1",
            params![contact_id.as_str(), number, phone_type],
        )?;
        Ok(())
    }

    pub fn add_email(
        &self,
        contact_id: &ContactId,
        address: &str,
        email_type: i64,
    ) -> ContactResult<()> {
        self.ensure_contact(contact_id)?;
        self.conn.execute(
            "INSERT INTO emails (contact_id, address, type) VALUES (?1, ?2, ?3)",
            params![contact_id.as_str(), address, email_type],
        )?;
        Ok(())
    }

    pub fn add_organization(
        &self,
        contact_id: &ContactId,
        company: Option<&str>,
        title: Option<&str>,
    ) -> ContactResult<()> {
        self.ensure_contact(contact_id)?;
        self.conn.execute(
            "INSERT INTO data_records (contact_id, record_type, company, title)
             VALUES (?1, 'organization', ?2, ?3)",
            params![contact_id.as_str(), company, title],
        )?;
        Ok(())
    }

    pub fn add_address(&self, contact_id: &ContactId, formatted: &str) -> ContactResult<()> {
        self.ensure_contact(contact_id)?;
        self.conn.execute(
            "INSERT INTO postal_addresses (contact_id, formatted_address) VALUES (?1, ?2)",
            params![contact_id.as_str(), formatted],
        )?;
        Ok(())
    }

    fn ensure_contact(&self, contact_id: &ContactId) -> ContactResult<()> {
        let found: Result<i64, rusqlite::Error> = self.conn.query_row(
            "SELECT 1 FROM contacts WHERE _id = ?1",
            params![contact_id.as_str()],
            |row| row.get(0),
        );
        match found {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(DataAccessError::Query(format!(
                "unknown contact: {}",
                contact_id
            ))),
            Err(e) => Err(e.into()),
        }
    }
}

impl RecordSource for SqliteSource {
    fn query(&self, query: &RecordQuery) -> ContactResult<RowIter> {
        let columns = match &query.columns {
            Some(cols) => cols.join(", "),
            None => "*".to_string(),
        };
        let mut sql = format!("SELECT {} FROM {}", columns, table(query.entity));
        if let Some(selection) = &query.selection {
            sql.push_str(" WHERE ");
            sql.push_str(selection);
        }
        if let Some(order_by) = &query.order_by {
            sql.push_str(" ORDER BY ");
            sql.push_str(order_by);
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let names: Vec<String> = stmt
            .column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();

        // The statement is fully drained here; its cursor is released before
        // the rows are handed out.
        let mut out = Vec::new();
        let mut rows = stmt.query(params_from_iter(query.selection_args.iter()))?;
        while let Some(row) = rows.next()? {
            let mut decoded = Row::new();
            for (i, name) in names.iter().enumerate() {
                decoded.insert(name, decode_value(row.get_ref(i)?));
            }
            out.push(decoded);
        }

        Ok(Box::new(out.into_iter().map(Ok)))
    }
}

fn table(entity: EntityKind) -> &'static str {
    match entity {
        EntityKind::Contacts => "contacts",
        EntityKind::Phones => "phones",
        EntityKind::Emails => "emails",
        EntityKind::Data => "data_records",
        EntityKind::PostalAddresses => "postal_addresses",
    }
}

fn decode_value(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Integer(i),
        ValueRef::Real(r) => Value::Real(r),
        ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Value::Blob(b.to_vec()),
    }
}

/// Create the entity tables if they don't exist.
fn initialize(conn: &Connection) -> ContactResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS contacts (
            _id INTEGER PRIMARY KEY,
            display_name TEXT,
            photo_uri TEXT
        );

        CREATE TABLE IF NOT EXISTS phones (
            _id INTEGER PRIMARY KEY,
            contact_id TEXT NOT NULL,
            display_name TEXT,
            number TEXT,
            type INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS emails (
            _id INTEGER PRIMARY KEY,
            contact_id TEXT NOT NULL,
            address TEXT,
            type INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS data_records (
            _id INTEGER PRIMARY KEY,
            contact_id TEXT NOT NULL,
            record_type TEXT NOT NULL,
            company TEXT,
            title TEXT
        );

        CREATE TABLE IF NOT EXISTS postal_addresses (
            _id INTEGER PRIMARY KEY,
            contact_id TEXT NOT NULL,
            formatted_address TEXT
        );
        ",
    )?;
    Ok(())
}
