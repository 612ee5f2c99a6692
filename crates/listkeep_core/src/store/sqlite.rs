//! SQLite-backed slot storage over the `kv_slots` table.

use super::{DurableStore, StoreResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Slot store bound to an already-migrated connection.
pub struct SqliteDurableStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDurableStore<'conn> {
    /// Wraps a connection returned by `db::open_db` or `db::open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl DurableStore for SqliteDurableStore<'_> {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_slots WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&mut self, key: &str, blob: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv_slots (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, blob],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.conn.execute("DELETE FROM kv_slots WHERE key = ?1;", [key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SqliteDurableStore;
    use crate::db::open_db_in_memory;
    use crate::store::DurableStore;

    #[test]
    fn write_overwrites_and_remove_clears_slot() {
        let conn = open_db_in_memory().unwrap();
        let mut store = SqliteDurableStore::new(&conn);

        assert_eq!(store.read("list").unwrap(), None);
        store.write("list", "[]").unwrap();
        store.write("list", "[1]").unwrap();
        assert_eq!(store.read("list").unwrap().as_deref(), Some("[1]"));

        store.remove("list").unwrap();
        store.remove("list").unwrap();
        assert_eq!(store.read("list").unwrap(), None);
    }
}
