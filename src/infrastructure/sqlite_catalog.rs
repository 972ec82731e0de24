// SQLite catalog repository implementation
use crate::application::catalog_repository::CatalogRepository;
use crate::domain::signal::{AvailableSignal, CatalogRow, SignalIdentity};
use anyhow::{Context, Result};
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::Mutex;

/// Read-only view over the simulation database. The connection is behind a
/// mutex; every query runs to completion without suspension, so the lock is
/// never held across an await.
pub struct SqliteCatalog {
    conn: Mutex<Connection>,
}

impl SqliteCatalog {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open catalog database at {}", path.display()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: Mutex::new(Connection::open_in_memory()?),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow::anyhow!("catalog connection poisoned"))
    }

    fn row_to_identity(row: &Row<'_>) -> rusqlite::Result<SignalIdentity> {
        Ok(SignalIdentity {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            unit: row.get(3)?,
            case_name: row.get(4)?,
        })
    }
}

#[async_trait]
impl CatalogRepository for SqliteCatalog {
    async fn list_catalog_rows(&self) -> Result<Vec<CatalogRow>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT DISTINCT s.name, s.description, s.unit, sc.name
             FROM signals s
             JOIN simulation_cases sc ON s.case_id = sc.id
             ORDER BY s.name, sc.name",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(CatalogRow {
                    signal_name: row.get(0)?,
                    description: row.get(1)?,
                    unit: row.get(2)?,
                    case_name: row.get(3)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    async fn find_signal_by_id(&self, id: i64) -> Result<Option<SignalIdentity>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT s.id, s.name, s.description, s.unit, sc.name
             FROM signals s
             JOIN simulation_cases sc ON s.case_id = sc.id
             WHERE s.id = ?1",
        )?;
        let signal = stmt
            .query_row(params![id], Self::row_to_identity)
            .optional()?;
        Ok(signal)
    }

    async fn find_signal_by_name_case(
        &self,
        name: &str,
        case: &str,
    ) -> Result<Option<SignalIdentity>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT s.id, s.name, s.description, s.unit, sc.name
             FROM signals s
             JOIN simulation_cases sc ON s.case_id = sc.id
             WHERE s.name = ?1 AND sc.name = ?2",
        )?;
        let signal = stmt
            .query_row(params![name, case], Self::row_to_identity)
            .optional()?;
        Ok(signal)
    }

    async fn list_available_signals(&self) -> Result<Vec<AvailableSignal>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT s.id, s.name, sc.name
             FROM signals s
             JOIN simulation_cases sc ON s.case_id = sc.id
             ORDER BY sc.name, s.name",
        )?;
        let signals = stmt
            .query_map([], |row| {
                Ok(AvailableSignal {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    case_name: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(signals)
    }
}
