//! SQLite connection wrapper (lightweight, one per CLI invocation).

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::{Connection, Result};
use std::path::Path;
use std::time::Duration;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Private database, used by tests and dry runs.
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    /// Open the configured database, apply the busy timeout and make sure
    /// the schema is current.
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let pool = Self::new(&cfg.database)?;
        pool.conn
            .busy_timeout(Duration::from_millis(cfg.busy_timeout_ms))?;
        init_db(&pool.conn)?;
        Ok(pool)
    }
}
