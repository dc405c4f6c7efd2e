//! Shared types for the HTTP layer.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rusqlite::Connection;

use crate::db::{open_database, DatabaseError};

/// Shared context for all API routes.
///
/// Holds the database path. Each handler opens a scoped connection via
/// [`ApiContext::open_db`] and drops it when the handler returns, on
/// success and failure alike — connections never outlive a request.
#[derive(Clone)]
pub struct ApiContext {
    db_path: Arc<PathBuf>,
}

impl ApiContext {
    pub fn new(db_path: PathBuf) -> Self {
        Self {
            db_path: Arc::new(db_path),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Open a connection for the duration of one request.
    pub fn open_db(&self) -> Result<Connection, DatabaseError> {
        open_database(&self.db_path)
    }
}
