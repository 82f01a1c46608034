use std::path::PathBuf;

use sqlx::migrate::MigrateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("missing DATABASE_URL (or --database-url)")]
    MissingDatabaseUrl,

    #[error("failed to load migrations from {path:?}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: MigrateError,
    },

    #[error("migrations in {0:?} are not reversible, down needs <version>_<name>.down.sql files")]
    NotReversible(PathBuf),

    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("requested {requested} migration steps but only {available} could run")]
    ShortLimit { requested: u32, available: usize },

    #[error("migration failed: {0}")]
    Migrate(#[from] MigrateError),
}

impl MigrationError {
    /// Process exit code: 2 for bad invocation, 1 for anything that failed while running
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingDatabaseUrl | Self::NotReversible(_) => 2,
            Self::Load { .. }
            | Self::Connect(_)
            | Self::ShortLimit { .. }
            | Self::Migrate(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, MigrationError>;
