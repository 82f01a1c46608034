use std::collections::HashSet;
use std::path::Path;

use sqlx::migrate::{Migrate, Migrator};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::{Config, Direction};
use crate::errors::{MigrationError, Result};
use crate::plan;

/// What a run changed; empty when the database was already at the target
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Outcome {
    pub applied: Vec<i64>,
    pub reverted: Vec<i64>,
}

impl Outcome {
    pub fn is_no_change(&self) -> bool {
        self.applied.is_empty() && self.reverted.is_empty()
    }
}

pub async fn load_migrations(dir: &Path) -> Result<Migrator> {
    Migrator::new(dir.to_path_buf())
        .await
        .map_err(|source| MigrationError::Load {
            path: dir.to_path_buf(),
            source,
        })
}

/// Versions of the forward migrations found in the directory
pub fn up_versions(migrator: &Migrator) -> Vec<i64> {
    migrator
        .iter()
        .filter(|m| m.migration_type.is_up_migration())
        .map(|m| m.version)
        .collect()
}

pub fn is_reversible(migrator: &Migrator) -> bool {
    migrator.iter().any(|m| m.migration_type.is_down_migration())
}

/// Run the configured migration against the database
pub async fn run(config: &Config) -> Result<Outcome> {
    let database_url = config.database_url()?;
    let mut migrator = load_migrations(&config.migrations).await?;

    if config.direction == Direction::Down && !is_reversible(&migrator) {
        return Err(MigrationError::NotReversible(config.migrations.clone()));
    }

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(database_url)
        .await
        .map_err(MigrationError::Connect)?;

    let result = match config.direction {
        Direction::Up => apply(&pool, &mut migrator, config.steps).await,
        Direction::Down => revert(&pool, &migrator, config.steps).await,
    };

    pool.close().await;
    result
}

async fn apply(pool: &PgPool, migrator: &mut Migrator, steps: u32) -> Result<Outcome> {
    let applied = applied_versions(pool).await?;
    let planned = plan::versions_to_apply(&up_versions(migrator), &applied, steps);
    tracing::debug!(?planned, "Planned up migrations");

    if steps > 0 {
        // Hide pending migrations beyond the requested steps from the migrator
        let keep: HashSet<i64> = applied.iter().chain(planned.iter()).copied().collect();
        migrator
            .migrations
            .to_mut()
            .retain(|m| m.migration_type.is_down_migration() || keep.contains(&m.version));
    }

    // Whatever is available runs before a short step count is reported
    migrator.run(pool).await?;
    plan::ensure_step_limit(steps, planned.len())?;

    Ok(Outcome {
        applied: planned,
        reverted: Vec::new(),
    })
}

async fn revert(pool: &PgPool, migrator: &Migrator, steps: u32) -> Result<Outcome> {
    let applied = applied_versions(pool).await?;
    let target = plan::revert_target(&applied, steps);
    let reverted = plan::versions_to_revert(&applied, target);
    tracing::debug!(target, ?reverted, "Planned down migrations");

    migrator.undo(pool, target).await?;
    plan::ensure_step_limit(steps, reverted.len())?;

    Ok(Outcome {
        applied: Vec::new(),
        reverted,
    })
}

async fn applied_versions(pool: &PgPool) -> Result<Vec<i64>> {
    let mut conn = pool.acquire().await.map_err(MigrationError::Connect)?;
    conn.ensure_migrations_table().await?;

    let applied = conn.list_applied_migrations().await?;
    Ok(applied.into_iter().map(|m| m.version).collect())
}
