pub mod config;
pub mod errors;
pub mod plan;
pub mod runner;

// Re-exports for convenience
pub use config::{Config, Direction};
pub use errors::{MigrationError, Result};
pub use runner::{is_reversible, load_migrations, run, up_versions, Outcome};
