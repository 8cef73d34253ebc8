use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use tracing::info;

use crate::error::AppResult;

const PRAGMAS: &[&str] = &["PRAGMA journal_mode=WAL", "PRAGMA synchronous=NORMAL"];

/// Connects and brings the schema up to date. With `reset` every table is
/// dropped first, so the store starts empty.
pub async fn connect_and_migrate(database_url: &str, reset: bool) -> AppResult<DatabaseConnection> {
    let mut opts = ConnectOptions::new(database_url);
    // Each pooled connection to `:memory:` would see its own empty database.
    if database_url.contains(":memory:") {
        opts.max_connections(1).min_connections(1);
    }
    let db = Database::connect(opts).await?;

    for pragma in PRAGMAS {
        db.execute(Statement::from_string(db.get_database_backend(), pragma.to_string())).await?;
    }

    if reset {
        info!("recreating schema");
        Migrator::fresh(&db).await?;
    } else {
        Migrator::up(&db, None).await?;
    }
    Ok(db)
}
