use std::future::Future;

use futures::FutureExt;
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use tokio::net::TcpListener;
use tracing::info;

pub mod http;
pub mod settings;
pub mod store;
pub mod validate;

use settings::Settings;

/// Loads settings, migrates the database and serves the contact API until
/// the shutdown future resolves. Separate from `main` so integration tests
/// can boot the real service against a test configuration.
pub async fn real_main(
    config_file: String,
    shutdown: impl Future<Output = std::io::Result<()>> + Send + 'static,
) {
    let settings = Settings::new(&config_file).expect("Unable to read configuration");

    let db = Database::connect(settings.get_db_url())
        .await
        .expect("Unable to connect to database");

    Migrator::up(&db, None)
        .await
        .expect("Unable to run database migrations");

    let listener = TcpListener::bind(settings.get_listen_address())
        .await
        .expect("Unable to open listen socket");

    info!("listening on {}", settings.get_listen_address());

    axum::serve(listener, http::router(db))
        .with_graceful_shutdown(shutdown.map(|_| ()))
        .await
        .expect("server execution failed");
}
