use contact_api::http;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use tokio::net::TcpListener;
use tokio::sync::oneshot::{self, Sender};
use tracing::Level;

pub struct TestApp {
    pub base_url: String,
    pub db: DatabaseConnection,
}

/// Boots the contact API over a fresh in-memory database on an ephemeral
/// port. The returned handle shares the database connection so tests can
/// assert on rows directly.
pub async fn setup() -> (TestApp, Sender<()>) {
    // Set up logging; only the first test to get here wins.
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .try_init();

    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Unable to open in-memory database");

    Migrator::up(&db, None)
        .await
        .expect("Unable to run database migrations");

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Unable to open listen socket");
    let addr = listener.local_addr().unwrap();

    let (tx, rx) = oneshot::channel();
    let app = http::router(db.clone());

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                rx.await.ok();
            })
            .await
            .expect("server execution failed");
    });

    let test_app = TestApp {
        base_url: format!("http://{}", addr),
        db,
    };

    (test_app, tx)
}

pub fn shutdown(tx: Sender<()>) {
    tx.send(()).unwrap();
}
