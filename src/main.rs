use std::env;

use tokio::signal;

use contact_api::real_main;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config_file = env::args()
        .nth(1)
        .unwrap_or_else(|| format!("/etc/{}.toml", env!("CARGO_PKG_NAME")));

    real_main(config_file, signal::ctrl_c()).await;
}
