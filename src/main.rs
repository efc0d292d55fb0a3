use hbnb::{app, bootstrap};
use tracing::info;

#[tokio::main]
async fn main() {
    let (config, hbnb) = bootstrap::app::setup();

    let jobs = app::start(&config, hbnb).await;

    // handle the signals
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("HBnB shutting down..");

            // Await for all jobs to shutdown
            futures::future::join_all(jobs).await;
            info!("HBnB successfully shutdown.");
        }
    }
}
