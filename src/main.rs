use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lanserve::config::Config;
use lanserve::launch::{BrowserLauncher, SystemBrowser};
use lanserve::{net, server};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lanserve=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env().apply_args(std::env::args().skip(1));

    // Resolved once at startup; interface hot-plug is not supported.
    let ip = net::local_ipv4();
    if ip.is_empty() {
        tracing::warn!("No LAN-reachable IPv4 interface found");
    }

    let handle = server::start(&config)
        .await
        .expect("Failed to bind to address");

    let url = net::public_url(&ip, handle.port());
    println!("Server is running at {}", url);

    if config.open_browser {
        if let Err(e) = SystemBrowser.open(&url) {
            tracing::warn!("{} (open {} in a browser manually)", e, url);
        }
    }

    handle.wait().await;
}
