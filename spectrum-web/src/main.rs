//! spectrum - mood-space music explorer for the browser

use dioxus::prelude::*;
use spectrum_web::config::AppConfig;
use spectrum_web::App;
use tracing::{info, warn};

fn main() {
    let (config, problems) = AppConfig::load();
    if let Err(e) = dioxus::logger::init(config.log_level) {
        eprintln!("Failed to initialize logger: {e}");
    }
    for problem in &problems {
        warn!("{problem}; using default");
    }
    info!(
        "Starting spectrum (api base {}, track limit {})",
        config.api_base, config.track_limit
    );

    LaunchBuilder::new().with_context(config).launch(App);
}
