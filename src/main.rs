//! QuoteBox desktop entry point

use dioxus::desktop::{Config, WindowBuilder};
use quotebox::app::App;
use quotebox::ui::STYLE;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quotebox=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}

fn main() {
    init_tracing();
    tracing::info!("Starting QuoteBox {}", env!("CARGO_PKG_VERSION"));

    let window = WindowBuilder::new()
        .with_title("QuoteBox")
        .with_resizable(true);
    let config = Config::new()
        .with_window(window)
        .with_custom_head(format!("<style>{}</style>", STYLE));

    dioxus::LaunchBuilder::desktop().with_cfg(config).launch(App);
}
