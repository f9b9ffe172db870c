//! SiteDesk - local content manager for a small professional website
//!
//! Posts, downloadable resources and contact settings live in a local
//! key-value store and are rendered into a static public page.

mod app;
mod core;
mod site;
mod ui;

use anyhow::Context;
use app::SiteDeskApp;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::config::AppConfig;
use crate::core::gateway::StorageGateway;
use crate::core::store::FileStore;
use crate::site::controller::SiteController;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    tracing::info!("Starting SiteDesk...");

    let config = match AppConfig::load() {
        Ok(config) => {
            // Writes back any settings missing from an older config file
            if let Err(e) = config.save() {
                tracing::warn!("Could not save config: {:#}", e);
            }
            config
        }
        Err(e) => {
            tracing::warn!("Using default config: {:#}", e);
            AppConfig::default()
        }
    };

    let store = FileStore::open(config.store_path(), config.quota())
        .context("Failed to open the content store")?;
    let gateway = StorageGateway::new(store).with_date_format(config.site.date_format.clone());
    let controller = SiteController::new(gateway, config.site.excerpt_chars);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_min_inner_size([640.0, 480.0])
            .with_title("SiteDesk"),
        ..Default::default()
    };

    eframe::run_native(
        "SiteDesk",
        native_options,
        Box::new(|cc| Ok(Box::new(SiteDeskApp::new(cc, config, controller)))),
    )
    .map_err(|e| anyhow::anyhow!("UI error: {}", e))
}
