//! UI components for SiteDesk

pub mod admin;
pub mod config_tab;
pub mod dialogs;
pub mod posts_tab;
pub mod resources_tab;
pub mod site_view;
