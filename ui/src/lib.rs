//! Shared UI crate for Upsell Analytics. Cross-platform logic and views live here.

pub mod analytics;
pub mod core;
pub mod dashboard;
pub mod dataset;
pub mod views;

pub mod components {
    // Application header shared by the web and desktop shells.
    pub mod app_header;
    pub use app_header::AppHeader;
}
