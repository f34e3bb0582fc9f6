// Presentation layer - Local HTTP surface for the dashboard
pub mod app_state;
pub mod handlers;
