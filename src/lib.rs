pub mod app;
pub mod client;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod page;
pub mod reframe;
pub mod session;
pub mod state;
pub mod ui;

pub use app::router;
pub use client::GenerateClient;
pub use config::Config;
pub use state::AppState;
