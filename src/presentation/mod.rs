pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
pub mod views;

pub use config::{Environment, ScaffoldConfig, Settings};
pub use router::create_router;
pub use state::AppState;
