//! HTTP server for Factory Method Adventures.
//!
//! Exposes the progression service as a JSON REST API: user progress, XP
//! writes, story and quiz completion, badges, unlock status and the
//! leaderboard.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::{AppConfig, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use handler::AppState;
pub use server::FmaServer;
