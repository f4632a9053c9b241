//! Browser-independent half of the capacity dashboard.
//!
//! The Leptos app renders from these types; nothing in here touches the DOM,
//! so all of it runs under plain `cargo test`.

pub mod chart;
pub mod client;
pub mod config;
pub mod console;
pub mod error;
pub mod format;
pub mod map;
pub mod nav;
pub mod recommendation;
pub mod request;
pub mod session;
pub mod settings;

pub use client::{ApiClient, ApiResponse, ForecastWindow, HttpRequest, HttpResponse, Method, Transport};
pub use config::{ConfigError, DashboardConfig, MapConfig};
pub use error::ApiError;
pub use request::{Payload, Phase, RequestState};
pub use session::Session;
