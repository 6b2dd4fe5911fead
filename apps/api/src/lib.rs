//! # Kasir API
//!
//! HTTP server for the Kasir point-of-sale frontend.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Kasir API                                       │
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────────┐│
//! │  │ CheckoutService│  │ ReportService  │  │ ProductService             ││
//! │  │                │  │                │  │                            ││
//! │  │ • checkout     │  │ • daily_report │  │ • list / get               ││
//! │  │ • transaction  │  │ • by_range     │  │ • create / update / delete ││
//! │  └───────┬────────┘  └───────┬────────┘  └─────────────┬──────────────┘│
//! │          │                   │                         │               │
//! │          ▼                   ▼                         ▼               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │              kasir-db (SQLite, one shared pool)                  │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables (a `.env` file is honored):
//! - `HOST` - bind address (default: 0.0.0.0)
//! - `PORT` - HTTP port (default: 8080)
//! - `DB_CONN` / `DATABASE_PATH` - SQLite file (default: kasir.db)
//! - `DB_MAX_CONNECTIONS` - pool size (default: 5)
//! - `RUST_LOG` - log filter (default: info)

pub mod config;
pub mod error;
pub mod routes;
pub mod services;
pub mod state;

// Re-exports
pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ApiResult, ErrorCode};
pub use routes::build_app;
pub use state::AppState;
