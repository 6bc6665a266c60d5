//! Playtomic API Client Library
//!
//! This library wraps the HTTP API of the Playtomic sports-booking platform:
//! it authenticates a user with email/password credentials, keeps the bearer
//! token fresh, and exposes thin tenant and tournament endpoints.
//!
//! # Examples
//!
//! ```rust,no_run
//! use playtomic_client::PlaytomicClient;
//! use playtomic_client::error::PlaytomicError;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), PlaytomicError> {
//!     let mut client = PlaytomicClient::connect("user@example.com", "password").await?;
//!
//!     // Fetch a tenant (a venue or club)
//!     let tenant = client.tenants().get("tenant-id").await?;
//!     println!("{tenant}");
//!
//!     // Create a tournament tied to it
//!     let tournament = client
//!         .tournaments()
//!         .create(json!({
//!             "tenant_id": "tenant-id",
//!             "name": "Spring Open",
//!         }))
//!         .await?;
//!     println!("{tournament}");
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod constants;
pub mod endpoints;
pub mod error;
pub mod logging;
pub mod models;

// Re-export commonly used types for convenience
pub use auth::{Credentials, TokenState};
pub use client::PlaytomicClient;
pub use config::ClientConfig;
pub use endpoints::{Tenants, Tournaments};
pub use error::PlaytomicError;
pub use models::TokenResponse;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
