//! World API SDK for Rust.
//!
//! A typed client for the EVE Frontier World API — the HTTP gateway that
//! exposes the game world's state (types, assemblies, characters,
//! killmails, solar systems) and relays pre-signed metatransactions.
//!
//! # What This SDK Provides
//!
//! - High-level client: [`WorldClient`], whole-result-set listings
//! - Typed REST access: [`api::WorldApi`], one method per endpoint
//! - A rate-limited FIFO request queue: [`RequestQueue`]
//! - Paginated aggregation: [`pagination::fetch_all`]
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use frontier_sdk::{World, WorldClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), frontier_sdk::WorldError> {
//!     let client = WorldClient::new(World::Stillness);
//!
//!     if !client.health().await {
//!         eprintln!("gateway is down");
//!         return Ok(());
//!     }
//!
//!     // Every game type, all pages aggregated.
//!     let types = client.types().await?;
//!     println!("{} types", types.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Rate Limiting
//!
//! Every request goes through a FIFO queue drained in time-boxed batches.
//! The default configuration is unthrottled; to stay under a gateway
//! limit, construct the client with an explicit [`QueueConfig`]:
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use frontier_sdk::{QueueConfig, World, WorldClient, WorldConfig};
//!
//! let client = WorldClient::with_queue_config(
//!     WorldConfig::from_world(World::Stillness),
//!     QueueConfig {
//!         interval: Duration::from_millis(1000),
//!         max_per_interval: 10,
//!     },
//! );
//! ```
//!
//! # Authenticated Endpoints
//!
//! The `me/` endpoints take a bearer token obtained by the embedding
//! application (token acquisition is outside this SDK):
//!
//! ```rust,no_run
//! # use frontier_sdk::{World, WorldClient};
//! # #[tokio::main]
//! # async fn main() -> Result<(), frontier_sdk::WorldError> {
//! let client = WorldClient::new(World::Stillness);
//! let jumps = client.jumps("<access token>").await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! This crate emits debug-level logs through the [`log`](https://docs.rs/log/)
//! facade for API calls, transport exchanges, and queue drain activity.
//! Configure any compatible logger in your binary, then set
//! `RUST_LOG=debug` to inspect request flow.
//!
//! # Errors
//!
//! All fallible operations return [`WorldError`]. Match specific variants
//! for robust handling:
//!
//! - Transport failures (`Network`) and gateway error statuses (`Status`,
//!   carrying the parsed error body)
//! - Pagination-contract violations (`MissingPayload`, `MissingData`,
//!   `MissingMetadata`, `MissingTotal`, `TotalMismatch`)
//! - Aggregation aborts with the failing page's offset
//!   (`AggregationAborted`)
//!
//! There are no automatic retries: a failed request fails its caller
//! immediately, and a failed page discards the whole aggregation.
pub mod api;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod pagination;
pub mod queue;
pub mod request;
pub mod transport;

// Re-export primary types for convenience.
pub use api::WorldApi;
pub use client::WorldClient;
pub use config::{World, WorldConfig};
pub use errors::WorldError;
pub use models::*;
pub use pagination::{Page, PageWindow};
pub use queue::{QueueConfig, RequestQueue, ResponseHandle};
pub use request::{ApiRequest, ResponseFormat};
pub use transport::{ParsedResponse, Transport};
