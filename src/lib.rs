//! # toilet-ratings
//!
//! GraphQL service for listing toilets and collecting their ratings.
//!
//! Clients create toilets, submit ratings for them, and query toilets
//! together with their ratings and average score. Everything is stored in
//! SQLite; the schema is migrated on startup.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── GraphQL endpoint + GraphiQL (api/)
//!     ├── Health endpoint (api/)
//!     │
//!     ├── ToiletService (service/)
//!     ├── Rating statistics (domain/)
//!     │
//!     └── SQLite Persistence (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
