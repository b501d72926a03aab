//! Persistence layer: SQLite storage for toilets and ratings.
//!
//! [`SqliteStore`] owns the connection pool, applies the embedded
//! migrations at startup and exposes the create/read operations the
//! service layer builds on.

pub mod models;
pub mod sqlite;

pub use models::{RatingRecord, ToiletRecord};
pub use sqlite::SqliteStore;
