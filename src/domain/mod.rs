//! Domain layer: entity identifiers and rating statistics.
//!
//! Types here carry no storage or transport concerns; the persistence and
//! API layers both build on them.

pub mod ids;
pub mod rating_stats;

pub use ids::{RatingId, ToiletId};
pub use rating_stats::average_rating;
