//! Database models for toilets and ratings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{RatingId, ToiletId};

/// A stored row from the `toilets` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ToiletRecord {
    /// Auto-increment row ID.
    pub id: ToiletId,
    /// Display name.
    pub name: String,
    /// Free-form location description (e.g. `"1F"`).
    pub location: String,
    /// Server-side creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last write timestamp. Equal to `created_at` since rows are never
    /// updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker. Rows with this set are invisible to reads.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// A stored row from the `toilet_ratings` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct RatingRecord {
    /// Auto-increment row ID.
    pub id: RatingId,
    /// Toilet this rating belongs to.
    pub toilet_id: ToiletId,
    /// Score, expected to be 1–5 but not enforced.
    pub rating: i32,
    /// Free-form comment.
    pub comment: String,
    /// Server-side creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last write timestamp.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker.
    pub deleted_at: Option<DateTime<Utc>>,
}
