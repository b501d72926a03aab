//! GraphQL output types.
//!
//! Each type wraps the storage row it was loaded from. Scalar fields read
//! straight from the row; relation and computed fields go back to the
//! [`ToiletService`] held in the schema context.

use async_graphql::{Context, ID, Object, Result};

use crate::error::into_field_error;
use crate::persistence::{RatingRecord, ToiletRecord};
use crate::service::ToiletService;

/// A toilet that can be rated.
#[derive(Debug, Clone)]
pub struct Toilet(ToiletRecord);

impl From<ToiletRecord> for Toilet {
    fn from(record: ToiletRecord) -> Self {
        Self(record)
    }
}

#[Object]
impl Toilet {
    /// Storage-assigned identifier.
    async fn uid(&self) -> ID {
        ID(self.0.id.to_string())
    }

    /// Display name.
    async fn name(&self) -> &str {
        &self.0.name
    }

    /// Where the toilet is.
    async fn location(&self) -> &str {
        &self.0.location
    }

    /// Every rating submitted for this toilet, oldest first.
    async fn ratings(&self, ctx: &Context<'_>) -> Result<Option<Vec<ToiletRating>>> {
        let service = ctx.data::<ToiletService>()?;
        let ratings = service.ratings(&self.0).await.map_err(into_field_error)?;
        Ok(Some(ratings.into_iter().map(ToiletRating::from).collect()))
    }

    /// Mean of all ratings, or `null` if the toilet has not been rated.
    async fn avg_rating(&self, ctx: &Context<'_>) -> Result<Option<f64>> {
        let service = ctx.data::<ToiletService>()?;
        service
            .average_rating(&self.0)
            .await
            .map_err(into_field_error)
    }
}

/// A single rating left for a toilet.
#[derive(Debug, Clone)]
pub struct ToiletRating(RatingRecord);

impl From<RatingRecord> for ToiletRating {
    fn from(record: RatingRecord) -> Self {
        Self(record)
    }
}

#[Object]
impl ToiletRating {
    /// Storage-assigned identifier.
    async fn uid(&self) -> ID {
        ID(self.0.id.to_string())
    }

    /// Score, nominally 1 to 5.
    async fn rating(&self) -> i32 {
        self.0.rating
    }

    /// Free-form comment.
    async fn comment(&self) -> &str {
        &self.0.comment
    }
}
