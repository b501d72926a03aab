//! GraphQL schema: query and mutation roots.
//!
//! Every root field is nullable. A failing field resolves to `null` and
//! contributes one entry to the response's `errors` list; its siblings are
//! unaffected.

use async_graphql::extensions::Tracing;
use async_graphql::{Context, EmptySubscription, ID, Object, Result, Schema};

use super::types::{Toilet, ToiletRating};
use crate::domain::ToiletId;
use crate::error::into_field_error;
use crate::service::ToiletService;

/// The executable schema served at `/graphql`.
pub type ToiletSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema with `service` registered as context data.
#[must_use]
pub fn build_schema(service: ToiletService) -> ToiletSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(service)
        .extension(Tracing)
        .finish()
}

/// Read-only entry points.
#[derive(Debug, Default, Clone, Copy)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All toilets.
    async fn toilets(&self, ctx: &Context<'_>) -> Result<Option<Vec<Toilet>>> {
        let service = ctx.data::<ToiletService>()?;
        let toilets = service.toilets().await.map_err(into_field_error)?;
        Ok(Some(toilets.into_iter().map(Toilet::from).collect()))
    }

    /// A single toilet by `uid`.
    async fn toilet(&self, ctx: &Context<'_>, uid: ID) -> Result<Option<Toilet>> {
        let service = ctx.data::<ToiletService>()?;
        let id = uid.parse::<ToiletId>().map_err(into_field_error)?;
        let toilet = service.toilet(id).await.map_err(into_field_error)?;
        Ok(Some(Toilet::from(toilet)))
    }
}

/// Write entry points.
#[derive(Debug, Default, Clone, Copy)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Registers a new toilet.
    async fn create_toilet(
        &self,
        ctx: &Context<'_>,
        name: String,
        location: String,
    ) -> Result<Option<Toilet>> {
        let service = ctx.data::<ToiletService>()?;
        let toilet = service
            .create_toilet(&name, &location)
            .await
            .map_err(into_field_error)?;
        Ok(Some(Toilet::from(toilet)))
    }

    /// Rates an existing toilet.
    async fn rate_toilet(
        &self,
        ctx: &Context<'_>,
        uid: ID,
        rating: i32,
        comment: String,
    ) -> Result<Option<ToiletRating>> {
        let service = ctx.data::<ToiletService>()?;
        let id = uid.parse::<ToiletId>().map_err(into_field_error)?;
        let record = service
            .rate_toilet(id, rating, &comment)
            .await
            .map_err(into_field_error)?;
        Ok(Some(ToiletRating::from(record)))
    }
}
