//! API layer: GraphQL schema, HTTP handlers, and router composition.
//!
//! The GraphQL endpoint lives at [`GRAPHQL_PATH`]; system endpoints are
//! mounted at the root.

pub mod handlers;
pub mod schema;
pub mod types;

use axum::Router;

use crate::app_state::AppState;

/// Fixed path of the GraphQL endpoint and the GraphiQL explorer.
pub const GRAPHQL_PATH: &str = "/graphql";

/// Builds the complete API router.
pub fn build_router(graphiql_enabled: bool) -> Router<AppState> {
    Router::new()
        .merge(handlers::graphql::routes(graphiql_enabled))
        .merge(handlers::system::routes())
}
