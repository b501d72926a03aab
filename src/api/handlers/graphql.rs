//! GraphQL endpoint and the GraphiQL explorer page.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};

use crate::api::GRAPHQL_PATH;
use crate::app_state::AppState;

/// `POST /graphql` — Execute a query or mutation document.
///
/// Field failures are reported inside the response envelope; the HTTP
/// status is `200` whenever the request itself could be parsed.
pub async fn graphql_handler(
    State(state): State<AppState>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// `GET /graphql` — Interactive GraphiQL explorer.
pub async fn graphiql_handler() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// GraphQL routes. The explorer is only mounted when `graphiql_enabled`.
pub fn routes(graphiql_enabled: bool) -> Router<AppState> {
    let method_router = if graphiql_enabled {
        get(graphiql_handler).post(graphql_handler)
    } else {
        post(graphql_handler)
    };
    Router::new().route(GRAPHQL_PATH, method_router)
}
