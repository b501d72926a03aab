//! HTTP endpoint handlers.

pub mod graphql;
pub mod system;
