//! Service layer: business logic orchestration.
//!
//! [`ToiletService`] sits between the GraphQL resolvers and the
//! [`crate::persistence::SqliteStore`].

pub mod toilet_service;

pub use toilet_service::ToiletService;
