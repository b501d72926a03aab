//! Toilet service: orchestrates toilet and rating operations.

use crate::domain::{ToiletId, average_rating};
use crate::error::ServiceError;
use crate::persistence::{RatingRecord, SqliteStore, ToiletRecord};

/// Orchestration layer for all toilet operations.
///
/// Stateless coordinator over a [`SqliteStore`]. Constructed once at
/// startup and handed to the GraphQL schema as context data; every
/// resolver reaches storage through it.
#[derive(Debug, Clone)]
pub struct ToiletService {
    store: SqliteStore,
}

impl ToiletService {
    /// Creates a new `ToiletService`.
    #[must_use]
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    /// Returns a reference to the inner [`SqliteStore`].
    #[must_use]
    pub fn store(&self) -> &SqliteStore {
        &self.store
    }

    /// Creates a new toilet. Inputs are stored as given.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Storage`] if the insert fails.
    pub async fn create_toilet(
        &self,
        name: &str,
        location: &str,
    ) -> Result<ToiletRecord, ServiceError> {
        let toilet = self.store.create_toilet(name, location).await?;
        tracing::info!(toilet_id = %toilet.id, name, location, "toilet created");
        Ok(toilet)
    }

    /// Fetches a single toilet.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::ToiletNotFound`] if the toilet does not exist.
    pub async fn toilet(&self, id: ToiletId) -> Result<ToiletRecord, ServiceError> {
        self.store.get_toilet_by_id(id).await
    }

    /// Lists every toilet.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Storage`] on database failure.
    pub async fn toilets(&self) -> Result<Vec<ToiletRecord>, ServiceError> {
        self.store.list_toilets().await
    }

    /// Lists the ratings submitted for `toilet`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Storage`] on database failure.
    pub async fn ratings(&self, toilet: &ToiletRecord) -> Result<Vec<RatingRecord>, ServiceError> {
        self.store.list_ratings_for_toilet(toilet).await
    }

    /// Mean rating for `toilet`, or `None` if it has not been rated.
    ///
    /// Reads the ratings fresh on every call.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Storage`] on database failure.
    pub async fn average_rating(&self, toilet: &ToiletRecord) -> Result<Option<f64>, ServiceError> {
        let ratings = self.store.list_ratings_for_toilet(toilet).await?;
        Ok(average_rating(ratings.iter().map(|r| r.rating)))
    }

    /// Submits a rating for an existing toilet.
    ///
    /// The existence check and the insert run in one transaction.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::ToiletNotFound`] if the toilet does not
    /// exist; nothing is written in that case.
    pub async fn rate_toilet(
        &self,
        toilet_id: ToiletId,
        rating: i32,
        comment: &str,
    ) -> Result<RatingRecord, ServiceError> {
        let record = self.store.rate_toilet(toilet_id, rating, comment).await?;
        if !(1..=5).contains(&rating) {
            tracing::warn!(%toilet_id, rating, "rating outside the 1-5 range stored as given");
        }
        tracing::info!(%toilet_id, rating_id = %record.id, rating, "toilet rated");
        Ok(record)
    }
}
