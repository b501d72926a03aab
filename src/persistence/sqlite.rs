//! SQLite implementation of the persistence layer.

use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Utc};
use sqlx::SqliteExecutor;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use super::models::{RatingRecord, ToiletRecord};
use crate::domain::ToiletId;
use crate::error::ServiceError;

/// Embedded migration set, applied by [`SqliteStore::init_schema`].
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const TOILET_COLUMNS: &str = "id, name, location, created_at, updated_at, deleted_at";
const RATING_COLUMNS: &str = "id, toilet_id, rating, comment, created_at, updated_at, deleted_at";

/// SQLite-backed persistence layer using `sqlx::SqlitePool`.
///
/// Cheap to clone: the inner pool is reference counted.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Creates a new store over an existing connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens a pool against `database_url`, creating the database file if
    /// it does not exist yet.
    ///
    /// In-memory URLs are pinned to a single connection that is never
    /// recycled, since every SQLite memory connection is its own database.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Storage`] if the URL is malformed or the
    /// store cannot be reached.
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, ServiceError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool_options = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };

        let pool = pool_options
            .acquire_timeout(acquire_timeout)
            .connect_with(options)
            .await?;

        tracing::debug!(database_url, "database pool opened");
        Ok(Self::new(pool))
    }

    /// Opens a private in-memory database.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Storage`] if SQLite cannot open the database.
    pub async fn in_memory() -> Result<Self, ServiceError> {
        Self::connect("sqlite::memory:", 1, Duration::from_secs(5)).await
    }

    /// Creates or alters both tables to match the current schema.
    ///
    /// Idempotent: already-applied migrations are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::SchemaInit`] if a migration fails.
    pub async fn init_schema(&self) -> Result<(), ServiceError> {
        MIGRATOR.run(&self.pool).await?;
        tracing::info!("database schema ready");
        Ok(())
    }

    /// Inserts a new toilet and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Storage`] on database failure.
    pub async fn create_toilet(
        &self,
        name: &str,
        location: &str,
    ) -> Result<ToiletRecord, ServiceError> {
        let now = Utc::now();
        let record = sqlx::query_as::<_, ToiletRecord>(&format!(
            "INSERT INTO toilets (name, location, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?3) RETURNING {TOILET_COLUMNS}"
        ))
        .bind(name)
        .bind(location)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    /// Loads a single toilet by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::ToiletNotFound`] if no live row matches, or
    /// [`ServiceError::Storage`] on database failure.
    pub async fn get_toilet_by_id(&self, id: ToiletId) -> Result<ToiletRecord, ServiceError> {
        fetch_toilet(&self.pool, id)
            .await?
            .ok_or(ServiceError::ToiletNotFound(id))
    }

    /// Loads every live toilet in ID order.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Storage`] on database failure.
    pub async fn list_toilets(&self) -> Result<Vec<ToiletRecord>, ServiceError> {
        let rows = sqlx::query_as::<_, ToiletRecord>(&format!(
            "SELECT {TOILET_COLUMNS} FROM toilets WHERE deleted_at IS NULL ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Loads every live rating attached to `toilet`, in ID order.
    ///
    /// A toilet without ratings yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Storage`] on database failure.
    pub async fn list_ratings_for_toilet(
        &self,
        toilet: &ToiletRecord,
    ) -> Result<Vec<RatingRecord>, ServiceError> {
        let rows = sqlx::query_as::<_, RatingRecord>(&format!(
            "SELECT {RATING_COLUMNS} FROM toilet_ratings \
             WHERE toilet_id = ?1 AND deleted_at IS NULL ORDER BY id ASC"
        ))
        .bind(toilet.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Inserts a rating linked to an already-loaded toilet.
    ///
    /// Only the rating row is written; the toilet row is left untouched.
    /// The write still re-checks that the toilet is live, so a toilet
    /// soft-deleted since it was loaded is reported as not found.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::ToiletNotFound`] if the toilet is gone, or
    /// [`ServiceError::Storage`] on database failure.
    pub async fn create_rating(
        &self,
        toilet: &ToiletRecord,
        rating: i32,
        comment: &str,
    ) -> Result<RatingRecord, ServiceError> {
        self.rate_toilet(toilet.id, rating, comment).await
    }

    /// Inserts a rating for the toilet with `toilet_id` if that toilet
    /// exists.
    ///
    /// The existence check and the insert are one `INSERT ... SELECT`
    /// statement, so the write lock is taken before the toilet is read and
    /// concurrent raters queue on the busy timeout instead of failing.
    /// A missing toilet matches no row and nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::ToiletNotFound`] if the toilet does not
    /// exist, or [`ServiceError::Storage`] on database failure.
    pub async fn rate_toilet(
        &self,
        toilet_id: ToiletId,
        rating: i32,
        comment: &str,
    ) -> Result<RatingRecord, ServiceError> {
        insert_rating(&self.pool, toilet_id, rating, comment, Utc::now())
            .await?
            .ok_or(ServiceError::ToiletNotFound(toilet_id))
    }

    /// Round-trips a trivial statement to check the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Storage`] if the store does not answer.
    pub async fn ping(&self) -> Result<(), ServiceError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Closes every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

async fn fetch_toilet<'e, E>(executor: E, id: ToiletId) -> Result<Option<ToiletRecord>, ServiceError>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query_as::<_, ToiletRecord>(&format!(
        "SELECT {TOILET_COLUMNS} FROM toilets WHERE id = ?1 AND deleted_at IS NULL"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(row)
}

async fn insert_rating<'e, E>(
    executor: E,
    toilet_id: ToiletId,
    rating: i32,
    comment: &str,
    now: DateTime<Utc>,
) -> Result<Option<RatingRecord>, ServiceError>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query_as::<_, RatingRecord>(&format!(
        "INSERT INTO toilet_ratings (toilet_id, rating, comment, created_at, updated_at) \
         SELECT ?1, ?2, ?3, ?4, ?4 \
         WHERE EXISTS (SELECT 1 FROM toilets WHERE id = ?1 AND deleted_at IS NULL) \
         RETURNING {RATING_COLUMNS}"
    ))
    .bind(toilet_id)
    .bind(rating)
    .bind(comment)
    .bind(now)
    .fetch_optional(executor)
    .await?;

    Ok(row)
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
