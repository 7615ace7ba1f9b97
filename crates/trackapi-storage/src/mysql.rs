use async_trait::async_trait;
use jiff::Timestamp;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};
use tracing::debug;
use trackapi_core::repository::{ReadRepository, Repository, Result};
use trackapi_core::{StorageError, Track, TrackId};

const SCHEMA: &str = include_str!("../ddl/mysql/tracks.sql");

/// MySQL implementation of the repository contract.
///
/// Tracks live in a single `tracks` table keyed by `id`. Creation dates are
/// stored as unix milliseconds, so values read back are truncated to
/// millisecond precision. Every write returns the row as read back from the
/// table.
#[derive(Debug, Clone)]
pub struct MySqlRepository {
    pool: MySqlPool,
}

impl MySqlRepository {
    /// Creates a repository from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Creates a repository by opening a new MySQL connection pool.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = MySqlPool::connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Creates the `tracks` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn read_back(&self, id: &TrackId) -> Result<Track> {
        self.find_by_id(id).await?.ok_or_else(|| {
            StorageError::InvalidData(format!("track '{id}' missing right after write"))
        })
    }
}

fn parse_creation_date(millis: i64) -> Result<Timestamp> {
    Timestamp::from_millisecond(millis).map_err(|e| {
        StorageError::InvalidData(format!("invalid creation_date timestamp '{millis}': {e}"))
    })
}

fn track_from_row(row: &MySqlRow) -> Result<Track> {
    let id: String = row.try_get("id").map_err(map_sqlx_error)?;
    let title: String = row.try_get("title").map_err(map_sqlx_error)?;
    let artist: String = row.try_get("artist").map_err(map_sqlx_error)?;
    let duration: i32 = row.try_get("duration").map_err(map_sqlx_error)?;
    let creation_date: i64 = row.try_get("creation_date").map_err(map_sqlx_error)?;

    Ok(Track {
        id: TrackId::new(id),
        title,
        artist,
        duration,
        creation_date: parse_creation_date(creation_date)?,
    })
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

#[async_trait]
impl ReadRepository for MySqlRepository {
    async fn find_all(&self) -> Result<Vec<Track>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, artist, duration, creation_date
            FROM tracks
            ORDER BY creation_date, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.iter().map(track_from_row).collect()
    }

    async fn find_by_id(&self, id: &TrackId) -> Result<Option<Track>> {
        let row = sqlx::query(
            r#"
            SELECT id, title, artist, duration, creation_date
            FROM tracks
            WHERE id = ?
            LIMIT 1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.as_ref().map(track_from_row).transpose()
    }

    async fn exists_by_id(&self, id: &TrackId) -> Result<bool> {
        let exists = sqlx::query(
            r#"
            SELECT 1
            FROM tracks
            WHERE id = ?
            LIMIT 1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .is_some();

        Ok(exists)
    }

    async fn count(&self) -> Result<u64> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM tracks")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let total: i64 = row.try_get("total").map_err(map_sqlx_error)?;
        u64::try_from(total)
            .map_err(|e| StorageError::InvalidData(format!("invalid track count '{total}': {e}")))
    }
}

#[async_trait]
impl Repository for MySqlRepository {
    async fn save(&self, track: Track) -> Result<Track> {
        sqlx::query(
            r#"
            INSERT INTO tracks (id, title, artist, duration, creation_date)
            VALUES (?, ?, ?, ?, ?) AS incoming
            ON DUPLICATE KEY UPDATE
              title = incoming.title,
              artist = incoming.artist,
              duration = incoming.duration,
              creation_date = incoming.creation_date
            "#,
        )
        .bind(track.id.as_str())
        .bind(&track.title)
        .bind(&track.artist)
        .bind(track.duration)
        .bind(track.creation_date.as_millisecond())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(id = %track.id, "saved track");
        self.read_back(&track.id).await
    }

    async fn replace(&self, track: Track) -> Result<Option<Track>> {
        // MySQL reports zero affected rows when the new values equal the old
        // ones, so existence is decided by reading the row back.
        sqlx::query(
            r#"
            UPDATE tracks
            SET title = ?, artist = ?, duration = ?
            WHERE id = ?
            "#,
        )
        .bind(&track.title)
        .bind(&track.artist)
        .bind(track.duration)
        .bind(track.id.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        self.find_by_id(&track.id).await
    }

    async fn delete_by_id(&self, id: &TrackId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM tracks WHERE id = ?")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_date_round_trips_at_millisecond_precision() {
        let ts = Timestamp::from_millisecond(1_700_000_000_123).unwrap();
        assert_eq!(parse_creation_date(ts.as_millisecond()).unwrap(), ts);
    }

    #[test]
    fn out_of_range_creation_date_is_invalid_data() {
        let err = parse_creation_date(i64::MAX).unwrap_err();
        assert!(matches!(err, StorageError::InvalidData(_)));
    }

    #[test]
    fn pool_timeout_maps_to_timeout() {
        let err = map_sqlx_error(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, StorageError::Timeout(_)));
    }

    #[test]
    fn missing_row_maps_to_invalid_data() {
        let err = map_sqlx_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, StorageError::InvalidData(_)));
    }
}
