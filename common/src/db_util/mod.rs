//! Interfaces between the application code and the Postgres database.

use super::*;
use crate::store::{PhotoStore, StoreError};

use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use std::env;

pub mod conversions;
mod photo;

pub use photo::*;

pub type PgPool = Pool<ConnectionManager<PgConnection>>;
pub type PgPooledConnection = PooledConnection<ConnectionManager<PgConnection>>;

/// Read the database URL from the environment, loading `.env` first if present.
pub fn get_database_url() -> Result<String, StoreError> {
    dotenvy::dotenv().ok();
    env::var("DATABASE_URL")
        .map_err(|_| StoreError::Connection("DATABASE_URL must be set".to_string()))
}

/// Build a connection pool for the server.
pub fn get_database_pool(database_url: &str) -> Result<PgPool, StoreError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .test_on_check_out(true)
        .build(manager)
        .map_err(|err| StoreError::Connection(err.to_string()))
}

pub fn get_pooled_database_connection(pool: &PgPool) -> Result<PgPooledConnection, StoreError> {
    pool.get()
        .map_err(|err| StoreError::Connection(err.to_string()))
}

/// Photo store backed by the `photos` table.
#[derive(Clone)]
pub struct PgPhotoStore {
    pool: PgPool,
}

impl PgPhotoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect using an explicit URL, or `DATABASE_URL` when none is given.
    pub fn connect(database_url: Option<&str>) -> Result<Self, StoreError> {
        let url = match database_url {
            Some(url) => url.to_string(),
            None => get_database_url()?,
        };
        let pool = get_database_pool(&url)?;
        log::info!("Database pool established");
        Ok(Self::new(pool))
    }

    fn conn(&self) -> Result<PgPooledConnection, StoreError> {
        get_pooled_database_connection(&self.pool)
    }
}

impl PhotoStore for PgPhotoStore {
    fn insert_photo(&self, photo: NewPhoto) -> Result<PhotoRecord, StoreError> {
        let mut conn = self.conn()?;
        insert_photo(&mut conn, photo)
    }

    fn get_photo(&self, photo_id: u32) -> Result<PhotoRecord, StoreError> {
        let mut conn = self.conn()?;
        get_photo_by_id(&mut conn, photo_id)
    }

    fn list_photos_newest_first(&self) -> Result<Vec<PhotoSummary>, StoreError> {
        let mut conn = self.conn()?;
        get_photos_newest_first(&mut conn)
    }

    fn random_unanswered(&self, excluded: &[u32]) -> Result<Option<u32>, StoreError> {
        let mut conn = self.conn()?;
        get_random_photo_id_excluding(&mut conn, excluded)
    }

    fn count_unanswered(&self, excluded: &[u32]) -> Result<u64, StoreError> {
        let mut conn = self.conn()?;
        get_count_photos_excluding(&mut conn, excluded)
    }

    fn count_photos(&self) -> Result<u64, StoreError> {
        let mut conn = self.conn()?;
        get_count_photos(&mut conn)
    }

    fn any_photos(&self) -> Result<bool, StoreError> {
        let mut conn = self.conn()?;
        get_any_photos(&mut conn)
    }
}
