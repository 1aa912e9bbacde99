use sqlx::PgPool;
use uuid::Uuid;
use shared::models::{Location, Place};
use crate::store::{PlaceStore, StoreError};

const PLACE_COLUMNS: &str = "id, title, description, address, lat, lng, image, creator";

pub struct PgPlaceStore {
    pool: PgPool,
}

impl PgPlaceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Writes addressed by id touch exactly one row; none means the place is gone.
fn require_row(rows_affected: u64) -> Result<(), StoreError> {
    match rows_affected {
        0 => Err(StoreError::NotFound),
        _ => Ok(()),
    }
}

#[rocket::async_trait]
impl PlaceStore for PgPlaceStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Place>, StoreError> {
        let place = sqlx::query_as::<_, Place>(&format!(
            "SELECT {PLACE_COLUMNS} FROM places WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(place)
    }

    async fn find_by_creator(&self, creator: &str) -> Result<Vec<Place>, StoreError> {
        let places = sqlx::query_as::<_, Place>(&format!(
            "SELECT {PLACE_COLUMNS} FROM places WHERE creator = $1 ORDER BY created_at ASC"
        ))
        .bind(creator)
        .fetch_all(&self.pool)
        .await?;

        Ok(places)
    }

    async fn insert(&self, place: &Place) -> Result<(), StoreError> {
        let (lat, lng) = Location::to_columns(place.location);

        sqlx::query(
            "INSERT INTO places (id, title, description, address, lat, lng, image, creator)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)"
        )
        .bind(place.id)
        .bind(&place.title)
        .bind(&place.description)
        .bind(&place.address)
        .bind(lat)
        .bind(lng)
        .bind(&place.image)
        .bind(&place.creator)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, place: &Place) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE places SET title = $2, description = $3, updated_at = NOW() WHERE id = $1"
        )
        .bind(place.id)
        .bind(&place.title)
        .bind(&place.description)
        .execute(&self.pool)
        .await?;

        require_row(result.rows_affected())
    }

    async fn remove(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM places WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        require_row(result.rows_affected())
    }
}
