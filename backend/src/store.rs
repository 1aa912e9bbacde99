use std::sync::Mutex;
use shared::models::Place;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Place not found")]
    NotFound,
    #[error("Failed to acquire store lock")]
    LockFailed,
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence for places. Each call is a single independent operation; callers
/// sequence fetch and save themselves, so updates are last-write-wins.
#[rocket::async_trait]
pub trait PlaceStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Place>, StoreError>;

    async fn find_by_creator(&self, creator: &str) -> Result<Vec<Place>, StoreError>;

    async fn insert(&self, place: &Place) -> Result<(), StoreError>;

    /// Persists `title` and `description` of an existing place.
    async fn update(&self, place: &Place) -> Result<(), StoreError>;

    /// Fails with `StoreError::NotFound` when no place has this id.
    async fn remove(&self, id: Uuid) -> Result<(), StoreError>;
}

/// Insertion-ordered store held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryPlaceStore {
    places: Mutex<Vec<Place>>,
}

impl InMemoryPlaceStore {
    pub fn new() -> Self {
        Self::default()
    }

}

#[rocket::async_trait]
impl PlaceStore for InMemoryPlaceStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Place>, StoreError> {
        let places = self.places.lock().map_err(|_| StoreError::LockFailed)?;
        Ok(places.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_creator(&self, creator: &str) -> Result<Vec<Place>, StoreError> {
        let places = self.places.lock().map_err(|_| StoreError::LockFailed)?;
        Ok(places.iter().filter(|p| p.is_owned_by(creator)).cloned().collect())
    }

    async fn insert(&self, place: &Place) -> Result<(), StoreError> {
        let mut places = self.places.lock().map_err(|_| StoreError::LockFailed)?;
        places.push(place.clone());
        Ok(())
    }

    async fn update(&self, place: &Place) -> Result<(), StoreError> {
        let mut places = self.places.lock().map_err(|_| StoreError::LockFailed)?;
        let existing = places
            .iter_mut()
            .find(|p| p.id == place.id)
            .ok_or(StoreError::NotFound)?;
        existing.title = place.title.clone();
        existing.description = place.description.clone();
        Ok(())
    }

    async fn remove(&self, id: Uuid) -> Result<(), StoreError> {
        let mut places = self.places.lock().map_err(|_| StoreError::LockFailed)?;
        let index = places
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;
        places.remove(index);
        Ok(())
    }
}
