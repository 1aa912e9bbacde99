use shared::models::*;
use shared::validation::{validate_create_place, validate_update_place};
use tracing::{debug, error, info};
use uuid::Uuid;
use crate::error::ApiError;
use crate::store::{PlaceStore, StoreError};
use crate::utils::parse_place_id;

pub struct PlaceProcessor;

impl PlaceProcessor {
    pub async fn get_place(store: &dyn PlaceStore, id: Uuid) -> Result<Place, ApiError> {
        let place = store.find_by_id(id).await.map_err(|e| {
            error!("Failed to fetch place {}: {}", id, e);
            ApiError::internal("Something went wrong, could not find a place.")
        })?;

        place.ok_or(ApiError::PlaceNotFound)
    }

    /// A user without places is reported as not found, same as an unknown user.
    pub async fn get_places_by_user(store: &dyn PlaceStore, user_id: &str) -> Result<Vec<Place>, ApiError> {
        let places = store.find_by_creator(user_id).await.map_err(|e| {
            error!("Failed to fetch places for user {}: {}", user_id, e);
            ApiError::internal("Fetching places failed, please try again later.")
        })?;

        if places.is_empty() {
            return Err(ApiError::UserPlacesNotFound);
        }
        Ok(places)
    }

    pub async fn create_place(
        store: &dyn PlaceStore,
        request: CreatePlaceRequest,
        image: &str,
    ) -> Result<Place, ApiError> {
        if let Err(e) = validate_create_place(&request) {
            debug!("Rejected place creation: {}", e);
            return Err(ApiError::InvalidInput);
        }

        let place = Place::new(request, image);

        store.insert(&place).await.map_err(|e| {
            error!("Failed to create place {}: {}", place.id, e);
            ApiError::internal("Creating place failed, please try again.")
        })?;

        info!("Created place {} for creator {}", place.id, place.creator);
        Ok(place)
    }

    /// Input is validated before `pid` is looked at, so a bad body on an
    /// unknown id is still a 422.
    pub async fn update_place(
        store: &dyn PlaceStore,
        pid: &str,
        request: UpdatePlaceRequest,
    ) -> Result<Place, ApiError> {
        if let Err(e) = validate_update_place(&request) {
            debug!("Rejected update of place {}: {}", pid, e);
            return Err(ApiError::InvalidInput);
        }

        let id = parse_place_id(pid)?;

        let mut place = store
            .find_by_id(id)
            .await
            .map_err(|e| {
                error!("Failed to fetch place {} for update: {}", id, e);
                ApiError::internal("Something went wrong, could not update place.")
            })?
            .ok_or(ApiError::PlaceNotFound)?;

        place.apply_update(request);

        match store.update(&place).await {
            Ok(()) => Ok(place),
            // Removed between fetch and save.
            Err(StoreError::NotFound) => Err(ApiError::PlaceNotFound),
            Err(e) => {
                error!("Failed to save place {}: {}", id, e);
                Err(ApiError::internal("Something went wrong, could not update place."))
            }
        }
    }

    pub async fn delete_place(store: &dyn PlaceStore, id: Uuid) -> Result<(), ApiError> {
        let place = store
            .find_by_id(id)
            .await
            .map_err(|e| {
                error!("Failed to fetch place {} for deletion: {}", id, e);
                ApiError::internal("Something went wrong, could not delete place.")
            })?
            .ok_or(ApiError::PlaceNotFound)?;

        match store.remove(place.id).await {
            Ok(()) => {
                info!("Deleted place {}", id);
                Ok(())
            }
            Err(StoreError::NotFound) => Err(ApiError::PlaceNotFound),
            Err(e) => {
                error!("Failed to delete place {}: {}", id, e);
                Err(ApiError::internal("Something went wrong, could not delete place."))
            }
        }
    }
}
