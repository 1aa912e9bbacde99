use crate::error::ApiError;
use uuid::Uuid;

/// Malformed ids cannot name any stored place.
pub fn parse_place_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::PlaceNotFound)
}
