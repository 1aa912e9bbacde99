use serde::{Serialize, Deserialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Place {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: Option<Location>,
    pub address: String,
    pub image: String,
    pub creator: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatePlaceRequest {
    pub title: String,
    pub description: String,
    pub address: String,
    pub creator: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdatePlaceRequest {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceResponse {
    pub place: Place,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlacesResponse {
    pub places: Vec<Place>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl Location {
    /// A location is stored as two nullable columns; it exists only when both are set.
    pub fn from_columns(lat: Option<f64>, lng: Option<f64>) -> Option<Self> {
        lat.zip(lng).map(|(lat, lng)| Location { lat, lng })
    }

    pub fn to_columns(location: Option<Self>) -> (Option<f64>, Option<f64>) {
        location.map(|l| (l.lat, l.lng)).unzip()
    }
}

impl Place {
    pub fn new(request: CreatePlaceRequest, image: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: request.title,
            description: request.description,
            location: None,
            address: request.address,
            image: image.into(),
            creator: request.creator,
        }
    }

    /// Only `title` and `description` are mutable after creation.
    pub fn apply_update(&mut self, request: UpdatePlaceRequest) {
        self.title = request.title;
        self.description = request.description;
    }

    pub fn is_owned_by(&self, creator: &str) -> bool {
        self.creator == creator
    }
}

#[cfg(feature = "backend")]
impl<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> for Place {
    fn from_row(row: &'r sqlx::postgres::PgRow) -> Result<Self, sqlx::Error> {
        use sqlx::Row;

        let lat: Option<f64> = row.try_get("lat")?;
        let lng: Option<f64> = row.try_get("lng")?;

        Ok(Place {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            location: Location::from_columns(lat, lng),
            address: row.try_get("address")?,
            image: row.try_get("image")?,
            creator: row.try_get("creator")?,
        })
    }
}
