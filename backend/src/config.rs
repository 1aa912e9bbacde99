use shuttle_runtime::SecretStore;

pub const DEFAULT_PLACE_IMAGE_URL: &str = "https://media.timeout.com/images/101705309/image.jpg";
pub const DEFAULT_CORS_ALLOWED_ORIGIN: &str = "http://localhost";

#[derive(Debug, Clone)]
pub struct PlacesConfig {
    /// Image attached to every newly created place.
    pub place_image_url: String,
    /// Origins starting with this prefix receive CORS headers.
    pub cors_allowed_origin: String,
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            place_image_url: DEFAULT_PLACE_IMAGE_URL.into(),
            cors_allowed_origin: DEFAULT_CORS_ALLOWED_ORIGIN.into(),
        }
    }
}

impl PlacesConfig {
    pub fn from_secrets(secrets: &SecretStore) -> Self {
        let defaults = Self::default();
        Self {
            place_image_url: secrets.get("PLACE_IMAGE_URL").unwrap_or(defaults.place_image_url),
            cors_allowed_origin: secrets.get("CORS_ALLOWED_ORIGIN").unwrap_or(defaults.cors_allowed_origin),
        }
    }
}
