use rocket::{State, get, post, patch, delete, http::Status, serde::json::Json};
use tracing::{debug, instrument};
use shared::models::*;
use crate::{
    config::PlacesConfig,
    error::ApiError,
    processor::PlaceProcessor,
    store::PlaceStore,
    utils::parse_place_id,
};

pub struct AppState {
    pub store: Box<dyn PlaceStore>,
    pub config: PlacesConfig,
}

impl AppState {
    pub fn new(store: impl PlaceStore + 'static) -> Self {
        Self::with_config(store, PlacesConfig::default())
    }

    pub fn with_config(store: impl PlaceStore + 'static, config: PlacesConfig) -> Self {
        Self {
            store: Box::new(store),
            config,
        }
    }
}

/// Bodies are read whatever the Content-Type; anything that is not a JSON
/// object of the expected shape (including an empty body) is invalid input.
fn json_body<T>(request: Option<Json<T>>) -> Result<T, ApiError> {
    request.map(Json::into_inner).ok_or_else(|| {
        debug!("Rejected unreadable request body");
        ApiError::InvalidInput
    })
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}

#[instrument(skip(state, pid), fields(place_id = %pid))]
#[get("/places/<pid>")]
pub async fn get_place_by_id(state: &State<AppState>, pid: &str) -> Result<Json<PlaceResponse>, ApiError> {
    let id = parse_place_id(pid)?;
    let place = PlaceProcessor::get_place(state.store.as_ref(), id).await?;
    Ok(Json(PlaceResponse { place }))
}

#[instrument(skip(state, uid), fields(user_id = %uid))]
#[get("/users/<uid>/places")]
pub async fn get_places_by_user_id(state: &State<AppState>, uid: &str) -> Result<Json<PlacesResponse>, ApiError> {
    let places = PlaceProcessor::get_places_by_user(state.store.as_ref(), uid).await?;
    Ok(Json(PlacesResponse { places }))
}

#[instrument(skip(state, request))]
#[post("/places", data = "<request>")]
pub async fn create_place(
    state: &State<AppState>,
    request: Option<Json<CreatePlaceRequest>>,
) -> Result<(Status, Json<PlaceResponse>), ApiError> {
    let place = PlaceProcessor::create_place(
        state.store.as_ref(),
        json_body(request)?,
        &state.config.place_image_url,
    )
    .await?;

    Ok((Status::Created, Json(PlaceResponse { place })))
}

#[instrument(skip(state, pid, request), fields(place_id = %pid))]
#[patch("/places/<pid>", data = "<request>")]
pub async fn update_place(
    state: &State<AppState>,
    pid: &str,
    request: Option<Json<UpdatePlaceRequest>>,
) -> Result<Json<PlaceResponse>, ApiError> {
    let request = json_body(request)?;
    let place = PlaceProcessor::update_place(state.store.as_ref(), pid, request).await?;
    Ok(Json(PlaceResponse { place }))
}

#[instrument(skip(state, pid), fields(place_id = %pid))]
#[delete("/places/<pid>")]
pub async fn delete_place(state: &State<AppState>, pid: &str) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_place_id(pid)?;
    PlaceProcessor::delete_place(state.store.as_ref(), id).await?;
    Ok(Json(MessageResponse { message: "Deleted place.".into() }))
}
