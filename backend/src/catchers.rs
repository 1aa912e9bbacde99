use rocket::{Request, catch, serde::json::Json};
use shared::HttpError;

#[catch(400)]
pub fn bad_request(_req: &Request) -> Json<HttpError> {
    Json(HttpError::new("Invalid request parameters.", 400))
}

#[catch(404)]
pub fn not_found(_req: &Request) -> Json<HttpError> {
    Json(HttpError::new("Could not find this route.", 404))
}

#[catch(422)]
pub fn unprocessable_entity(_req: &Request) -> Json<HttpError> {
    Json(HttpError::new("Invalid inputs passed, please check your data.", 422))
}

#[catch(500)]
pub fn internal_error(_req: &Request) -> Json<HttpError> {
    Json(HttpError::new("An unknown error occurred!", 500))
}
