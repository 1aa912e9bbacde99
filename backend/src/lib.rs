pub mod processor;
pub mod routes;
pub mod store;
pub mod queries;
pub mod config;
pub mod cors;
pub mod error;
pub mod utils;
pub mod catchers;
pub use shared::{models::*, error::*, validation::*};

use rocket::{Build, Rocket, routes, catchers};
use crate::{
    catchers::{bad_request, internal_error, not_found, unprocessable_entity},
    cors::CORS,
    routes::{all_options, create_place, delete_place, get_place_by_id, get_places_by_user_id, update_place, AppState},
};

/// Assembles the places API on top of `state`, mounted under `/api`.
pub fn build_rocket(state: AppState) -> Rocket<Build> {
    let cors = CORS::new(state.config.cors_allowed_origin.clone());

    rocket::build()
        .attach(cors)
        .manage(state)
        .mount(
            "/api",
            routes![
                get_place_by_id,
                get_places_by_user_id,
                create_place,
                update_place,
                delete_place,
                all_options
            ],
        )
        .register(
            "/",
            catchers![
                bad_request,
                not_found,
                unprocessable_entity,
                internal_error
            ],
        )
}
