//! Route handlers, grouped by resource.

use crate::views;
use rocket::response::content::RawHtml;
use rocket::{Catcher, Route};

pub mod admins;
pub mod assets;
pub mod photos;
pub mod quizzes;
pub mod sessions;

pub fn all() -> Vec<Route> {
    routes![
        health,
        photos::root,
        photos::new,
        photos::create,
        photos::image,
        sessions::new,
        sessions::create,
        quizzes::index,
        quizzes::complete,
        quizzes::show,
        quizzes::reset,
        admins::new_session,
        admins::create_session,
        admins::root,
        admins::photos,
        assets::photo_upload_js,
        assets::admins_js,
    ]
}

pub fn catchers() -> Vec<Catcher> {
    catchers![not_found, unprocessable_entity, internal_error]
}

/// Liveness probe. Answers as long as the process can serve requests.
#[get("/up")]
fn health() -> RawHtml<String> {
    views::health_page()
}

#[catch(404)]
fn not_found() -> RawHtml<String> {
    views::not_found_page()
}

#[catch(422)]
fn unprocessable_entity() -> RawHtml<String> {
    views::unprocessable_page()
}

#[catch(500)]
fn internal_error() -> RawHtml<String> {
    views::internal_error_page()
}
