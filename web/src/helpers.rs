//! Some helper types for the web server: fairings, error responses and redirects.

use crate::views;
use photoquiz_common::store::StoreError;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::request::Request;
use rocket::response::content::RawHtml;
use rocket::response::{Flash, Redirect, Response};
use std::time::Instant;

#[derive(Clone, Copy)]
pub struct RequestTimingFairing;

#[rocket::async_trait]
impl Fairing for RequestTimingFairing {
    fn info(&self) -> Info {
        Info {
            name: "Request timing",
            kind: Kind::Request | Kind::Response,
        }
    }

    async fn on_request(&self, request: &mut Request<'_>, _data: &mut rocket::Data<'_>) {
        request.local_cache(Instant::now);
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        let started_at = request.local_cache(Instant::now);
        let elapsed = started_at.elapsed();
        let status = response.status().code;

        tracing::info!(
            method = %request.method(),
            path = %request.uri(),
            status = status,
            elapsed_ms = elapsed.as_millis(),
            "Request Completed"
        );
    }
}

/// Flash kinds understood by the layout.
pub const NOTICE: &str = "notice";
pub const ALERT: &str = "alert";

/// Everything a page handler can fail with.
#[derive(Responder)]
pub enum PageError {
    /// Send the browser elsewhere, usually a login form, with a flash message.
    Redirect(Flash<Redirect>),
    #[response(status = 404)]
    NotFound(RawHtml<String>),
    #[response(status = 422)]
    Unprocessable(RawHtml<String>),
    #[response(status = 500)]
    Internal(RawHtml<String>),
}

pub type PageResult<T> = Result<T, PageError>;

impl From<StoreError> for PageError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => not_found_error(),
            other => {
                tracing::error!(error = %other, "Photo store failure");
                internal_error()
            }
        }
    }
}

/// A 302 redirect carrying a flash message.
pub fn flash_redirect(to: impl Into<String>, kind: &str, message: &str) -> Flash<Redirect> {
    Flash::new(Redirect::found(to.into()), kind, message)
}

pub fn redirect_error(to: impl Into<String>, kind: &str, message: &str) -> PageError {
    PageError::Redirect(flash_redirect(to, kind, message))
}

pub fn not_found_error() -> PageError {
    PageError::NotFound(views::not_found_page())
}

pub fn internal_error() -> PageError {
    PageError::Internal(views::internal_error_page())
}
