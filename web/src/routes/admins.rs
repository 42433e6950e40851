//! Admin login and the read-only photo listing.

use super::sessions::{LoginForm, WRONG_PASSWORD};
use crate::AppState;
use crate::helpers::{NOTICE, PageError, PageResult, flash_redirect};
use crate::session::{self, require_admin_authentication};
use crate::views;
use rocket::State;
use rocket::form::Form;
use rocket::http::CookieJar;
use rocket::request::FlashMessage;
use rocket::response::content::RawHtml;
use rocket::response::{Flash, Redirect};

const LOGGED_IN: &str = "管理画面にログインしました";
const HEADING: &str = "管理画面にログイン";

#[get("/admins/session/new")]
pub fn new_session(flash: Option<FlashMessage<'_>>) -> RawHtml<String> {
    views::login_form(flash.as_ref(), HEADING, "/admins/session", None)
}

#[post("/admins/session", data = "<form>")]
pub fn create_session(
    form: Form<LoginForm>,
    jar: &CookieJar<'_>,
    state: &State<AppState>,
) -> PageResult<Flash<Redirect>> {
    if !state.passwords.admin_matches(form.password()) {
        tracing::info!("Rejected admin login");
        return Err(PageError::Unprocessable(views::login_form(
            None,
            HEADING,
            "/admins/session",
            Some(WRONG_PASSWORD),
        )));
    }

    let mut current = session::load(jar);
    current.login_admin();
    session::store(jar, &current);
    Ok(flash_redirect("/admins", NOTICE, LOGGED_IN))
}

#[get("/admins")]
pub fn root(
    flash: Option<FlashMessage<'_>>,
    jar: &CookieJar<'_>,
    state: &State<AppState>,
) -> PageResult<RawHtml<String>> {
    photo_listing(flash, jar, state)
}

#[get("/admins/photos")]
pub fn photos(
    flash: Option<FlashMessage<'_>>,
    jar: &CookieJar<'_>,
    state: &State<AppState>,
) -> PageResult<RawHtml<String>> {
    photo_listing(flash, jar, state)
}

fn photo_listing(
    flash: Option<FlashMessage<'_>>,
    jar: &CookieJar<'_>,
    state: &State<AppState>,
) -> PageResult<RawHtml<String>> {
    require_admin_authentication(&session::load(jar))?;
    let photos = state.store.list_photos_newest_first()?;
    Ok(views::admin_photos(flash.as_ref(), &photos))
}
