//! Player login with the shared quiz password.

use crate::AppState;
use crate::helpers::{NOTICE, PageError, PageResult, flash_redirect};
use crate::session;
use crate::views;
use rocket::State;
use rocket::form::Form;
use rocket::http::CookieJar;
use rocket::request::FlashMessage;
use rocket::response::content::RawHtml;
use rocket::response::{Flash, Redirect};

pub const WRONG_PASSWORD: &str = "パスワードが違います";
const LOGGED_IN: &str = "ログインしました";
const HEADING: &str = "クイズにログイン";

#[derive(FromForm)]
pub struct LoginForm {
    #[field(default = String::new())]
    password: String,
}

impl LoginForm {
    pub fn password(&self) -> &str {
        &self.password
    }
}

#[get("/session/new")]
pub fn new(flash: Option<FlashMessage<'_>>) -> RawHtml<String> {
    views::login_form(flash.as_ref(), HEADING, "/session", None)
}

#[post("/session", data = "<form>")]
pub fn create(
    form: Form<LoginForm>,
    jar: &CookieJar<'_>,
    state: &State<AppState>,
) -> PageResult<Flash<Redirect>> {
    if !state.passwords.user_matches(form.password()) {
        tracing::info!("Rejected quiz login");
        return Err(PageError::Unprocessable(views::login_form(
            None,
            HEADING,
            "/session",
            Some(WRONG_PASSWORD),
        )));
    }

    let mut current = session::load(jar);
    current.login_user();
    session::store(jar, &current);
    Ok(flash_redirect("/quizzes", NOTICE, LOGGED_IN))
}
