//! The quiz itself: random draw, showing a photo, completion and reset.
//!
//! Viewing a photo is what marks it answered. Progress lives only in the
//! session cookie.

use crate::AppState;
use crate::helpers::{ALERT, NOTICE, PageResult, flash_redirect};
use crate::session::{self, require_authentication};
use crate::views;
use photoquiz_common::quiz::{self, QuizState, QuizStep};
use rocket::State;
use rocket::http::CookieJar;
use rocket::request::FlashMessage;
use rocket::response::content::RawHtml;
use rocket::response::{Flash, Redirect};

pub const NO_QUIZZES: &str = "まだクイズがありません。写真をアップロードしてください。";
pub const RESET_DONE: &str = "クイズをリセットしました";

#[derive(Responder)]
pub enum QuizRedirect {
    Plain(Redirect),
    Flash(Flash<Redirect>),
}

/// Send the player to a random unanswered photo, the completion page, or the
/// upload form when there are no photos at all.
#[get("/quizzes")]
pub fn index(jar: &CookieJar<'_>, state: &State<AppState>) -> PageResult<QuizRedirect> {
    let current = session::load(jar);
    require_authentication(&current)?;

    let answered = current.answered_ids();
    let candidate = state.store.random_unanswered(&answered)?;
    let photos_exist = candidate.is_some() || state.store.any_photos()?;

    Ok(match quiz::next_step(candidate, photos_exist) {
        QuizStep::Show(photo_id) => {
            QuizRedirect::Plain(Redirect::found(format!("/quizzes/{photo_id}")))
        }
        QuizStep::Complete => QuizRedirect::Plain(Redirect::found("/quizzes/complete")),
        QuizStep::Upload => {
            QuizRedirect::Flash(flash_redirect("/photos/new", ALERT, NO_QUIZZES))
        }
    })
}

#[get("/quizzes/complete")]
pub fn complete(
    flash: Option<FlashMessage<'_>>,
    jar: &CookieJar<'_>,
    state: &State<AppState>,
) -> PageResult<Result<RawHtml<String>, Redirect>> {
    let current = session::load(jar);
    require_authentication(&current)?;

    let remaining = state.store.count_unanswered(&current.answered_ids())?;
    let photos_exist = state.store.any_photos()?;
    if !quiz::is_complete(remaining, photos_exist) {
        return Ok(Err(Redirect::found("/quizzes")));
    }

    let total = state.store.count_photos()?;
    Ok(Ok(views::complete_page(flash.as_ref(), total)))
}

/// Show one photo and mark it answered. The remaining count is taken before
/// marking, so it includes the photo on screen.
#[get("/quizzes/<id>")]
pub fn show(
    id: u32,
    flash: Option<FlashMessage<'_>>,
    jar: &CookieJar<'_>,
    state: &State<AppState>,
) -> PageResult<RawHtml<String>> {
    let mut current = session::load(jar);
    require_authentication(&current)?;

    let photo = state.store.get_photo(id)?;
    let remaining = state.store.count_unanswered(&current.answered_ids())?;

    let remaining_after = if current.mark_answered(photo.photo_id) {
        session::store(jar, &current);
        remaining.saturating_sub(1)
    } else {
        remaining
    };
    let state_after = QuizState::evaluate(current.answered_count(), remaining_after, true);
    tracing::debug!(
        photo_id = photo.photo_id,
        remaining = remaining,
        state = ?state_after,
        "Quiz photo shown"
    );

    Ok(views::quiz_page(
        flash.as_ref(),
        photo.photo_id,
        &photo.name,
        remaining,
        state_after == QuizState::Complete,
    ))
}

#[post("/quiz_reset")]
pub fn reset(jar: &CookieJar<'_>) -> PageResult<Flash<Redirect>> {
    let mut current = session::load(jar);
    require_authentication(&current)?;

    current.reset();
    session::store(jar, &current);
    Ok(flash_redirect("/quizzes", NOTICE, RESET_DONE))
}
