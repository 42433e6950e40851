//! Cookie-backed session and the two authentication gates.
//!
//! The session lives in one private (encrypted and signed) cookie holding the
//! JSON form of [`QuizSession`]. A missing or unreadable cookie is an empty session.

use crate::helpers::{ALERT, PageError, redirect_error};
use photoquiz_common::session::QuizSession;
use rocket::http::CookieJar;

pub const SESSION_COOKIE: &str = "_photoquiz_session";

pub const USER_LOGIN_PATH: &str = "/session/new";
pub const ADMIN_LOGIN_PATH: &str = "/admins/session/new";

pub const LOGIN_REQUIRED: &str = "パスワードを入力してください";
pub const ADMIN_LOGIN_REQUIRED: &str = "管理画面のパスワードを入力してください";

pub fn load(jar: &CookieJar<'_>) -> QuizSession {
    let Some(cookie) = jar.get_private(SESSION_COOKIE) else {
        return QuizSession::default();
    };
    QuizSession::from_json(cookie.value()).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Discarding unreadable session cookie");
        QuizSession::default()
    })
}

/// Browsers drop cookies larger than this.
pub const COOKIE_SIZE_LIMIT: usize = 4096;

/// Length of the private cookie value for a JSON payload: base64 of the
/// 12-byte nonce, the ciphertext and the 16-byte tag.
pub fn encoded_cookie_len(json: &str) -> usize {
    (json.len() + 12 + 16).div_ceil(3) * 4
}

pub fn store(jar: &CookieJar<'_>, session: &QuizSession) {
    match session.to_json() {
        Ok(json) => {
            let encoded_len = encoded_cookie_len(&json);
            if encoded_len > COOKIE_SIZE_LIMIT {
                tracing::warn!(
                    encoded_len,
                    answered = session.answered_count(),
                    "Session cookie exceeds {COOKIE_SIZE_LIMIT} bytes and may be dropped by the browser"
                );
            }
            jar.add_private((SESSION_COOKIE, json));
        }
        Err(e) => tracing::error!(error = %e, "Failed to serialize session"),
    }
}

/// Gate for quiz pages.
pub fn require_authentication(session: &QuizSession) -> Result<(), PageError> {
    if session.authenticated {
        Ok(())
    } else {
        Err(redirect_error(USER_LOGIN_PATH, ALERT, LOGIN_REQUIRED))
    }
}

/// Gate for admin pages. Independent of the quiz gate.
pub fn require_admin_authentication(session: &QuizSession) -> Result<(), PageError> {
    if session.admin_authenticated {
        Ok(())
    } else {
        Err(redirect_error(ADMIN_LOGIN_PATH, ALERT, ADMIN_LOGIN_REQUIRED))
    }
}

/// Shared passwords for the two gates. Compared by exact match.
#[derive(Debug, Clone)]
pub struct Passwords {
    pub user: String,
    pub admin: String,
}

impl Passwords {
    pub fn new(user: impl Into<String>, admin: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            admin: admin.into(),
        }
    }

    pub fn user_matches(&self, attempt: &str) -> bool {
        attempt == self.user
    }

    pub fn admin_matches(&self, attempt: &str) -> bool {
        attempt == self.admin
    }
}
