#![allow(dead_code)]

use photoquiz_common::NewPhoto;
use photoquiz_common::store::{MemoryPhotoStore, PhotoStore};
use photoquiz_web::config::upload_figment;
use photoquiz_web::session::Passwords;
use photoquiz_web::{AppState, build_rocket};
use rocket::http::{ContentType, Status};
use rocket::local::blocking::{Client, LocalResponse};
use std::sync::Arc;

pub const USER_PASSWORD: &str = "test-quiz";
pub const ADMIN_PASSWORD: &str = "test-admin";

const SECRET_KEY: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";
const BOUNDARY: &str = "X-PHOTOQUIZ-TEST-BOUNDARY";

pub const PNG_BYTES: &[u8] = &[0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x01];

pub fn client_with_store(store: Arc<MemoryPhotoStore>) -> Client {
    let figment = upload_figment(rocket::Config::figment(), 1)
        .merge(("secret_key", SECRET_KEY))
        .merge(("log_level", "off"));
    let state = AppState::new(store, Passwords::new(USER_PASSWORD, ADMIN_PASSWORD));
    Client::tracked(build_rocket(figment, state)).expect("valid rocket instance")
}

/// A client over a fresh store holding `count` photos named `photo-1..`.
pub fn client_with_photos(count: usize) -> (Client, Arc<MemoryPhotoStore>) {
    let store = Arc::new(MemoryPhotoStore::new());
    for i in 1..=count {
        seed_photo(&store, &format!("photo{i}"));
    }
    (client_with_store(store.clone()), store)
}

pub fn seed_photo(store: &MemoryPhotoStore, name: &str) -> u32 {
    store
        .insert_photo(NewPhoto {
            name: name.to_string(),
            content_type: "image/png".to_string(),
            image: PNG_BYTES.to_vec(),
        })
        .unwrap()
        .photo_id
}

pub fn location(response: &LocalResponse<'_>) -> String {
    response
        .headers()
        .get_one("Location")
        .unwrap_or_default()
        .to_string()
}

/// Assert a 302 to `path` and return nothing else.
pub fn assert_redirect(response: LocalResponse<'_>, path: &str) {
    assert_eq!(response.status(), Status::Found);
    assert_eq!(location(&response), path);
}

pub fn login(client: &Client) {
    let response = client
        .post("/session")
        .header(ContentType::Form)
        .body(format!("password={USER_PASSWORD}"))
        .dispatch();
    assert_redirect(response, "/quizzes");
}

pub fn login_admin(client: &Client) {
    let response = client
        .post("/admins/session")
        .header(ContentType::Form)
        .body(format!("password={ADMIN_PASSWORD}"))
        .dispatch();
    assert_redirect(response, "/admins");
}

/// Follow `/quizzes` once and return the photo id it redirected to, if any.
pub fn next_quiz_id(client: &Client) -> Option<u32> {
    let response = client.get("/quizzes").dispatch();
    assert_eq!(response.status(), Status::Found);
    location(&response)
        .strip_prefix("/quizzes/")
        .and_then(|rest| rest.parse().ok())
}

/// View a quiz photo and return the remaining count shown on the page.
pub fn view_quiz(client: &Client, photo_id: u32) -> u64 {
    let response = client.get(format!("/quizzes/{photo_id}")).dispatch();
    assert_eq!(response.status(), Status::Ok);
    let body = response.into_string().unwrap();
    let marker = "data-remaining=\"";
    let start = body.find(marker).expect("remaining count on page") + marker.len();
    let end = start + body[start..].find('"').unwrap();
    body[start..end].parse().unwrap()
}

/// Build a multipart body for the upload form. `image` of None sends an
/// empty file part, which is what browsers do when nothing was picked.
pub fn multipart_upload(name: &str, image: Option<(&str, &[u8])>) -> (ContentType, Vec<u8>) {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"name\"\r\n\r\n{name}\r\n"
        )
        .as_bytes(),
    );
    let (file_name, content_type, bytes) = match image {
        Some((content_type, bytes)) => ("photo.png", content_type, bytes),
        None => ("", "application/octet-stream", &[][..]),
    };
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    let content_type = ContentType::new("multipart", "form-data").with_params(("boundary", BOUNDARY));
    (content_type, body)
}
