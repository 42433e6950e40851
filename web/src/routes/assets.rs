//! Browser scripts, compiled into the binary.

use rocket::http::ContentType;

const PHOTO_UPLOAD_JS: &str = include_str!("../../assets/photo_upload.js");
const ADMINS_JS: &str = include_str!("../../assets/admins.js");

#[get("/assets/photo_upload.js")]
pub fn photo_upload_js() -> (ContentType, &'static str) {
    (ContentType::JavaScript, PHOTO_UPLOAD_JS)
}

#[get("/assets/admins.js")]
pub fn admins_js() -> (ContentType, &'static str) {
    (ContentType::JavaScript, ADMINS_JS)
}
