mod common;

use common::*;
use photoquiz_common::store::PhotoStore;
use rocket::http::{ContentType, Status};

#[test]
fn test_root_and_new_render_upload_form() {
    let (client, _store) = client_with_photos(0);
    for path in ["/", "/photos/new"] {
        let response = client.get(path).dispatch();
        assert_eq!(response.status(), Status::Ok);
        let body = response.into_string().unwrap();
        assert!(body.contains("action=\"/photos\""));
        assert!(body.contains("/assets/photo_upload.js"));
    }
}

#[test]
fn test_empty_upload_is_rejected() {
    let (client, store) = client_with_photos(0);
    let (content_type, body) = multipart_upload("", None);

    let response = client.post("/photos").header(content_type).body(body).dispatch();
    assert_eq!(response.status(), Status::UnprocessableEntity);
    let html = response.into_string().unwrap();
    assert!(html.contains(photoquiz_common::upload::NAME_BLANK_MESSAGE));
    assert!(html.contains(photoquiz_common::upload::IMAGE_BLANK_MESSAGE));
    assert_eq!(store.count_photos().unwrap(), 0);
}

#[test]
fn test_upload_without_image_keeps_name() {
    let (client, store) = client_with_photos(0);
    let (content_type, body) = multipart_upload("kotohira", None);

    let response = client.post("/photos").header(content_type).body(body).dispatch();
    assert_eq!(response.status(), Status::UnprocessableEntity);
    let html = response.into_string().unwrap();
    assert!(html.contains("value=\"kotohira\""));
    assert!(!html.contains(photoquiz_common::upload::NAME_BLANK_MESSAGE));
    assert_eq!(store.count_photos().unwrap(), 0);
}

#[test]
fn test_valid_upload_creates_one_row() {
    let (client, store) = client_with_photos(0);
    let (content_type, body) = multipart_upload("瀬戸大橋", Some(("image/png", PNG_BYTES)));

    let response = client.post("/photos").header(content_type).body(body).dispatch();
    assert_redirect(response, "/photos/new");
    assert_eq!(store.count_photos().unwrap(), 1);

    let photo = store.get_photo(1).unwrap();
    assert_eq!(photo.name, "瀬戸大橋");
    assert_eq!(photo.content_type, "image/png");
    assert_eq!(photo.image, PNG_BYTES);

    let body = client.get("/photos/new").dispatch().into_string().unwrap();
    assert!(body.contains("写真をアップロードしました！"));
}

#[test]
fn test_uploaded_image_is_served() {
    let (client, _store) = client_with_photos(1);

    let response = client.get("/photos/1/image").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.content_type(), Some(ContentType::PNG));
    assert_eq!(response.into_bytes().unwrap(), PNG_BYTES);

    let response = client.get("/photos/2/image").dispatch();
    assert_eq!(response.status(), Status::NotFound);
}
