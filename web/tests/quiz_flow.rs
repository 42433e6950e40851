mod common;

use common::*;
use photoquiz_common::store::PhotoStore;
use rocket::http::Status;
use std::collections::HashSet;

#[test]
fn test_empty_store_redirects_to_upload_form() {
    let (client, _store) = client_with_photos(0);
    login(&client);

    for _ in 0..3 {
        let response = client.get("/quizzes").dispatch();
        assert_redirect(response, "/photos/new");
    }

    // completion is never signaled for an empty store
    let response = client.get("/quizzes/complete").dispatch();
    assert_redirect(response, "/quizzes");

    let body = client.get("/photos/new").dispatch().into_string().unwrap();
    assert!(body.contains("まだクイズがありません。写真をアップロードしてください。"));
}

#[test]
fn test_single_photo_completes_and_resets() {
    let (client, _store) = client_with_photos(1);
    login(&client);

    assert_eq!(next_quiz_id(&client), Some(1));
    assert_eq!(view_quiz(&client, 1), 1);

    let response = client.get("/quizzes").dispatch();
    assert_redirect(response, "/quizzes/complete");

    let response = client.get("/quizzes/complete").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert!(response.into_string().unwrap().contains("data-total=\"1\""));

    let response = client.post("/quiz_reset").dispatch();
    assert_redirect(response, "/quizzes");
    assert_eq!(next_quiz_id(&client), Some(1));

    let response = client.get("/quizzes/complete").dispatch();
    assert_redirect(response, "/quizzes");
}

#[test]
fn test_remaining_count_after_distinct_views() {
    let (client, _store) = client_with_photos(4);
    login(&client);

    // the count is taken before the shown photo is marked
    assert_eq!(view_quiz(&client, 3), 4);
    assert_eq!(view_quiz(&client, 1), 3);
    assert_eq!(view_quiz(&client, 4), 2);

    // revisiting an answered photo shows total - N
    assert_eq!(view_quiz(&client, 1), 1);
    assert_eq!(next_quiz_id(&client), Some(2));
}

#[test]
fn test_viewing_same_photo_twice_is_idempotent() {
    let (client, _store) = client_with_photos(3);
    login(&client);

    assert_eq!(view_quiz(&client, 2), 3);
    assert_eq!(view_quiz(&client, 2), 2);
    assert_eq!(view_quiz(&client, 2), 2);
    assert_eq!(view_quiz(&client, 1), 2);
}

#[test]
fn test_random_draw_never_repeats_answered_photos() {
    let (client, _store) = client_with_photos(5);
    login(&client);

    let mut seen = HashSet::new();
    for _ in 0..5 {
        let photo_id = next_quiz_id(&client).expect("an unanswered photo");
        assert!(seen.insert(photo_id), "photo {photo_id} drawn twice");
        view_quiz(&client, photo_id);
    }
    assert_eq!(seen, HashSet::from([1, 2, 3, 4, 5]));

    let response = client.get("/quizzes").dispatch();
    assert_redirect(response, "/quizzes/complete");
}

#[test]
fn test_new_photo_reopens_completed_quiz() {
    let (client, store) = client_with_photos(1);
    login(&client);
    view_quiz(&client, 1);
    assert_redirect(client.get("/quizzes").dispatch(), "/quizzes/complete");

    let new_id = seed_photo(&store, "late arrival");
    assert_redirect(client.get("/quizzes/complete").dispatch(), "/quizzes");
    assert_eq!(next_quiz_id(&client), Some(new_id));
}

#[test]
fn test_last_photo_links_to_results() {
    let (client, _store) = client_with_photos(2);
    login(&client);

    let body = client.get("/quizzes/1").dispatch().into_string().unwrap();
    assert!(!body.contains("href=\"/quizzes/complete\""));
    let body = client.get("/quizzes/2").dispatch().into_string().unwrap();
    assert!(body.contains("href=\"/quizzes/complete\""));
}

#[test]
fn test_missing_quiz_photo_is_not_found() {
    let (client, store) = client_with_photos(1);
    login(&client);

    let response = client.get("/quizzes/999").dispatch();
    assert_eq!(response.status(), Status::NotFound);
    // a failed view does not count as an answer
    assert_eq!(store.count_unanswered(&[]).unwrap(), 1);
    assert_eq!(next_quiz_id(&client), Some(1));
}

#[test]
fn test_sessions_are_independent() {
    let (first, store) = client_with_photos(1);
    let second = client_with_store(store);
    login(&first);
    login(&second);

    view_quiz(&first, 1);
    assert_redirect(first.get("/quizzes").dispatch(), "/quizzes/complete");
    assert_eq!(next_quiz_id(&second), Some(1));
}
