//! The upload form and serving of stored images.

use crate::AppState;
use crate::helpers::{NOTICE, PageError, PageResult, flash_redirect};
use crate::views;
use photoquiz_common::upload::PhotoUpload;
use rocket::State;
use rocket::form::Form;
use rocket::fs::TempFile;
use rocket::http::ContentType;
use rocket::request::FlashMessage;
use rocket::response::content::RawHtml;
use rocket::response::{Flash, Redirect};
use rocket::tokio::io::AsyncReadExt;

pub const UPLOADED: &str = "写真をアップロードしました！";

/// Raw multipart submission. Both fields are optional so that a missing
/// value reaches validation instead of failing the form guard.
#[derive(FromForm)]
pub struct UploadForm<'r> {
    name: Option<String>,
    image: Option<TempFile<'r>>,
}

#[get("/")]
pub fn root(flash: Option<FlashMessage<'_>>) -> RawHtml<String> {
    views::upload_form(flash.as_ref(), "", None)
}

#[get("/photos/new")]
pub fn new(flash: Option<FlashMessage<'_>>) -> RawHtml<String> {
    views::upload_form(flash.as_ref(), "", None)
}

#[post("/photos", data = "<form>")]
pub async fn create(
    form: Form<UploadForm<'_>>,
    state: &State<AppState>,
) -> PageResult<Flash<Redirect>> {
    let form = form.into_inner();
    let submitted_name = form.name.clone().unwrap_or_default();

    let (content_type, image) = match &form.image {
        Some(file) if file.len() > 0 => {
            let bytes = read_temp_file(file).await.map_err(|e| {
                tracing::error!(error = %e, "Failed to read uploaded image");
                crate::helpers::internal_error()
            })?;
            (file.content_type().map(ToString::to_string), Some(bytes))
        }
        _ => (None, None),
    };

    let upload = PhotoUpload {
        name: form.name,
        content_type,
        image,
    };

    match upload.validate() {
        Ok(new_photo) => {
            let photo = state.store.insert_photo(new_photo)?;
            tracing::info!(photo_id = photo.photo_id, name = %photo.name, "Photo uploaded");
            Ok(flash_redirect("/photos/new", NOTICE, UPLOADED))
        }
        Err(errors) => {
            tracing::debug!(errors = %errors, "Rejected photo upload");
            Err(PageError::Unprocessable(views::upload_form(
                None,
                &submitted_name,
                Some(&errors),
            )))
        }
    }
}

async fn read_temp_file(file: &TempFile<'_>) -> std::io::Result<Vec<u8>> {
    let reader = file.open().await?;
    rocket::tokio::pin!(reader);
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).await?;
    Ok(bytes)
}

/// The stored image bytes, served with the content type recorded at upload.
#[get("/photos/<id>/image")]
pub fn image(id: u32, state: &State<AppState>) -> PageResult<(ContentType, Vec<u8>)> {
    let photo = state.store.get_photo(id)?;
    let content_type =
        ContentType::parse_flexible(&photo.content_type).unwrap_or(ContentType::Binary);
    Ok((content_type, photo.image))
}
