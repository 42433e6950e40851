//! Server-side validation of photo uploads.
//!
//! The only rules are presence rules: a photo needs a name and an image.
//! Size and type are not checked.

use super::*;
use thiserror::Error;

/// A raw upload as submitted by the form. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoUpload {
    pub name: Option<String>,
    pub content_type: Option<String>,
    pub image: Option<Vec<u8>>,
}

/// The form fields an upload error can be attached to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum UploadField {
    Name,
    Image,
}

impl UploadField {
    pub fn as_str(self) -> &'static str {
        match self {
            UploadField::Name => "name",
            UploadField::Image => "image",
        }
    }
}

/// Field errors collected while validating an upload, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", join_messages(.errors))]
pub struct UploadErrors {
    errors: Vec<(UploadField, String)>,
}

impl UploadErrors {
    fn push(&mut self, field: UploadField, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Messages attached to a single field.
    pub fn for_field(&self, field: UploadField) -> impl Iterator<Item = &str> {
        self.errors
            .iter()
            .filter(move |(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (UploadField, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

fn join_messages(errors: &[(UploadField, String)]) -> String {
    errors
        .iter()
        .map(|(_, m)| m.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub const NAME_BLANK_MESSAGE: &str = "名前を入力してください";
pub const IMAGE_BLANK_MESSAGE: &str = "画像を選択してください";

impl PhotoUpload {
    /// Check presence of name and image, and build the row to insert.
    /// A whitespace-only name or a zero-byte image counts as missing.
    pub fn validate(self) -> Result<NewPhoto, UploadErrors> {
        let mut errors = UploadErrors::default();

        let name = self
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        if name.is_none() {
            errors.push(UploadField::Name, NAME_BLANK_MESSAGE);
        }

        let image = self.image.filter(|bytes| !bytes.is_empty());
        if image.is_none() {
            errors.push(UploadField::Image, IMAGE_BLANK_MESSAGE);
        }

        match (name, image) {
            (Some(name), Some(image)) => Ok(NewPhoto {
                name,
                content_type: self
                    .content_type
                    .filter(|c| !c.is_empty())
                    .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
                image,
            }),
            _ => Err(errors),
        }
    }
}
