//! HTML rendering for every page.
//!
//! Pages are assembled with `format!`; every piece of user-provided text goes
//! through [`escape`] before it is interpolated.

use crate::helpers::{ALERT, NOTICE};
use photoquiz_common::PhotoSummary;
use photoquiz_common::upload::{UploadErrors, UploadField};
use rocket::request::FlashMessage;
use rocket::response::content::RawHtml;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f5f5f4; color: #1c1917; }
main { max-width: 42rem; margin: 2rem auto; padding: 1.5rem; background: #fff; border-radius: 0.75rem; }
nav a { margin-right: 1rem; }
.notice { background: #dcfce7; padding: 0.75rem; border-radius: 0.5rem; }
.alert { background: #fee2e2; padding: 0.75rem; border-radius: 0.5rem; }
.field-error { color: #b91c1c; font-size: 0.9rem; }
.hidden { display: none; }
.drop-zone { border: 2px dashed #a8a29e; border-radius: 0.75rem; padding: 2rem; text-align: center; cursor: pointer; }
.drop-zone.dragging { background: rgba(37, 99, 235, 0.1); }
.quiz-photo, .preview-photo { max-width: 100%; border-radius: 0.5rem; }
.thumb { width: 6rem; height: 6rem; object-fit: cover; border-radius: 0.25rem; }
table { width: 100%; border-collapse: collapse; }
td, th { padding: 0.5rem; border-bottom: 1px solid #e7e5e4; text-align: left; }
"#;

/// Escape text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    ammonia::clean_text(text)
}

fn flash_html(flash: Option<&FlashMessage<'_>>) -> String {
    match flash {
        Some(f) if f.kind() == NOTICE => {
            format!(r#"<p class="notice" role="status">{}</p>"#, escape(f.message()))
        }
        Some(f) if f.kind() == ALERT => {
            format!(r#"<p class="alert" role="alert">{}</p>"#, escape(f.message()))
        }
        Some(f) => format!("<p>{}</p>", escape(f.message())),
        None => String::new(),
    }
}

fn layout(
    title: &str,
    flash: Option<&FlashMessage<'_>>,
    body: &str,
    scripts: &[&str],
) -> RawHtml<String> {
    let script_tags: String = scripts
        .iter()
        .map(|src| format!(r#"<script src="{src}" defer></script>"#))
        .collect();
    RawHtml(format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{STYLE}</style>
{script_tags}
</head>
<body>
<main>
<nav><a href="/photos/new">アップロード</a><a href="/quizzes">クイズ</a><a href="/admins">管理画面</a></nav>
{flash}
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
        flash = flash_html(flash),
    ))
}

fn field_errors(errors: Option<&UploadErrors>, field: UploadField) -> String {
    errors
        .map(|e| {
            e.for_field(field)
                .map(|m| format!(r#"<p class="field-error">{}</p>"#, escape(m)))
                .collect()
        })
        .unwrap_or_default()
}

/// The upload form. `name` is echoed back after a failed submission.
pub fn upload_form(
    flash: Option<&FlashMessage<'_>>,
    name: &str,
    errors: Option<&UploadErrors>,
) -> RawHtml<String> {
    let summary = match errors {
        Some(e) if !e.is_empty() => format!(
            r#"<p class="alert" role="alert">{}件のエラーがあります</p>"#,
            e.len()
        ),
        _ => String::new(),
    };
    let body = format!(
        r#"<h1>写真をアップロード</h1>
{summary}
<form action="/photos" method="post" enctype="multipart/form-data" data-photo-upload>
  <p>
    <label for="photo_name">名前</label><br>
    <input type="text" id="photo_name" name="name" value="{name}">
  </p>
  {name_errors}
  <div class="drop-zone" data-drop-zone>
    <div data-upload-prompt>
      <p>ここに画像をドラッグ＆ドロップ<br>またはクリックして選択</p>
    </div>
    <div class="hidden" data-image-preview>
      <img class="preview-photo" alt="プレビュー" data-preview-img>
      <p><button type="button" data-change-image>画像を変更</button></p>
    </div>
    <input type="file" class="hidden" name="image" accept="image/*" data-file-input>
  </div>
  {image_errors}
  <p><button type="submit">アップロード</button></p>
</form>"#,
        name = escape(name),
        name_errors = field_errors(errors, UploadField::Name),
        image_errors = field_errors(errors, UploadField::Image),
    );
    layout("写真をアップロード", flash, &body, &["/assets/photo_upload.js"])
}

/// Shared password form for either gate.
pub fn login_form(
    flash: Option<&FlashMessage<'_>>,
    heading: &str,
    action: &str,
    error: Option<&str>,
) -> RawHtml<String> {
    let error = error
        .map(|e| format!(r#"<p class="alert" role="alert">{}</p>"#, escape(e)))
        .unwrap_or_default();
    let body = format!(
        r#"<h1>{heading}</h1>
{error}
<form action="{action}" method="post">
  <p>
    <label for="password">パスワード</label><br>
    <input type="password" id="password" name="password" autofocus>
  </p>
  <p><button type="submit">ログイン</button></p>
</form>"#,
        heading = escape(heading),
        action = escape(action),
    );
    layout(heading, flash, &body, &[])
}

pub fn quiz_page(
    flash: Option<&FlashMessage<'_>>,
    photo_id: u32,
    name: &str,
    remaining: u64,
    last: bool,
) -> RawHtml<String> {
    let next_link = if last {
        r#"<a href="/quizzes/complete">結果を見る</a>"#
    } else {
        r#"<a href="/quizzes">次の問題へ</a>"#
    };
    let body = format!(
        r#"<h1>この写真は誰（何）でしょう？</h1>
<p>残り <span id="remaining" data-remaining="{remaining}">{remaining}</span> 問</p>
<img class="quiz-photo" src="/photos/{photo_id}/image" alt="クイズの写真">
<details>
  <summary>答えを見る</summary>
  <p class="answer">{name}</p>
</details>
<p>{next_link}</p>
<form action="/quiz_reset" method="post">
  <button type="submit">最初からやり直す</button>
</form>"#,
        name = escape(name),
    );
    layout("クイズ", flash, &body, &[])
}

pub fn complete_page(flash: Option<&FlashMessage<'_>>, total: u64) -> RawHtml<String> {
    let body = format!(
        r#"<h1>クイズ完了！</h1>
<p>全 <span id="total" data-total="{total}">{total}</span> 問に回答しました。</p>
<form action="/quiz_reset" method="post">
  <button type="submit">もう一度挑戦する</button>
</form>"#
    );
    layout("クイズ完了", flash, &body, &[])
}

pub fn admin_photos(flash: Option<&FlashMessage<'_>>, photos: &[PhotoSummary]) -> RawHtml<String> {
    let rows: String = if photos.is_empty() {
        r#"<tr><td colspan="4">まだ写真がありません</td></tr>"#.to_string()
    } else {
        photos.iter().map(admin_photo_row).collect()
    };
    let body = format!(
        r#"<h1>アップロードされた写真</h1>
<p>{count} 件</p>
<table>
  <thead><tr><th>写真</th><th>名前</th><th>アップロード日時</th><th>画像URL</th></tr></thead>
  <tbody>
{rows}
  </tbody>
</table>"#,
        count = photos.len(),
    );
    layout("管理画面", flash, &body, &["/assets/admins.js"])
}

fn admin_photo_row(photo: &PhotoSummary) -> String {
    let id = photo.photo_id;
    format!(
        r#"<tr id="photo-{id}">
  <td><img class="thumb" src="/photos/{id}/image" alt="{name}"></td>
  <td>{name}<br><small>{size} ({content_type})</small></td>
  <td>{created_at}</td>
  <td>
    <input type="text" id="photo-url-{id}" value="/photos/{id}/image" readonly>
    <button type="button" data-copy-target="photo-url-{id}">コピー</button>
  </td>
</tr>
"#,
        name = escape(&photo.name),
        size = human_size(photo.byte_size),
        content_type = escape(&photo.content_type),
        created_at = photo.created_at.format("%Y-%m-%d %H:%M"),
    )
}

fn human_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;
    if bytes >= MIB {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{bytes} B")
    }
}

pub fn health_page() -> RawHtml<String> {
    RawHtml(
        r#"<!DOCTYPE html><html><body style="background-color: green"></body></html>"#.to_string(),
    )
}

pub fn not_found_page() -> RawHtml<String> {
    error_page("ページが見つかりません", "お探しのページは存在しないか、削除されました。")
}

pub fn unprocessable_page() -> RawHtml<String> {
    error_page("送信内容を処理できません", "入力内容を確認して、もう一度お試しください。")
}

pub fn internal_error_page() -> RawHtml<String> {
    error_page("エラーが発生しました", "しばらくしてから、もう一度お試しください。")
}

fn error_page(heading: &str, detail: &str) -> RawHtml<String> {
    let body = format!("<h1>{}</h1><p>{}</p>", escape(heading), escape(detail));
    layout(heading, None, &body, &[])
}
