use actix_multipart::Multipart;
use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use futures_util::StreamExt as _;
use uuid::Uuid;

use crate::web::forms::PhotoTextForm;
use crate::web::handlers::public::photo_grid_html;
use crate::web::helpers::require_admin;
use crate::web::AppState;
use undangan::common::UploadError;
use undangan::db::photos;
use undangan::models::{PhotoSection, PhotoTextField};
use undangan::services::upload::{remove_photo, upload_photo, NewUpload};

const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Reads the upload form: the first file field plus the optional
/// `caption` and `description` text fields.
async fn read_upload(
    mut payload: Multipart,
) -> Result<Option<NewUpload>, actix_multipart::MultipartError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut caption = None;
    let mut description = None;

    while let Some(item) = payload.next().await {
        let mut field = item?;

        let disposition = field.content_disposition();
        let name = disposition.get_name().unwrap_or("").to_string();
        let file_name = disposition.get_filename().map(str::to_string);

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk?;
            if bytes.len() + chunk.len() > MAX_UPLOAD_BYTES {
                return Ok(None);
            }
            bytes.extend_from_slice(&chunk);
        }

        match (file_name, name.as_str()) {
            (Some(file_name), _) => {
                if file.is_none() {
                    file = Some((file_name, bytes));
                }
            }
            (None, "caption") => caption = text_value(&bytes),
            (None, "description") => description = text_value(&bytes),
            _ => {}
        }
    }

    Ok(file.map(|(file_name, bytes)| NewUpload {
        file_name,
        bytes,
        caption,
        description,
    }))
}

fn text_value(bytes: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(bytes);
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn grid_error(e: &UploadError) -> String {
    match e {
        UploadError::EmptyUpload => "File kosong atau terlalu besar.".to_string(),
        _ => "Gagal mengunggah foto. Coba lagi.".to_string(),
    }
}

/// Accepts one photo and re-renders the section grid.
#[post("/admin/photos/{section}")]
pub async fn upload(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    payload: Multipart,
) -> impl Responder {
    if let Err(response) = require_admin(&req, &state).await {
        return response;
    }

    let Some(section) = PhotoSection::parse(&path.into_inner()) else {
        return HttpResponse::NotFound().body("Unknown photo section");
    };

    let upload = match read_upload(payload).await {
        Ok(Some(upload)) => upload,
        Ok(None) => {
            let message = grid_error(&UploadError::EmptyUpload);
            let body = photo_grid_html(&state, section, true, Some(message)).await;
            return HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(body);
        }
        Err(e) => {
            log::error!("Malformed upload body: {e}");
            return HttpResponse::BadRequest().body("Malformed upload");
        }
    };

    let error = match upload_photo(&state.pool, state.store.as_ref(), section, upload).await {
        Ok(record) => {
            log::info!("Photo {} uploaded to {section}", record.id);
            None
        }
        Err(e) => {
            log::error!("Photo upload to {section} failed: {e}");
            Some(grid_error(&e))
        }
    };

    let body = photo_grid_html(&state, section, true, error).await;
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// Updates a photo's caption or description. Clearing the text is
/// allowed; these fields are optional.
#[post("/admin/photos/{id}/text")]
pub async fn edit_text(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Form<PhotoTextForm>,
) -> impl Responder {
    if let Err(response) = require_admin(&req, &state).await {
        return response;
    }

    let Some(field) = PhotoTextField::parse(&form.field) else {
        return HttpResponse::BadRequest().body("Unknown photo field");
    };

    let value = form.value.trim();
    let value = (!value.is_empty()).then_some(value);

    match photos::update_photo_text(&state.pool, *path, field, value).await {
        Ok(Some(_)) => HttpResponse::NoContent().finish(),
        Ok(None) => HttpResponse::NotFound().body("Photo not found"),
        Err(e) => {
            log::error!("Failed to update photo {} text: {e}", *path);
            HttpResponse::InternalServerError().body("Gagal menyimpan perubahan.")
        }
    }
}

/// Removes a photo and re-renders the grid it came from.
#[post("/admin/photos/{id}/delete")]
pub async fn delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    if let Err(response) = require_admin(&req, &state).await {
        return response;
    }

    match remove_photo(&state.pool, state.store.as_ref(), *path).await {
        Ok(record) => {
            log::info!("Photo {} deleted from {}", record.id, record.section);
            let body = photo_grid_html(&state, record.section, true, None).await;
            HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(body)
        }
        Err(undangan::common::PhotoError::NotFound(id)) => {
            HttpResponse::NotFound().body(format!("Photo {id} not found"))
        }
        Err(e) => {
            log::error!("Failed to delete photo {}: {e}", *path);
            HttpResponse::InternalServerError().body("Gagal menghapus foto.")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(upload).service(edit_text).service(delete);
}
