use actix_web::{post, web, HttpRequest, HttpResponse, Responder};

use crate::web::forms::ContentEditForm;
use crate::web::helpers::require_admin;
use crate::web::AppState;
use undangan::db::content;
use undangan::models::is_known_section;
use undangan::services::editable::commit_text;

/// Commits one in-place text edit. An edit that trims to nothing is
/// discarded and the stored value stays as it was.
#[post("/admin/content/{section}")]
pub async fn edit_content(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    form: web::Form<ContentEditForm>,
) -> impl Responder {
    if let Err(response) = require_admin(&req, &state).await {
        return response;
    }

    let section = path.into_inner();
    if !is_known_section(&section) {
        return HttpResponse::NotFound().body("Unknown section");
    }

    let Some(value) = commit_text(&form.value) else {
        return HttpResponse::NoContent().finish();
    };

    match content::update_field(&state.pool, &section, &form.field, &value).await {
        Ok(record) => {
            log::info!("Content edit: {section}.{}", form.field);
            HttpResponse::Ok()
                .content_type("text/plain; charset=utf-8")
                .body(record.field(&form.field).to_string())
        }
        Err(e) => {
            log::error!("Failed to store edit for {section}.{}: {e}", form.field);
            HttpResponse::InternalServerError().body("Gagal menyimpan perubahan.")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(edit_content);
}
