use actix_web::{post, web, HttpRequest, HttpResponse, Responder};

use crate::web::forms::RsvpForm;
use crate::web::helpers::{current_admin, render};
use crate::web::templates::{RsvpSectionFragment, RsvpSuccessFragment, RsvpView};
use crate::web::AppState;
use undangan::db::{content, rsvp};
use undangan::models::validate_rsvp;

#[post("/invitation/rsvp")]
pub async fn submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<RsvpForm>,
) -> impl Responder {
    let is_admin = current_admin(&req, &state).await.is_some();
    let record = content::get_content_or_default(&state.pool, "rsvp").await;

    let created = match validate_rsvp(&form.into_inner().into_input()) {
        Ok(created) => created,
        Err(e) => {
            return render(RsvpSectionFragment {
                view: RsvpView::new(&record, is_admin),
                error: Some(e.to_string()),
            });
        }
    };

    match rsvp::insert_submission(&state.pool, &created).await {
        Ok(saved) => {
            log::info!(
                "RSVP from {} (attending: {}, guests: {})",
                saved.guest_name,
                saved.will_attend,
                saved.number_of_guests
            );
            let detail = if saved.will_attend {
                record.field("success_detail_yes")
            } else {
                record.field("success_detail_no")
            };
            render(RsvpSuccessFragment {
                title: record.field("success_title").to_string(),
                message: record.field("success_message").to_string(),
                detail: detail.to_string(),
            })
        }
        Err(e) => {
            log::error!("Failed to store RSVP: {e}");
            render(RsvpSectionFragment {
                view: RsvpView::new(&record, is_admin),
                error: Some("Terjadi kesalahan. Mohon coba lagi beberapa saat.".to_string()),
            })
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(submit);
}
