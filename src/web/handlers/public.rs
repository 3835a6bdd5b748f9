use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use askama::Template;

use crate::web::forms::CountdownQuery;
use crate::web::helpers::{current_admin, render};
use crate::web::templates::{
    AdminToggleFragment, ClosingView, CountdownCards, CountdownFragment, DressCodeView,
    InvitationTemplate, LandingTemplate, NotFoundTemplate, PhotoGridFragment, PhotoSectionView,
    RsvpSectionFragment, RsvpView, TimelineView, VenueView, WelcomeView,
};
use crate::web::AppState;
use undangan::db::{content, photos};
use undangan::models::{ContentRecord, PhotoSection};
use undangan::services::countdown::{parse_target, remaining, FlipState, TimeLeft};

/// Renders a fragment into a string for embedding in a page template.
pub fn fragment_html<T: Template>(t: T) -> String {
    t.render().unwrap_or_else(|e| {
        log::error!("Fragment render failed: {e}");
        String::new()
    })
}

pub fn admin_toggle_html(is_admin: bool) -> String {
    fragment_html(AdminToggleFragment {
        is_admin,
        error: None,
    })
}

/// Loads a photo section's content record and photos and renders the
/// grid fragment. A photo query failure renders the empty state.
pub async fn photo_grid_html(
    state: &AppState,
    section: PhotoSection,
    is_admin: bool,
    error: Option<String>,
) -> String {
    let record = content::get_content_or_default(&state.pool, section.as_str()).await;
    let mut error = error;
    let photos = match photos::list_photos(&state.pool, section).await {
        Ok(photos) => photos,
        Err(e) => {
            log::error!("Failed to list {section} photos: {e}");
            error.get_or_insert_with(|| "Gagal memuat foto.".to_string());
            Vec::new()
        }
    };

    fragment_html(PhotoGridFragment {
        view: PhotoSectionView::new(&record, &photos, is_admin, error),
    })
}

/// Countdown target: the edited `target_date` field when it parses,
/// the configured wedding date otherwise.
fn countdown_target(record: &ContentRecord, state: &AppState) -> chrono::DateTime<chrono::Utc> {
    parse_target(record.field("target_date")).unwrap_or(state.config.event_date)
}

pub async fn countdown_html(state: &AppState, is_admin: bool) -> String {
    let record = content::get_content_or_default(&state.pool, "countdown").await;
    let target = countdown_target(&record, state);
    let left = remaining(target, chrono::Utc::now());

    let cards_html = fragment_html(CountdownCards::new(&record, FlipState::initial(left)));
    fragment_html(CountdownFragment::new(&record, cards_html, is_admin))
}

#[get("/")]
pub async fn landing(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let is_admin = current_admin(&req, &state).await.is_some();
    let record = content::get_content_or_default(&state.pool, "landing").await;

    render(LandingTemplate::new(
        &record,
        is_admin,
        admin_toggle_html(is_admin),
        state.config.music_path.clone(),
    ))
}

#[get("/invitation")]
pub async fn invitation(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let is_admin = current_admin(&req, &state).await.is_some();
    let pool = &state.pool;

    let welcome = content::get_content_or_default(pool, "welcome").await;
    let venue = content::get_content_or_default(pool, "venue").await;
    let timeline = content::get_content_or_default(pool, "timeline").await;
    let dress_code = content::get_content_or_default(pool, "dress_code").await;
    let rsvp = content::get_content_or_default(pool, "rsvp").await;
    let closing = content::get_content_or_default(pool, "closing").await;

    let story_html = photo_grid_html(&state, PhotoSection::Story, is_admin, None).await;
    let gallery_html = photo_grid_html(&state, PhotoSection::Gallery, is_admin, None).await;
    let countdown_html = countdown_html(&state, is_admin).await;
    let rsvp_html = fragment_html(RsvpSectionFragment {
        view: RsvpView::new(&rsvp, is_admin),
        error: None,
    });

    render(InvitationTemplate {
        admin_toggle_html: admin_toggle_html(is_admin),
        countdown_html,
        welcome: WelcomeView::new(&welcome, is_admin),
        story_html,
        venue: VenueView::new(&venue, is_admin),
        timeline: TimelineView::new(&timeline, is_admin),
        dress_code: DressCodeView::new(&dress_code, is_admin),
        gallery_html,
        rsvp_html,
        closing: ClosingView::new(&closing, is_admin),
        music_path: state.config.music_path.clone(),
    })
}

/// Polled once a second by the countdown section. The client echoes the
/// values it currently shows so only changed cards animate. Returns the
/// cards region only; the editable title stays out of the swap.
#[get("/invitation/countdown")]
pub async fn countdown_tick(
    state: web::Data<AppState>,
    query: web::Query<CountdownQuery>,
) -> impl Responder {
    let record = content::get_content_or_default(&state.pool, "countdown").await;
    let target = countdown_target(&record, &state);

    let previous = query.prev.as_deref().and_then(TimeLeft::decode);
    let current = remaining(target, chrono::Utc::now());

    render(CountdownCards::new(
        &record,
        FlipState::advance(previous, current),
    ))
}

/// Catch-all for unknown paths.
pub async fn not_found(req: HttpRequest) -> impl Responder {
    log::error!("404 for {}", req.path());
    match (NotFoundTemplate {}).render() {
        Ok(body) => HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => HttpResponse::NotFound().body(format!("Not found ({e})")),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(landing)
        .service(invitation)
        .service(countdown_tick);
}
