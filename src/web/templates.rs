//! Askama templates and the view models they render.
//!
//! Editable text is pre-rendered into HTML strings here (via
//! [`EditableText`]) so each template only decides layout; whether a
//! field is editable is settled before the template runs.

use askama::Template;

use undangan::models::{ContentRecord, PhotoRecord};
use undangan::services::countdown::{FlipState, TimeLeft};
use undangan::services::editable::{escape_html, EditableText, TextShape};

fn field_html(
    record: &ContentRecord,
    field: &str,
    shape: TextShape,
    class: &str,
    is_admin: bool,
) -> String {
    EditableText::from_record(record, field, shape, class).render(is_admin)
}

#[derive(Template)]
#[template(path = "public/landing.html")]
pub struct LandingTemplate {
    pub main_title_html: String,
    pub sub_title_html: String,
    pub date_text_html: String,
    pub venue_text_html: String,
    pub enter_button_label: String,
    pub admin_toggle_html: String,
    pub music_path: String,
}

impl LandingTemplate {
    pub fn new(record: &ContentRecord, is_admin: bool, admin_toggle_html: String, music_path: String) -> Self {
        Self {
            main_title_html: field_html(record, "main_title", TextShape::Heading, "landing-title", is_admin),
            sub_title_html: field_html(record, "sub_title", TextShape::Inline, "landing-subtitle", is_admin),
            date_text_html: field_html(record, "date_text", TextShape::Inline, "landing-date", is_admin),
            venue_text_html: field_html(record, "venue_text", TextShape::Inline, "landing-venue", is_admin),
            enter_button_label: record.field("enter_button").to_string(),
            admin_toggle_html,
            music_path,
        }
    }
}

pub struct WelcomeView {
    pub title_html: String,
    pub description_html: String,
    pub quote_html: String,
}

impl WelcomeView {
    pub fn new(record: &ContentRecord, is_admin: bool) -> Self {
        Self {
            title_html: field_html(record, "title", TextShape::Heading, "section-title", is_admin),
            description_html: field_html(record, "description", TextShape::Paragraph, "section-text", is_admin),
            quote_html: field_html(record, "quote", TextShape::Paragraph, "quote", is_admin),
        }
    }
}

pub struct VenueView {
    pub section_title_html: String,
    pub location_title_html: String,
    pub venue_name_html: String,
    pub hotel_name_html: String,
    pub address_html: String,
    pub date_title_html: String,
    pub date_value_html: String,
    pub time_title_html: String,
    pub time_value_html: String,
}

impl VenueView {
    pub fn new(record: &ContentRecord, is_admin: bool) -> Self {
        Self {
            section_title_html: field_html(record, "section_title", TextShape::Heading, "section-title", is_admin),
            location_title_html: field_html(record, "location_title", TextShape::Inline, "card-title", is_admin),
            venue_name_html: field_html(record, "venue_name", TextShape::Inline, "card-line strong", is_admin),
            hotel_name_html: field_html(record, "hotel_name", TextShape::Inline, "card-line", is_admin),
            address_html: field_html(record, "address", TextShape::Inline, "card-line muted", is_admin),
            date_title_html: field_html(record, "date_title", TextShape::Inline, "card-title", is_admin),
            date_value_html: field_html(record, "date_value", TextShape::Inline, "card-line", is_admin),
            time_title_html: field_html(record, "time_title", TextShape::Inline, "card-title", is_admin),
            time_value_html: field_html(record, "time_value", TextShape::Inline, "card-line", is_admin),
        }
    }
}

pub struct TimelineItemView {
    pub time_html: String,
    pub title_html: String,
}

pub struct TimelineView {
    pub title_html: String,
    pub subtitle_html: String,
    pub items: Vec<TimelineItemView>,
}

impl TimelineView {
    pub fn new(record: &ContentRecord, is_admin: bool) -> Self {
        let items = (1..=6)
            .filter(|i| {
                !record.field(&format!("item{i}_title")).is_empty()
                    || !record.field(&format!("item{i}_time")).is_empty()
            })
            .map(|i| {
                // Field names are owned by the record, not the view, so
                // render editable html from interned names.
                let time_field = format!("item{i}_time");
                let title_field = format!("item{i}_title");
                TimelineItemView {
                    time_html: editable_owned(record, &time_field, TextShape::Inline, "timeline-time", is_admin),
                    title_html: editable_owned(record, &title_field, TextShape::Inline, "timeline-title", is_admin),
                }
            })
            .collect();

        Self {
            title_html: field_html(record, "title", TextShape::Heading, "section-title", is_admin),
            subtitle_html: field_html(record, "subtitle", TextShape::Inline, "section-subtitle", is_admin),
            items,
        }
    }
}

fn editable_owned(
    record: &ContentRecord,
    field: &str,
    shape: TextShape,
    class: &str,
    is_admin: bool,
) -> String {
    EditableText {
        field,
        value: record.field(field),
        shape,
        class,
        endpoint: format!("/admin/content/{}", record.section),
    }
    .render(is_admin)
}

pub struct DressCodeView {
    pub title_html: String,
    pub subtitle_html: String,
    pub men_title_html: String,
    pub men_description_html: String,
    pub women_title_html: String,
    pub women_description_html: String,
}

impl DressCodeView {
    pub fn new(record: &ContentRecord, is_admin: bool) -> Self {
        Self {
            title_html: field_html(record, "title", TextShape::Heading, "section-title", is_admin),
            subtitle_html: field_html(record, "subtitle", TextShape::Inline, "section-subtitle", is_admin),
            men_title_html: field_html(record, "men_title", TextShape::Inline, "card-title", is_admin),
            men_description_html: field_html(record, "men_description", TextShape::Paragraph, "card-line", is_admin),
            women_title_html: field_html(record, "women_title", TextShape::Inline, "card-title", is_admin),
            women_description_html: field_html(record, "women_description", TextShape::Paragraph, "card-line", is_admin),
        }
    }
}

pub struct ClosingView {
    pub title_html: String,
    pub message_html: String,
}

impl ClosingView {
    pub fn new(record: &ContentRecord, is_admin: bool) -> Self {
        Self {
            title_html: field_html(record, "title", TextShape::Heading, "section-title", is_admin),
            message_html: field_html(record, "message", TextShape::Paragraph, "section-text", is_admin),
        }
    }
}

pub struct PhotoView {
    pub id: String,
    pub src: String,
    pub caption_html: String,
    pub description_html: String,
}

/// One photo section (story or gallery) ready to render as a grid.
pub struct PhotoSectionView {
    pub section: String,
    pub title_html: String,
    pub empty_text: String,
    pub photos: Vec<PhotoView>,
    pub is_admin: bool,
    pub error: Option<String>,
}

impl PhotoSectionView {
    pub fn new(
        record: &ContentRecord,
        photos: &[PhotoRecord],
        is_admin: bool,
        error: Option<String>,
    ) -> Self {
        let photos = photos
            .iter()
            .map(|p| PhotoView {
                id: p.id.to_string(),
                src: p.src.clone(),
                caption_html: photo_text_html(p, "caption", p.caption.as_deref(), is_admin),
                description_html: photo_text_html(p, "description", p.description.as_deref(), is_admin),
            })
            .collect();

        Self {
            section: record.section.clone(),
            title_html: field_html(record, "title", TextShape::Heading, "section-title", is_admin),
            empty_text: record.field("empty_text").to_string(),
            photos,
            is_admin,
            error,
        }
    }
}

fn photo_text_html(
    photo: &PhotoRecord,
    field: &str,
    value: Option<&str>,
    is_admin: bool,
) -> String {
    let class = match field {
        "caption" => "photo-caption",
        _ => "photo-description",
    };
    let value = value.unwrap_or("");

    if !is_admin {
        if value.is_empty() {
            return String::new();
        }
        return format!(r#"<p class="{class}">{}</p>"#, escape_html(value));
    }

    // An empty slot still renders for the admin so there is something
    // to click into.
    format!(
        concat!(
            r#"<p class="{class} editable" contenteditable="true" spellcheck="false""#,
            r#" data-edit-url="/admin/photos/{id}/text" data-edit-field="{field}""#,
            r#" data-edit-multiline="false" data-edit-optional="true">{value}</p>"#
        ),
        class = class,
        id = photo.id,
        field = field,
        value = escape_html(value),
    )
}

#[derive(Template)]
#[template(path = "fragments/photo_grid.html")]
pub struct PhotoGridFragment {
    pub view: PhotoSectionView,
}

pub struct RsvpView {
    pub section_title_html: String,
    pub section_subtitle_html: String,
    pub name_label: String,
    pub attendance_label: String,
    pub guest_count_label: String,
    pub notes_label: String,
    pub submit_button: String,
}

impl RsvpView {
    pub fn new(record: &ContentRecord, is_admin: bool) -> Self {
        Self {
            section_title_html: field_html(record, "section_title", TextShape::Heading, "section-title", is_admin),
            section_subtitle_html: field_html(record, "section_subtitle", TextShape::Inline, "section-subtitle", is_admin),
            name_label: record.field("name_label").to_string(),
            attendance_label: record.field("attendance_label").to_string(),
            guest_count_label: record.field("guest_count_label").to_string(),
            notes_label: record.field("notes_label").to_string(),
            submit_button: record.field("submit_button").to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "fragments/rsvp_section.html")]
pub struct RsvpSectionFragment {
    pub view: RsvpView,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "fragments/rsvp_success.html")]
pub struct RsvpSuccessFragment {
    pub title: String,
    pub message: String,
    pub detail: String,
}

/// The polled flip-card region. Kept free of editable markup; the
/// once-a-second swap would drop an edit in progress.
#[derive(Template)]
#[template(path = "fragments/countdown_cards.html")]
pub struct CountdownCards {
    pub days_label: String,
    pub hours_label: String,
    pub minutes_label: String,
    pub seconds_label: String,
    pub current: TimeLeft,
    pub previous: TimeLeft,
    pub days_flip: bool,
    pub hours_flip: bool,
    pub minutes_flip: bool,
    pub seconds_flip: bool,
    /// Encoded current values, echoed back by the next poll.
    pub next_prev: String,
    pub ended: bool,
}

impl CountdownCards {
    pub fn new(record: &ContentRecord, state: FlipState) -> Self {
        let [days_flip, hours_flip, minutes_flip, seconds_flip] = state.flips();
        let ended = state.current.is_zero();
        Self {
            days_label: record.field("days_label").to_string(),
            hours_label: record.field("hours_label").to_string(),
            minutes_label: record.field("minutes_label").to_string(),
            seconds_label: record.field("seconds_label").to_string(),
            next_prev: urlencoding::encode(&state.current.encode()).into_owned(),
            previous: state.previous,
            current: state.current,
            days_flip,
            hours_flip,
            minutes_flip,
            seconds_flip,
            ended,
        }
    }
}

/// Section wrapper around the polled cards: the editable title and the
/// admin-only target-date field live here, outside the swap region.
#[derive(Template)]
#[template(path = "fragments/countdown.html")]
pub struct CountdownFragment {
    pub title_html: String,
    pub target_html: String,
    pub cards_html: String,
}

impl CountdownFragment {
    pub fn new(record: &ContentRecord, cards_html: String, is_admin: bool) -> Self {
        let target_html = if is_admin {
            format!(
                r#"<p class="countdown-target">Target (RFC 3339): {}</p>"#,
                EditableText::from_record(
                    record,
                    "target_date",
                    TextShape::Inline,
                    "countdown-target-value",
                )
                .render(true)
            )
        } else {
            String::new()
        };

        Self {
            title_html: field_html(record, "title", TextShape::Heading, "section-title", is_admin),
            target_html,
            cards_html,
        }
    }
}

#[derive(Template)]
#[template(path = "fragments/admin_toggle.html")]
pub struct AdminToggleFragment {
    pub is_admin: bool,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "public/invitation.html")]
pub struct InvitationTemplate {
    pub admin_toggle_html: String,
    pub countdown_html: String,
    pub welcome: WelcomeView,
    pub story_html: String,
    pub venue: VenueView,
    pub timeline: TimelineView,
    pub dress_code: DressCodeView,
    pub gallery_html: String,
    pub rsvp_html: String,
    pub closing: ClosingView,
    pub music_path: String,
}

#[derive(Template)]
#[template(path = "public/not_found.html")]
pub struct NotFoundTemplate {}
