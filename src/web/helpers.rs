use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpRequest, HttpResponse};
use askama::Template;
use uuid::Uuid;

use crate::web::AppState;
use undangan::models::AdminSession;
use undangan::services::auth::SESSION_TTL_DAYS;

pub const SESSION_COOKIE: &str = "wd_session";

pub fn is_htmx(req: &HttpRequest) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|s| s.eq_ignore_ascii_case("true"))
}

pub fn render<T: Template>(t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body(format!("Template error: {e}")),
    }
}

pub fn session_token(req: &HttpRequest) -> Option<Uuid> {
    req.cookie(SESSION_COOKIE)
        .map(|c| c.value().trim().to_string())
        .filter(|s| !s.is_empty())
        .and_then(|s| Uuid::parse_str(&s).ok())
}

/// Resolves the request's session cookie to a live admin session.
/// Lookup errors are logged and treated as "not logged in".
pub async fn current_admin(req: &HttpRequest, state: &AppState) -> Option<AdminSession> {
    let token = session_token(req)?;
    match state.gate.current_session(&state.pool, token).await {
        Ok(session) => session,
        Err(e) => {
            log::error!("Session lookup failed: {e}");
            None
        }
    }
}

pub async fn require_admin(
    req: &HttpRequest,
    state: &AppState,
) -> Result<AdminSession, HttpResponse> {
    match current_admin(req, state).await {
        Some(session) => Ok(session),
        None => Err(HttpResponse::Unauthorized().body("Admin login required")),
    }
}

pub fn session_cookie(token: Uuid) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(actix_web::cookie::time::Duration::days(SESSION_TTL_DAYS))
        .finish()
}

pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish();
    cookie.make_removal();
    cookie
}
