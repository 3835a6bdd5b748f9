use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use std::time::Duration;

use crate::web::forms::LoginForm;
use crate::web::helpers::{removal_cookie, render, session_cookie, session_token};
use crate::web::templates::AdminToggleFragment;
use crate::web::AppState;

const LOGIN_ATTEMPTS: usize = 5;
const LOGIN_WINDOW: Duration = Duration::from_secs(300);

fn client_key(req: &HttpRequest) -> String {
    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[post("/admin/login")]
pub async fn login(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<LoginForm>,
) -> impl Responder {
    if !state
        .rate_limiter
        .check_rate_limit(&client_key(&req), LOGIN_ATTEMPTS, LOGIN_WINDOW)
    {
        return HttpResponse::TooManyRequests().body("Terlalu banyak percobaan. Coba lagi nanti.");
    }

    match state.gate.login(&state.pool, &form.password).await {
        Ok(Some(session)) => {
            log::info!("Admin login for {}", session.email);
            let mut response = render(AdminToggleFragment {
                is_admin: true,
                error: None,
            });
            if let Err(e) = response.add_cookie(&session_cookie(session.token)) {
                log::error!("Failed to attach session cookie: {e}");
            }
            response
        }
        Ok(None) => render(AdminToggleFragment {
            is_admin: false,
            error: Some("Password salah!".to_string()),
        }),
        Err(e) => {
            log::error!("Login failed: {e}");
            HttpResponse::InternalServerError().body("Login gagal. Coba lagi.")
        }
    }
}

#[post("/admin/logout")]
pub async fn logout(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    if let Some(token) = session_token(&req) {
        state.gate.logout(&state.pool, token).await;
    }

    let mut response = render(AdminToggleFragment {
        is_admin: false,
        error: None,
    });
    if let Err(e) = response.add_cookie(&removal_cookie()) {
        log::error!("Failed to attach removal cookie: {e}");
    }
    // The page still shows editing affordances until it reloads.
    response
        .headers_mut()
        .insert(
            actix_web::http::header::HeaderName::from_static("hx-refresh"),
            actix_web::http::header::HeaderValue::from_static("true"),
        );
    response
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(login).service(logout);
}
