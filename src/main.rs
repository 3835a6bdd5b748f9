mod web;

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use std::sync::Arc;

use undangan::config::Config;
use undangan::db::{sessions, Database};
use undangan::services::auth::AdminGate;
use undangan::storage::LocalStore;
use web::middleware::SecurityHeaders;
use web::security::RateLimiter;
use web::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .init();

    let db = Database::new(&config.database_url)
        .await
        .expect("Failed to connect to database / run migrations");

    let gate = AdminGate::new(&config.admin_email, &config.admin_secret);
    gate.ensure_admin_user(&db.pool)
        .await
        .expect("Failed to provision the admin account");

    match sessions::purge_expired_sessions(&db.pool).await {
        Ok(0) => {}
        Ok(n) => log::info!("Purged {n} expired admin sessions"),
        Err(e) => log::warn!("Failed to purge expired sessions: {e}"),
    }

    let store = LocalStore::new(&config.media_root, &config.public_media_base);

    let bind_addr = config.bind_addr.clone();
    let media_root = config.media_root.clone();
    let media_base = config.public_media_base.clone();

    let state = Data::new(AppState {
        pool: db.pool,
        gate: Arc::new(gate),
        store: Arc::new(store),
        config: Arc::new(config),
        rate_limiter: Arc::new(RateLimiter::new()),
    });

    log::info!("Listening on {bind_addr}");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(SecurityHeaders)
            .configure(web::handlers::configure)
            .service(Files::new("/static", "./static").prefer_utf8(true))
            .service(Files::new(&media_base, &media_root).prefer_utf8(true))
            .default_service(actix_web::web::route().to(web::handlers::public::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
