use actix_session::Session;
use actix_web::{http::header, route, web, HttpResponse};
use tracing::{debug, info};

use crate::config::BasePath;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(logout);
}

/// Drops the caller's session, if there is one, and sends them back to the
/// login page. GET and POST behave the same.
#[route("/logout", method = "GET", method = "POST")]
async fn logout(session: Session, base_path: web::Data<BasePath>) -> HttpResponse {
    let has_session = !session.entries().is_empty();
    if has_session {
        session.purge();
        info!("session purged on logout");
    } else {
        debug!("logout without a session");
    }

    HttpResponse::Found()
        .insert_header((header::LOCATION, base_path.login_page()))
        .finish()
}
