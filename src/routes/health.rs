use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

use crate::state::AppState;

#[get("/ping")]
async fn ping() -> impl Responder {
    HttpResponse::Ok().body("pong")
}

#[get("/status")]
async fn status(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "backend": state.config.backend_url.as_str(),
        "featured_sign": state.carousel.current(),
        "carousel_paused": state.carousel.is_paused(),
    }))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(ping).service(status);
}
