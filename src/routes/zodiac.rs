use actix_web::{HttpResponse, delete, get, post, web};
use serde::Deserialize;

use crate::error::ProxyResult;
use crate::handlers::zodiac::{catalog, lookup_sign};
use crate::state::AppState;

#[derive(Deserialize)]
struct LookupQuery {
    date_of_birth: String,
}

#[get("/signs")]
async fn signs() -> HttpResponse {
    HttpResponse::Ok().json(catalog())
}

#[get("/featured")]
async fn featured(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.carousel.current().info())
}

#[post("/featured/hover")]
async fn hover_start(state: web::Data<AppState>) -> HttpResponse {
    state.carousel.pause();
    HttpResponse::NoContent().finish()
}

#[delete("/featured/hover")]
async fn hover_end(state: web::Data<AppState>) -> HttpResponse {
    state.carousel.resume();
    HttpResponse::NoContent().finish()
}

#[get("/lookup")]
async fn lookup(query: web::Query<LookupQuery>) -> ProxyResult<HttpResponse> {
    let found = lookup_sign(&query.date_of_birth)?;
    Ok(HttpResponse::Ok().json(found))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(signs)
        .service(featured)
        .service(hover_start)
        .service(hover_end)
        .service(lookup);
}
