use actix_multipart::Multipart;
use actix_web::{HttpResponse, post, web};
use tracing::error;

use crate::error::{AppError, ProxyResult};
use crate::handlers::astrology::forward_horoscope;
use crate::handlers::compatibility::forward_compatibility;
use crate::handlers::form::collect_form;
use crate::state::AppState;

#[post("/astrology")]
async fn astrology(state: web::Data<AppState>, payload: Multipart) -> ProxyResult<HttpResponse> {
    let form = collect_form(payload, state.config.form_limits)
        .await
        .inspect_err(|e| error!("Failed to read horoscope form: {e}"))?;

    let payload = forward_horoscope(&state.backend, form, state.config.astrology_timeout).await?;
    Ok(HttpResponse::Ok().json(payload))
}

#[post("/compatibility")]
async fn compatibility(
    state: web::Data<AppState>,
    payload: Multipart,
) -> ProxyResult<HttpResponse> {
    let form = collect_form(payload, state.config.form_limits)
        .await
        .map_err(|e| {
            error!("Failed to read compatibility form: {e}");
            AppError::Compatibility
        })?;

    let reply = forward_compatibility(&state.backend, form).await?;
    Ok(HttpResponse::Ok().json(reply))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(astrology).service(compatibility);
}
