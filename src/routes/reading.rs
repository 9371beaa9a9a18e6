use actix_multipart::Multipart;
use actix_web::{
    HttpResponse, ResponseError, get,
    http::{StatusCode, header::ContentType},
    post, web,
};
use serde_json::Value;
use tracing::error;

use crate::backend::constants::DATE_OF_BIRTH_FIELD;
use crate::error::{AppError, ProxyResult};
use crate::handlers::astrology::forward_horoscope;
use crate::handlers::compatibility::forward_compatibility;
use crate::handlers::form::collect_form;
use crate::models::date::{is_iso_date, normalize_date};
use crate::render::page::render_page;
use crate::render::sanitize::render_response;
use crate::state::AppState;

#[get("/")]
async fn index(state: web::Data<AppState>) -> HttpResponse {
    page(&state, StatusCode::OK, None)
}

#[post("/reading/astrology")]
async fn astrology_reading(state: web::Data<AppState>, payload: Multipart) -> HttpResponse {
    let outcome = match collect_form(payload, state.config.form_limits).await {
        Ok(mut form) => {
            // the browser's date picker sends yyyy-mm-dd, the backend wants dd-mm-yyyy
            if let Some(date) = form
                .text(DATE_OF_BIRTH_FIELD)
                .filter(|date| is_iso_date(date))
                .map(normalize_date)
            {
                form.set_text(DATE_OF_BIRTH_FIELD, date);
            }
            forward_horoscope(&state.backend, form, state.config.astrology_timeout)
                .await
                .map(|payload| payload.get("response").cloned())
        }
        Err(e) => {
            error!("Failed to read horoscope form: {e}");
            Err(e)
        }
    };

    reading(&state, outcome)
}

#[post("/reading/compatibility")]
async fn compatibility_reading(state: web::Data<AppState>, payload: Multipart) -> HttpResponse {
    let outcome = match collect_form(payload, state.config.form_limits).await {
        Ok(form) => forward_compatibility(&state.backend, form)
            .await
            .map(|reply| reply.response),
        Err(e) => {
            error!("Failed to read compatibility form: {e}");
            Err(AppError::Compatibility)
        }
    };

    reading(&state, outcome)
}

/// Puts the backend's `response` (or the failure message) through the
/// sanitizer and into the page.
fn reading(state: &AppState, outcome: ProxyResult<Option<Value>>) -> HttpResponse {
    let (status, rendered) = match outcome {
        Ok(response) => {
            let response = response.as_ref().and_then(Value::as_str).unwrap_or_default();
            (StatusCode::OK, render_response(response))
        }
        Err(e) => (e.status_code(), render_response(&e.message())),
    };

    page(state, status, Some(&rendered.into_fragment()))
}

fn page(state: &AppState, status: StatusCode, result: Option<&str>) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(render_page(
            state.config.theme,
            state.carousel.current(),
            result,
        ))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(astrology_reading)
        .service(compatibility_reading);
}
