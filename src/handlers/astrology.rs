use std::time::Duration;

use reqwest::{Response, multipart::Form};
use serde_json::Value;
use tokio::time::timeout;
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

use crate::backend::client::BackendClient;
use crate::error::{AppError, ProxyResult};
use crate::models::reply::backend_error_message;
use crate::models::submission::{FormSubmission, HoroscopeSubmission};

/// Validates a horoscope submission and relays it to the backend's
/// `/astrology` endpoint, giving the whole exchange `window` to finish.
///
/// On success the backend's JSON body is returned untouched. Every failure is
/// logged here before it reaches the caller.
pub async fn forward_horoscope(
    backend: &BackendClient,
    form: FormSubmission,
    window: Duration,
) -> ProxyResult<Value> {
    let span = info_span!("horoscope", request_id = %Uuid::new_v4());

    let result = relay(backend, form, window)
        .instrument(span.clone())
        .await;

    span.in_scope(|| match &result {
        Ok(_) => info!("horoscope request completed"),
        Err(AppError::MissingField(field)) => {
            info!(field = *field, "rejected horoscope request")
        }
        Err(e) => error!("horoscope request failed: {}", e.message()),
    });

    result
}

async fn relay(
    backend: &BackendClient,
    form: FormSubmission,
    window: Duration,
) -> ProxyResult<Value> {
    let submission = HoroscopeSubmission::validate(&form)?;
    info!(
        fields = form.len(),
        date_of_birth = submission.date_of_birth,
        city = submission.city,
        "forwarding horoscope request"
    );

    let body = form.into_multipart()?;

    // Dropping the exchange on timeout aborts the in-flight request.
    match timeout(window, exchange(backend, body)).await {
        Ok(outcome) => outcome,
        Err(_) => Err(AppError::Timeout(window)),
    }
}

async fn exchange(backend: &BackendClient, body: Form) -> ProxyResult<Value> {
    let response = backend.astrology(body).await?;
    read_payload(response).await
}

async fn read_payload(response: Response) -> ProxyResult<Value> {
    let status = response.status();
    // Error bodies are JSON too; one that fails to decode is a transport failure.
    let body: Value = response.json().await?;
    if !status.is_success() {
        let message = backend_error_message(&body)
            .unwrap_or_else(|| format!("backend returned status {}", status.as_u16()));
        return Err(AppError::Backend(message));
    }

    Ok(body)
}
