use anyhow::{Result, bail};
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

use crate::backend::client::BackendClient;
use crate::error::{AppError, ProxyResult};
use crate::models::reply::CompatibilityReply;
use crate::models::submission::FormSubmission;

/// Copies the submission verbatim to the backend's `/compatibility` endpoint
/// and keeps only the `response` field of its reply.
///
/// No field validation and no deadline here. Whatever goes wrong, the caller
/// only ever sees [`AppError::Compatibility`].
pub async fn forward_compatibility(
    backend: &BackendClient,
    form: FormSubmission,
) -> ProxyResult<CompatibilityReply> {
    let span = info_span!("compatibility", request_id = %Uuid::new_v4());

    relay(backend, form)
        .instrument(span.clone())
        .await
        .map_err(|e| {
            span.in_scope(|| error!("Error processing compatibility request: {e:#}"));
            AppError::Compatibility
        })
}

async fn relay(backend: &BackendClient, form: FormSubmission) -> Result<CompatibilityReply> {
    info!(fields = form.len(), "forwarding compatibility request");

    let response = backend.compatibility(form.into_multipart()?).await?;
    if !response.status().is_success() {
        bail!("backend returned status {}", response.status().as_u16());
    }

    let reply: CompatibilityReply = response.json().await?;
    info!("compatibility request completed");
    Ok(reply)
}
