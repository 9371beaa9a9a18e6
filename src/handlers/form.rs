use actix_multipart::Multipart;
use futures_util::TryStreamExt;

use crate::error::{AppError, ProxyResult};
use crate::models::submission::{FieldValue, FormSubmission};

/// Byte caps applied while an inbound form is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLimits {
    pub field_bytes: usize,
    pub form_bytes: usize,
}

impl Default for FormLimits {
    fn default() -> Self {
        Self {
            field_bytes: 5 * 1024 * 1024,
            form_bytes: 10 * 1024 * 1024,
        }
    }
}

/// Drains a multipart body into an ordered [`FormSubmission`].
///
/// Parts whose content disposition names a file are kept as files with their
/// original filename, every other part is read as text. Reading stops as soon
/// as a single part or the whole form goes over `limits`.
pub async fn collect_form(mut payload: Multipart, limits: FormLimits) -> ProxyResult<FormSubmission> {
    let mut form = FormSubmission::default();
    let mut total = 0usize;

    while let Some(mut field) = payload.try_next().await? {
        let name = field.name().unwrap_or_default().to_string();
        let filename = field
            .content_disposition()
            .and_then(|disposition| disposition.get_filename())
            .map(str::to_string);
        let content_type = field.content_type().map(|mime| mime.to_string());

        let mut data = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            if data.len() + chunk.len() > limits.field_bytes {
                return Err(AppError::FieldTooLarge(limits.field_bytes));
            }
            total += chunk.len();
            if total > limits.form_bytes {
                return Err(AppError::FormTooLarge(limits.form_bytes));
            }
            data.extend_from_slice(&chunk);
        }

        let value = match filename {
            Some(filename) => FieldValue::File {
                filename,
                content_type,
                data,
            },
            None => FieldValue::Text(String::from_utf8_lossy(&data).into_owned()),
        };
        form.append(name, value);
    }

    Ok(form)
}
