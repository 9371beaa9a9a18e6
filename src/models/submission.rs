use reqwest::multipart::{Form, Part};

use crate::backend::constants::REQUIRED_HOROSCOPE_FIELDS;
use crate::error::{AppError, ProxyResult};

/// A single value of a submitted form field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    File {
        filename: String,
        content_type: Option<String>,
        data: Vec<u8>,
    },
}

impl FieldValue {
    /// Files always count as present, text only when non-empty.
    pub fn is_present(&self) -> bool {
        match self {
            FieldValue::Text(text) => !text.is_empty(),
            FieldValue::File { .. } => true,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::File { .. } => None,
        }
    }
}

/// Form fields in the order the browser sent them. Repeated names are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSubmission {
    fields: Vec<(String, FieldValue)>,
}

impl FormSubmission {
    pub fn append(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.push((name.into(), value));
    }

    /// First value submitted under `name`.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_text)
    }

    /// Replaces the first `name` in place and drops any later duplicates,
    /// appending when the field is absent.
    pub fn set_text(&mut self, name: &str, value: impl Into<String>) {
        let mut value = Some(FieldValue::Text(value.into()));
        self.fields.retain_mut(|(field, current)| {
            if field != name {
                return true;
            }
            match value.take() {
                Some(replacement) => {
                    *current = replacement;
                    true
                }
                None => false,
            }
        });
        if let Some(value) = value {
            self.fields.push((name.to_string(), value));
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Rebuilds the submission as an outbound multipart body, field for field.
    pub fn into_multipart(self) -> Result<Form, reqwest::Error> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = match value {
                FieldValue::Text(text) => form.text(name, text),
                FieldValue::File {
                    filename,
                    content_type,
                    data,
                } => {
                    let mut part = Part::bytes(data).file_name(filename);
                    if let Some(content_type) = content_type {
                        part = part.mime_str(&content_type)?;
                    }
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}

/// The six fields every horoscope request must carry, borrowed from a
/// validated [`FormSubmission`].
#[derive(Debug, PartialEq)]
pub struct HoroscopeSubmission<'a> {
    pub name: &'a str,
    pub date_of_birth: &'a str,
    pub time_of_birth: &'a str,
    pub gender: &'a str,
    pub state: &'a str,
    pub city: &'a str,
}

impl<'a> HoroscopeSubmission<'a> {
    /// Fails on the first missing field, in declaration order.
    pub fn validate(form: &'a FormSubmission) -> ProxyResult<Self> {
        for field in REQUIRED_HOROSCOPE_FIELDS {
            if !form.get(field).is_some_and(FieldValue::is_present) {
                return Err(AppError::MissingField(field));
            }
        }

        // A required field submitted as a file is present but has no text.
        let text = move |field: &str| form.text(field).unwrap_or_default();
        Ok(Self {
            name: text("name"),
            date_of_birth: text("date_of_birth"),
            time_of_birth: text("time_of_birth"),
            gender: text("gender"),
            state: text("state"),
            city: text("city"),
        })
    }
}
